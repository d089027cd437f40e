//! WASM entry point for the Leptos CSR app

#[cfg(any(feature = "csr", feature = "hydrate"))]
fn main() {
    use leptos::mount::mount_to_body;
    use subspace_web::App;

    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(not(any(feature = "csr", feature = "hydrate")))]
fn main() {
    eprintln!("Build the frontend with trunk (csr feature); serve it with `subspace serve`.");
}
