//! Profile page component

use leptos::prelude::*;
use leptos_router::components::A;
use subspace_core::Route;

use crate::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <section class="page profile-page">
            <h1>"Profile"</h1>
            {move || match auth.user() {
                Some(user) => view! {
                    <p class="profile-email">"Signed in as " <strong>{user.email}</strong></p>
                    <button class="btn btn-ghost" on:click=move |_| auth.sign_out()>
                        "Logout"
                    </button>
                }
                .into_any(),
                None => view! {
                    <p class="hint">"You are not signed in."</p>
                    <A href=Route::Auth.path() attr:class="btn btn-primary">
                        "Login"
                    </A>
                }
                .into_any(),
            }}
        </section>
    }
}
