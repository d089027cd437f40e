//! Brand logo linking home

use leptos::prelude::*;
use leptos_router::components::A;
use subspace_core::Route;

#[component]
pub fn Logo(#[prop(into)] brand: Signal<String>) -> impl IntoView {
    view! {
        <div class="logo">
            <A href=Route::Home.path()>
                <span class="logo-text">{move || brand.get()}</span>
            </A>
        </div>
    }
}
