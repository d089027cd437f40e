//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::auth::AuthProvider;
use crate::components::Navbar;
use crate::pages::{AuthPage, HomePage, ProfilePage};
use crate::site::provide_site_config;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    provide_site_config();

    view! {
        <AuthProvider>
            <Router>
                <div class="app">
                    <Navbar />
                    <main class="content">
                        <Routes fallback=|| view! { <p class="not-found">"Not found"</p> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/auth") view=AuthPage />
                            <Route path=path!("/profile") view=ProfilePage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </AuthProvider>
    }
}
