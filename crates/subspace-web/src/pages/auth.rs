//! Login / signup view
//!
//! `?tab=signup` pre-selects the signup tab. Submitting a valid email signs
//! the user in through the auth context and returns to the landing page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use subspace_core::routes::AUTH_TAB_PARAM;
use subspace_core::{AuthTab, Route, SessionUser};

use crate::auth::use_auth;

fn tab_class(tab: AuthTab, active: AuthTab) -> &'static str {
    if tab == active {
        "auth-tab auth-tab-active"
    } else {
        "auth-tab"
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let navigate = use_navigate();

    let tab = Memo::new(move |_| {
        query.with(|params| AuthTab::from_query(params.get(AUTH_TAB_PARAM).as_deref()))
    });
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match SessionUser::parse(&email.get_untracked()) {
            Ok(user) => {
                set_error.set(None);
                auth.sign_in(user);
                navigate(Route::Home.path(), Default::default());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="page auth-page">
            <h1>{move || tab.get().heading()}</h1>

            <div class="auth-tabs">
                <A
                    href=AuthTab::Login.route().path()
                    attr:class=move || tab_class(AuthTab::Login, tab.get())
                >
                    "Login"
                </A>
                <A
                    href=AuthTab::Signup.route().path()
                    attr:class=move || tab_class(AuthTab::Signup, tab.get())
                >
                    "Get Invited"
                </A>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |e| set_email.set(event_target_value(&e))
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn-primary">
                    {move || tab.get().submit_label()}
                </button>
            </form>
        </section>
    }
}
