//! Session action area, shared by the desktop bar and the mobile panel
//!
//! Both layouts render the same `session_actions` list; only the desktop
//! authenticated variant wraps it in a dropdown behind a user trigger.

use leptos::prelude::*;
use leptos_router::components::A;
use subspace_core::{
    session_actions, ActionKind, ActionStyle, Layout, MenuEvent, MenuState, SessionAction,
    SessionView,
};

use crate::auth::use_auth;
use crate::components::icons::{LogOutIcon, UserIcon};
use crate::components::send_menu_event;

/// CSS classes for an action button
pub fn action_class(style: ActionStyle, layout: Layout) -> &'static str {
    match (style, layout) {
        (ActionStyle::Ghost, Layout::Desktop) => "btn btn-ghost",
        (ActionStyle::Primary, Layout::Desktop) => "btn btn-primary",
        (ActionStyle::Ghost, Layout::Mobile) => "btn btn-ghost btn-start",
        (ActionStyle::Primary, Layout::Mobile) => "btn btn-primary btn-block",
    }
}

/// Login/signup or profile/logout, depending on the session
#[component]
pub fn SessionActions(layout: Layout) -> impl IntoView {
    let auth = use_auth();
    let dropdown = RwSignal::new(MenuState::Closed);

    move || {
        let user = auth.user();
        let actions = session_actions(user.as_ref());

        match (SessionView::from_user(user.as_ref()), layout) {
            (SessionView::Authenticated { display_name }, Layout::Desktop) => {
                view! { <UserMenu display_name actions dropdown /> }.into_any()
            }
            _ => actions
                .into_iter()
                .map(|action| view! { <ActionButton action layout /> })
                .collect_view()
                .into_any(),
        }
    }
}

/// Desktop trigger showing the user's name, with a dropdown of actions.
/// Clicking outside the dropdown or pressing Escape dismisses it.
#[component]
pub fn UserMenu(
    display_name: String,
    actions: Vec<SessionAction>,
    dropdown: RwSignal<MenuState>,
) -> impl IntoView {
    let actions = StoredValue::new(actions);
    let close = Callback::new(move |_| send_menu_event(dropdown, MenuEvent::Select));

    view! {
        <div
            class="user-menu"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if let Some(event) = MenuEvent::from_key(&ev.key()) {
                    send_menu_event(dropdown, event);
                }
            }
        >
            <button
                class="btn btn-ghost user-menu-trigger"
                aria-haspopup="menu"
                aria-expanded=move || dropdown.get().aria_expanded()
                on:click=move |_| send_menu_event(dropdown, MenuEvent::Toggle)
            >
                <UserIcon />
                <span>{display_name}</span>
            </button>

            <Show when=move || dropdown.get().is_open()>
                <div class="user-menu-backdrop" on:click=move |_| close.run(())></div>
                <div class="user-menu-content" role="menu">
                    {actions
                        .get_value()
                        .into_iter()
                        .map(|action| {
                            view! { <ActionButton action layout=Layout::Desktop on_chosen=close /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// One session action. Sign-out is invoked and forgotten.
#[component]
fn ActionButton(
    action: SessionAction,
    layout: Layout,
    /// Runs before the action itself (closes the enclosing dropdown)
    #[prop(optional)]
    on_chosen: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth();
    let class = action_class(action.style, layout);
    let chosen = move || {
        if let Some(callback) = on_chosen {
            callback.run(());
        }
    };

    match action.kind {
        ActionKind::Navigate(route) => view! {
            <A href=route.path() attr:class=class on:click=move |_| chosen()>
                {action.label}
            </A>
        }
        .into_any(),
        ActionKind::SignOut => view! {
            <button
                class=class
                on:click=move |_| {
                    chosen();
                    auth.sign_out();
                }
            >
                <LogOutIcon />
                {action.label}
            </button>
        }
        .into_any(),
    }
}
