//! Hamburger toggle and the stacked mobile panel

use leptos::prelude::*;
use subspace_core::{Layout, MenuEvent, MenuState, NavLink};

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::{send_menu_event, SessionActions};

/// Hamburger button, visible below the `md` breakpoint
#[component]
pub fn MenuToggle(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <button
            class="menu-toggle"
            aria-label="Toggle menu"
            aria-controls="mobile-menu"
            aria-expanded=move || menu.get().aria_expanded()
            on:click=move |_| send_menu_event(menu, MenuEvent::Toggle)
        >
            <Show when=move || menu.get().is_open() fallback=|| view! { <MenuIcon /> }>
                <CloseIcon />
            </Show>
        </button>
    }
}

/// Nav links plus the session actions, stacked. Following a link closes the
/// panel; session actions leave it as is.
#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>, links: Signal<Vec<NavLink>>) -> impl IntoView {
    let select = move |_: leptos::ev::MouseEvent| send_menu_event(menu, MenuEvent::Select);

    view! {
        <Show when=move || menu.get().is_open()>
            <div id="mobile-menu" class="mobile-menu">
                <div class="mobile-menu-inner">
                    <For
                        each=move || links.get()
                        key=|link| link.href.clone()
                        children=move |link: NavLink| {
                            view! {
                                <a href=link.href class="mobile-nav-link" on:click=select>
                                    {link.label}
                                </a>
                            }
                        }
                    />
                    <div class="mobile-menu-actions">
                        <SessionActions layout=Layout::Mobile />
                    </div>
                </div>
            </div>
        </Show>
    }
}
