//! Fixed landing-page header
//!
//! Transparent at the top of the page, frosted and more compact once the page
//! is scrolled past the threshold. Below the `md` breakpoint the links and
//! session actions move into the toggleable mobile panel.

use leptos::prelude::*;
use subspace_core::{Layout, MenuState, SiteConfig};

use crate::components::{Logo, MenuToggle, MobileMenu, NavItem, SessionActions};
use crate::scroll_hook::use_scroll_state;
use crate::site::use_site_config;

/// CSS classes of the header for a given scroll state
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar navbar-enter navbar-scrolled"
    } else {
        "navbar navbar-enter navbar-transparent"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site_config();
    let scroll = use_scroll_state();
    let menu = RwSignal::new(MenuState::Closed);

    let brand = Signal::derive(move || site.with(|config| config.brand.clone()));
    let links = Signal::derive(move || site.with(SiteConfig::nav_links));

    view! {
        <header class=move || header_class(scroll.get().is_scrolled())>
            <div class="navbar-container">
                <Logo brand />

                <nav class="navbar-links" aria-label="Page sections">
                    <For
                        each=move || links.get()
                        key=|link| link.href.clone()
                        children=move |link| view! { <NavItem link /> }
                    />
                </nav>

                <div class="navbar-actions">
                    <SessionActions layout=Layout::Desktop />
                </div>

                <MenuToggle menu />
            </div>

            <MobileMenu menu links />
        </header>
    }
}
