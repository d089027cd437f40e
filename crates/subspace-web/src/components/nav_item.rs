//! Desktop in-page nav link

use leptos::prelude::*;
use subspace_core::NavLink;

/// Anchor to a page section, fading in after its stagger delay
#[component]
pub fn NavItem(link: NavLink) -> impl IntoView {
    let style = format!("animation-delay: {}ms", link.entrance_delay_ms);

    view! {
        <a href=link.href class="nav-item navbar-enter" style=style>
            {link.label}
        </a>
    }
}
