//! Landing page
//!
//! Renders one section per nav label with the id the navbar anchors point at.

use leptos::prelude::*;
use leptos_router::components::A;
use subspace_core::nav::section_id;
use subspace_core::{NavLink, Route, SiteConfig};

use crate::site::use_site_config;

fn section_blurb(label: &str) -> &'static str {
    match section_id(label).as_str() {
        "about" => "A home for independent creators and the communities that follow them.",
        "features" => "Members-only spaces, early drops, and direct conversations with creators.",
        "creators" => "Meet the people building their worlds on SubSpace.",
        "join" => "Membership is invite-only while we grow. Request yours today.",
        _ => "",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site_config();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">{move || site.with(|config| config.brand.clone())}</h1>
                <p class="hero-subtitle">"Where creators and their closest fans meet."</p>
                <A href=Route::Signup.path() attr:class="btn btn-primary">
                    "Get Invited"
                </A>
            </section>

            <For
                each=move || site.with(SiteConfig::nav_links)
                key=|link| link.href.clone()
                children=move |link: NavLink| {
                    let id = section_id(&link.label);
                    let blurb = section_blurb(&link.label);
                    view! {
                        <section id=id class="landing-section">
                            <h2>{link.label}</h2>
                            <p>{blurb}</p>
                        </section>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_section_has_copy() {
        for link in SiteConfig::default().nav_links() {
            assert!(!section_blurb(&link.label).is_empty(), "{}", link.label);
        }
    }

    #[test]
    fn test_unknown_section_is_blank() {
        assert_eq!(section_blurb("Pricing"), "");
    }
}
