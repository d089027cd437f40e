//! Server-rendered markup of the navbar's session and mobile components

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;
use subspace_core::nav::default_nav_links;
use subspace_core::{session_actions, Layout, MenuEvent, MenuState, SessionUser};
use subspace_web::components::{send_menu_event, MobileMenu, SessionActions, UserMenu};
use subspace_web::AuthContext;

/// Run `f` with a router location and an auth context for `user`
fn with_session<T>(user: Option<SessionUser>, f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    let out = owner.with(|| {
        provide_context(RequestUrl::new("/"));
        provide_context(AuthContext::new(user));
        f()
    });
    owner.cleanup();
    out
}

fn jane() -> Option<SessionUser> {
    Some(SessionUser::new("jane@example.com"))
}

fn render_actions(layout: Layout) -> String {
    view! {
        <Router>
            <SessionActions layout />
        </Router>
    }
    .to_html()
}

fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn test_anonymous_desktop_offers_login_and_invite() {
    let html = with_session(None, || render_actions(Layout::Desktop));

    assert_eq!(hrefs(&html), vec!["/auth", "/auth?tab=signup"]);
    assert!(html.contains("Login"));
    assert!(html.contains("Get Invited"));
    assert!(!html.contains("user-menu"));
}

#[test]
fn test_anonymous_layouts_share_targets() {
    let (desktop, mobile) = with_session(None, || {
        (
            render_actions(Layout::Desktop),
            render_actions(Layout::Mobile),
        )
    });

    assert_eq!(hrefs(&desktop), hrefs(&mobile));
    assert!(mobile.contains("btn-block"));
}

#[test]
fn test_signed_in_desktop_shows_closed_trigger() {
    let html = with_session(jane(), || render_actions(Layout::Desktop));

    assert!(html.contains("<span>jane</span>"));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("user-menu-content"));
    assert!(!html.contains("/auth"));
}

#[test]
fn test_signed_in_layouts_share_actions() {
    let (dropdown, mobile) = with_session(jane(), || {
        let user = SessionUser::new("jane@example.com");
        let menu = RwSignal::new(MenuState::Open);
        let dropdown = view! {
            <Router>
                <UserMenu
                    display_name=user.display_name().to_string()
                    actions=session_actions(Some(&user))
                    dropdown=menu
                />
            </Router>
        }
        .to_html();
        (dropdown, render_actions(Layout::Mobile))
    });

    assert_eq!(hrefs(&dropdown), vec!["/profile"]);
    assert_eq!(hrefs(&mobile), vec!["/profile"]);
    assert!(dropdown.contains("Logout"));
    assert!(mobile.contains("Logout"));
    assert!(!mobile.contains("user-menu"));
}

#[test]
fn test_user_menu_dismissed_by_select() {
    with_session(jane(), || {
        let user = SessionUser::new("jane@example.com");
        let menu = RwSignal::new(MenuState::Open);
        let render = || {
            let user = user.clone();
            view! {
                <Router>
                    <UserMenu
                        display_name=user.display_name().to_string()
                        actions=session_actions(Some(&user))
                        dropdown=menu
                    />
                </Router>
            }
            .to_html()
        };

        let open = render();
        assert!(open.contains("user-menu-backdrop"));
        assert!(open.contains("user-menu-content"));
        assert!(open.contains("aria-expanded=\"true\""));

        // Every dismissal path of the dropdown sends Select
        send_menu_event(menu, MenuEvent::Select);
        let closed = render();
        assert!(!closed.contains("user-menu-backdrop"));
        assert!(!closed.contains("user-menu-content"));
        assert!(closed.contains("<span>jane</span>"));
    });
}

#[test]
fn test_open_mobile_menu_lists_anchors_then_actions() {
    let html = with_session(None, || {
        let menu = RwSignal::new(MenuState::Open);
        let links = Signal::derive(default_nav_links);
        view! {
            <Router>
                <MobileMenu menu links />
            </Router>
        }
        .to_html()
    });

    assert_eq!(
        hrefs(&html),
        vec![
            "#about",
            "#features",
            "#creators",
            "#join",
            "/auth",
            "/auth?tab=signup"
        ]
    );
    assert_eq!(html.matches("mobile-nav-link").count(), 4);
}

#[test]
fn test_mobile_menu_closes_on_select() {
    with_session(None, || {
        let menu = RwSignal::new(MenuState::Open);
        let links = Signal::derive(default_nav_links);
        let render = move || {
            view! {
                <Router>
                    <MobileMenu menu links />
                </Router>
            }
            .to_html()
        };

        assert!(render().contains("mobile-nav-link"));

        send_menu_event(menu, MenuEvent::Select);
        let closed = render();
        assert!(!closed.contains("mobile-nav-link"));
        assert!(!closed.contains("/auth"));

        // Select on a closed menu leaves it closed
        send_menu_event(menu, MenuEvent::Select);
        assert_eq!(menu.get_untracked(), MenuState::Closed);
    });
}
