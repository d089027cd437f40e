//! subspace-core - Core library for the SubSpace site
//!
//! Platform-independent navbar model: scroll and menu state, the session
//! action area, in-page links, routes, and site configuration. Compiles for
//! both native and `wasm32` targets.

pub mod config;
pub mod error;
pub mod menu;
pub mod nav;
pub mod routes;
pub mod scroll;
pub mod session;

pub use config::SiteConfig;
pub use error::CoreError;
pub use menu::{MenuEvent, MenuState};
pub use nav::{anchor_for, nav_links, NavLink, NAV_LABELS};
pub use routes::{AuthTab, Route};
pub use scroll::{ScrollState, SCROLL_THRESHOLD_PX};
pub use session::{
    session_actions, ActionKind, ActionStyle, Layout, SessionAction, SessionUser, SessionView,
};
