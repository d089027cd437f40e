//! Leptos UI components

mod icons;
mod logo;
mod menu_signal;
mod mobile_menu;
mod nav_item;
mod navbar;
mod session_actions;

pub use icons::{CloseIcon, LogOutIcon, MenuIcon, UserIcon};
pub use logo::Logo;
pub use menu_signal::send_menu_event;
pub use mobile_menu::{MenuToggle, MobileMenu};
pub use nav_item::NavItem;
pub use navbar::{header_class, Navbar};
pub use session_actions::{action_class, SessionActions, UserMenu};
