//! Symbolic routes the navbar emits navigation intents for

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameter carrying the pre-selected auth tab
pub const AUTH_TAB_PARAM: &str = "tab";

/// Routed views reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Profile,
    Auth,
    /// Auth view with the signup tab pre-selected
    Signup,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Profile, Route::Auth, Route::Signup];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Auth => "/auth",
            Route::Signup => "/auth?tab=signup",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tab shown by the auth view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    /// Parse the `tab` query value. Anything other than `signup` is the login tab.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("signup") => AuthTab::Signup,
            _ => AuthTab::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthTab::Login => "Welcome back",
            AuthTab::Signup => "Request an invite",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Signup => "Get Invited",
        }
    }

    /// Route that opens the auth view on this tab
    pub fn route(self) -> Route {
        match self {
            AuthTab::Login => Route::Auth,
            AuthTab::Signup => Route::Signup,
        }
    }
}
