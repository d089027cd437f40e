//! Session view and the session action area
//!
//! The auth collaborator owns the session; this module only derives what the
//! navbar shows from `Option<&SessionUser>`. Both the desktop and the mobile
//! layouts render the list returned by [`session_actions`], so they can never
//! disagree about which action area is visible.

use crate::error::CoreError;
use crate::routes::Route;
use serde::{Deserialize, Serialize};

/// Signed-in user as exposed by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

impl SessionUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Validate user input from the auth form
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let email = input.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };

        if valid {
            Ok(Self::new(email))
        } else {
            Err(CoreError::InvalidEmail {
                email: input.to_string(),
            })
        }
    }

    /// Local part of the email (text before the first `@`)
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

/// Which action area is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    Authenticated { display_name: String },
    Anonymous,
}

impl SessionView {
    pub fn from_user(user: Option<&SessionUser>) -> Self {
        match user {
            Some(user) => SessionView::Authenticated {
                display_name: user.display_name().to_string(),
            },
            None => SessionView::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionView::Authenticated { .. })
    }
}

/// Navbar layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

/// What an action does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Navigate(Route),
    /// Fire-and-forget call into the auth collaborator
    SignOut,
}

/// Visual weight of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Ghost,
    Primary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAction {
    pub label: &'static str,
    pub kind: ActionKind,
    pub style: ActionStyle,
}

impl SessionAction {
    const fn new(label: &'static str, kind: ActionKind, style: ActionStyle) -> Self {
        Self { label, kind, style }
    }

    /// Navigation target, if this action navigates
    pub fn target(&self) -> Option<&'static str> {
        match self.kind {
            ActionKind::Navigate(route) => Some(route.path()),
            ActionKind::SignOut => None,
        }
    }
}

const AUTHENTICATED_ACTIONS: [SessionAction; 2] = [
    SessionAction::new("Profile", ActionKind::Navigate(Route::Profile), ActionStyle::Ghost),
    SessionAction::new("Logout", ActionKind::SignOut, ActionStyle::Ghost),
];

const ANONYMOUS_ACTIONS: [SessionAction; 2] = [
    SessionAction::new("Login", ActionKind::Navigate(Route::Auth), ActionStyle::Ghost),
    SessionAction::new("Get Invited", ActionKind::Navigate(Route::Signup), ActionStyle::Primary),
];

/// Actions for the current session, shared by both layouts
pub fn session_actions(user: Option<&SessionUser>) -> Vec<SessionAction> {
    match user {
        Some(_) => AUTHENTICATED_ACTIONS.to_vec(),
        None => ANONYMOUS_ACTIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_local_part() {
        let user = SessionUser::new("jane@example.com");
        assert_eq!(user.display_name(), "jane");
    }

    #[test]
    fn test_display_name_without_at_sign() {
        assert_eq!(SessionUser::new("jane").display_name(), "jane");
        assert_eq!(SessionUser::new("").display_name(), "");
    }

    #[test]
    fn test_anonymous_actions_target_auth_routes() {
        let targets: Vec<_> = session_actions(None)
            .iter()
            .filter_map(SessionAction::target)
            .collect();
        assert_eq!(targets, vec!["/auth", "/auth?tab=signup"]);
    }

    #[test]
    fn test_authenticated_actions_profile_and_sign_out() {
        let user = SessionUser::new("jane@example.com");
        let actions = session_actions(Some(&user));
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].target(), Some("/profile"));
        assert_eq!(actions[1].kind, ActionKind::SignOut);
    }

    #[test]
    fn test_exactly_one_action_area() {
        let user = SessionUser::new("jane@example.com");
        for candidate in [None, Some(&user)] {
            let view = SessionView::from_user(candidate);
            let actions = session_actions(candidate);
            let has_sign_out = actions.iter().any(|a| a.kind == ActionKind::SignOut);
            let has_login = actions
                .iter()
                .any(|a| a.kind == ActionKind::Navigate(Route::Auth));
            assert_eq!(view.is_authenticated(), has_sign_out);
            assert_ne!(has_sign_out, has_login);
        }
    }

    #[test]
    fn test_session_view_from_user() {
        let user = SessionUser::new("sam@subspace.dev");
        assert_eq!(
            SessionView::from_user(Some(&user)),
            SessionView::Authenticated {
                display_name: "sam".to_string()
            }
        );
        assert_eq!(SessionView::from_user(None), SessionView::Anonymous);
    }

    #[test]
    fn test_parse_accepts_and_trims() {
        let user = SessionUser::parse("  jane@example.com ").unwrap();
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c"] {
            assert!(
                matches!(SessionUser::parse(bad), Err(CoreError::InvalidEmail { .. })),
                "accepted {:?}",
                bad
            );
        }
    }
}
