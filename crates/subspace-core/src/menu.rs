//! Open/closed state machine for the mobile menu and the user dropdown
//!
//! ```text
//! closed --toggle--> open
//! open   --toggle--> closed
//! open   --select--> closed
//! closed --select--> closed
//! ```
//!
//! Clicking outside an open dropdown or pressing Escape counts as `select`.

use serde::{Deserialize, Serialize};

/// Menu visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input to the menu state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger or trigger button pressed
    Toggle,
    /// An entry inside the open menu was chosen
    Select,
}

impl MenuEvent {
    /// Event a key press maps to, if any
    pub fn from_key(key: &str) -> Option<MenuEvent> {
        match key {
            "Escape" => Some(MenuEvent::Select),
            _ => None,
        }
    }
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::Select) => MenuState::Closed,
        }
    }

    /// Apply `event` in place, returning true if the state changed
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        let next = self.apply(event);
        let changed = next != *self;
        *self = next;
        changed
    }

    /// Value for the trigger's `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let open = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.apply(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_select_closes_open_menu() {
        assert_eq!(MenuState::Open.apply(MenuEvent::Select), MenuState::Closed);
    }

    #[test]
    fn test_select_while_closed_is_noop() {
        let mut state = MenuState::Closed;
        assert!(!state.handle(MenuEvent::Select));
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_handle_reports_change() {
        let mut state = MenuState::Closed;
        assert!(state.handle(MenuEvent::Toggle));
        assert!(state.is_open());
        assert_eq!(state.aria_expanded(), "true");
        assert!(state.handle(MenuEvent::Select));
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_escape_dismisses() {
        assert_eq!(MenuEvent::from_key("Escape"), Some(MenuEvent::Select));
        assert_eq!(MenuEvent::from_key("Enter"), None);
        assert_eq!(MenuEvent::from_key("escape"), None);

        let mut state = MenuState::Open;
        if let Some(event) = MenuEvent::from_key("Escape") {
            state.handle(event);
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_toggle_sequence_parity() {
        let mut state = MenuState::Closed;
        for _ in 0..7 {
            state.handle(MenuEvent::Toggle);
        }
        assert!(state.is_open());
    }
}
