//! Menu state held in a signal

use leptos::prelude::*;
use subspace_core::{MenuEvent, MenuState};

/// Feed `event` to the menu, notifying subscribers only on a change
pub fn send_menu_event(menu: RwSignal<MenuState>, event: MenuEvent) {
    menu.maybe_update(|state| state.handle(event));
}
