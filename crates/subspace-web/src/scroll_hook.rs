//! Scroll hook driving the header's compact style
//!
//! The subscription is taken when the hook runs (component mount) and
//! released by `on_cleanup` when the owning component unmounts.

use leptos::ev;
use leptos::prelude::*;
use subspace_core::{ScrollState, SCROLL_THRESHOLD_PX};

/// Receives the page's vertical offset on every scroll event
pub type ScrollCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Something that emits vertical scroll offsets
pub trait ScrollSource {
    fn subscribe(&self, on_scroll: ScrollCallback) -> ScrollSubscription;
}

/// Live subscription to a [`ScrollSource`]. Dropping it without calling
/// [`ScrollSubscription::release`] leaves the listener attached.
#[must_use = "the listener stays attached until the subscription is released"]
pub struct ScrollSubscription {
    release: Box<dyn FnOnce() + Send + Sync>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Box::new(release),
        }
    }

    pub fn release(self) {
        (self.release)();
    }
}

/// The browser window's scroll events
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(&self, on_scroll: ScrollCallback) -> ScrollSubscription {
        let handle = window_event_listener(ev::scroll, move |_| {
            on_scroll(window().scroll_y().unwrap_or(0.0));
        });
        ScrollSubscription::new(move || handle.remove())
    }
}

/// Scroll state of the window, using the default threshold
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    use_scroll_state_with(WindowScroll, SCROLL_THRESHOLD_PX)
}

/// Scroll state fed by `source`. Only notifies subscribers when the
/// scrolled flag actually flips.
pub fn use_scroll_state_with(source: impl ScrollSource, threshold: f64) -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::with_threshold(threshold));

    let subscription = source.subscribe(Box::new(move |offset| {
        set_state.maybe_update(|current| current.observe(offset));
    }));

    on_cleanup(move || subscription.release());

    state
}
