//! In-page navigation links
//!
//! Each label links to the page section whose id is the lower-cased label,
//! e.g. `Features` -> `#features`. The home page renders sections with
//! exactly these ids.

use serde::{Deserialize, Serialize};

/// Default navbar labels, in display order
pub const NAV_LABELS: [&str; 4] = ["About", "Features", "Creators", "Join"];

/// Stagger between the entrance animations of consecutive nav items
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// Fragment target for a label (`"Join"` -> `"#join"`)
pub fn anchor_for(label: &str) -> String {
    format!("#{}", section_id(label))
}

/// Section id a label points at, without the leading `#`
pub fn section_id(label: &str) -> String {
    label.trim().to_lowercase()
}

/// A single in-page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub entrance_delay_ms: u32,
}

impl NavLink {
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        let label = label.into();
        let href = anchor_for(&label);
        Self {
            label,
            href,
            entrance_delay_ms: index as u32 * ENTRANCE_STAGGER_MS,
        }
    }
}

/// Build the links for `labels`, preserving order
pub fn nav_links<S: AsRef<str>>(labels: &[S]) -> Vec<NavLink> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| NavLink::new(label.as_ref(), index))
        .collect()
}

/// Links for the built-in labels
pub fn default_nav_links() -> Vec<NavLink> {
    nav_links(&NAV_LABELS)
}
