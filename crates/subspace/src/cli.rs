//! CLI commands for inspecting the site's navigation
//!
//! Provides the `routes` and `check` commands using subspace-core directly.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use subspace_core::{session_actions, Route, SessionUser, SiteConfig};

/// One row of the `routes` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub kind: &'static str,
    pub label: String,
    pub target: String,
}

/// Everything the navbar can link to, in display order: in-page anchors,
/// then the routed views.
pub fn route_entries(config: &SiteConfig) -> Vec<RouteEntry> {
    let anchors = config.nav_links().into_iter().map(|link| RouteEntry {
        kind: "anchor",
        label: link.label,
        target: link.href,
    });

    let views = Route::ALL.iter().map(|route| RouteEntry {
        kind: "route",
        label: route_label(*route).to_string(),
        target: route.path().to_string(),
    });

    anchors.chain(views).collect()
}

fn route_label(route: Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::Profile => "Profile",
        Route::Auth => "Login",
        Route::Signup => "Get Invited",
    }
}

/// Print the navbar targets as a table or JSON
pub fn print_routes(config: &SiteConfig, json: bool, no_color: bool) -> Result<()> {
    let entries = route_entries(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Kind", "Label", "Target"]);
    } else {
        table.set_header(vec![
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Label").fg(Color::Cyan),
            Cell::new("Target").fg(Color::Cyan),
        ]);
    }

    for entry in &entries {
        table.add_row(vec![entry.kind, entry.label.as_str(), entry.target.as_str()]);
    }

    println!("{}", config.brand);
    println!("{table}");
    Ok(())
}

/// Summary lines printed by `check` for a valid config
pub fn check_summary(config: &SiteConfig) -> Vec<String> {
    let anonymous: Vec<_> = session_actions(None)
        .iter()
        .filter_map(|a| a.target())
        .collect();
    let sample = SessionUser::new("jane@example.com");

    vec![
        format!("brand: {}", config.brand),
        format!(
            "anchors: {}",
            config
                .nav_links()
                .iter()
                .map(|l| l.href.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        format!("anonymous actions: {}", anonymous.join(", ")),
        format!(
            "signed-in trigger for {}: {}",
            sample.email,
            sample.display_name()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_entries_anchors_then_routes() {
        let entries = route_entries(&SiteConfig::default());
        let targets: Vec<&str> = entries.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(
            targets,
            vec![
                "#about",
                "#features",
                "#creators",
                "#join",
                "/",
                "/profile",
                "/auth",
                "/auth?tab=signup"
            ]
        );
        assert!(entries[..4].iter().all(|e| e.kind == "anchor"));
        assert!(entries[4..].iter().all(|e| e.kind == "route"));
    }

    #[test]
    fn test_check_summary_mentions_anchors_and_actions() {
        let summary = check_summary(&SiteConfig::default());
        assert_eq!(summary[0], "brand: SubSpace");
        assert!(summary[1].contains("#creators"));
        assert!(summary[2].contains("/auth?tab=signup"));
        assert!(summary[3].ends_with(": jane"));
    }

    #[test]
    fn test_route_entries_serialize() {
        let entries = route_entries(&SiteConfig::default());
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["kind"], "anchor");
        assert_eq!(json[0]["label"], "About");
    }
}
