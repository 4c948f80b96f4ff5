//! Authenticated area: sidebar + header layout and the four pages behind it.

use dioxus::prelude::*;

pub(crate) mod connections;
pub(crate) mod create_content;
pub(crate) mod credits;
pub(crate) mod header;
pub(crate) mod overview;
pub(crate) mod sidebar;

pub use connections::ConnectionsPage;
pub use create_content::CreateContentPage;
pub use credits::CreditsPage;
pub use header::DashboardHeader;
pub use overview::DashboardOverview;
pub use sidebar::DashboardSidebar;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Overview,
    CreateContent,
    Credits,
    Subscription,
    Connections,
    Settings,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 6] = [
        DashboardSection::Overview,
        DashboardSection::CreateContent,
        DashboardSection::Credits,
        DashboardSection::Subscription,
        DashboardSection::Connections,
        DashboardSection::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            DashboardSection::Overview => "/dashboard",
            DashboardSection::CreateContent => "/dashboard/create",
            DashboardSection::Credits => "/dashboard/credits",
            DashboardSection::Subscription => "/dashboard/subscription",
            DashboardSection::Connections => "/dashboard/connections",
            DashboardSection::Settings => "/dashboard/settings",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            DashboardSection::Overview => "dashboard",
            DashboardSection::CreateContent => "createContent",
            DashboardSection::Credits => "credits",
            DashboardSection::Subscription => "subscription",
            DashboardSection::Connections => "navConnections",
            DashboardSection::Settings => "settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DashboardSection::Overview => "▦",
            DashboardSection::CreateContent => "✎",
            DashboardSection::Credits => "💳",
            DashboardSection::Subscription => "📦",
            DashboardSection::Connections => "🔗",
            DashboardSection::Settings => "⚙",
        }
    }

    /// Section highlighted for `path`. The overview only matches exactly;
    /// the others also match their sub-paths.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        if path == DashboardSection::Overview.path() {
            return Some(DashboardSection::Overview);
        }
        DashboardSection::ALL
            .into_iter()
            .filter(|s| *s != DashboardSection::Overview)
            .find(|s| {
                path == s.path()
                    || path
                        .strip_prefix(s.path())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
    }
}

#[component]
pub fn DashboardLayout(
    #[props(!optional)] section: Option<DashboardSection>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div { class: "dashboard",
            DashboardSidebar { active: section }
            div { class: "dashboard_main",
                DashboardHeader {}
                main { class: "dashboard_content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_matches_only_exactly() {
        assert_eq!(DashboardSection::from_path("/dashboard"), Some(DashboardSection::Overview));
        assert_eq!(DashboardSection::from_path("/dashboard/"), Some(DashboardSection::Overview));
        assert_eq!(DashboardSection::from_path("/dashboard/unknown"), None);
    }

    #[test]
    fn sections_match_sub_paths() {
        assert_eq!(
            DashboardSection::from_path("/dashboard/credits"),
            Some(DashboardSection::Credits)
        );
        assert_eq!(
            DashboardSection::from_path("/dashboard/connections/new?tab=1"),
            Some(DashboardSection::Connections)
        );
        assert_eq!(DashboardSection::from_path("/dashboard/creditsx"), None);
        assert_eq!(DashboardSection::from_path("/login"), None);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = DashboardSection::ALL.iter().map(|s| s.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), DashboardSection::ALL.len());
    }
}
