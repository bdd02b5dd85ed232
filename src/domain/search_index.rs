use super::models::{Category, SearchEntry};
use std::collections::HashSet;

pub const SEARCH_INDEX: &[SearchEntry] = &[
    SearchEntry {
        id: "deepwiki",
        title: "DeepWiki IDE",
        description: "AI-powered development environment",
        path: "/deepwiki",
        keywords: &["code", "develop", "ide", "editor", "ai", "programming"],
        category: Category::Feature,
    },
    SearchEntry {
        id: "hub",
        title: "Prompt & Result Hub",
        description: "Share and discover AI prompts",
        path: "/hub",
        keywords: &["prompts", "share", "community", "examples", "templates"],
        category: Category::Feature,
    },
    SearchEntry {
        id: "marketplace",
        title: "Marketplace",
        description: "Connect with vibe coders",
        path: "/marketplace",
        keywords: &["hire", "work", "collaborate", "projects", "freelance"],
        category: Category::Feature,
    },
    SearchEntry {
        id: "analytics",
        title: "Analytics Dashboard",
        description: "Monitor AI training and platform metrics",
        path: "/analytics",
        keywords: &["metrics", "stats", "monitoring", "performance", "data"],
        category: Category::Page,
    },
    SearchEntry {
        id: "settings",
        title: "Settings",
        description: "Configure your account and preferences",
        path: "/settings",
        keywords: &["account", "preferences", "configuration", "profile"],
        category: Category::Page,
    },
    SearchEntry {
        id: "templates",
        title: "Project Templates",
        description: "Ready-to-use project templates",
        path: "/hub/templates",
        keywords: &["templates", "boilerplate", "starter", "examples"],
        category: Category::Component,
    },
    SearchEntry {
        id: "ai-training",
        title: "AI Training",
        description: "Monitor and manage AI model training",
        path: "/analytics/training",
        keywords: &["ai", "training", "model", "machine learning"],
        category: Category::Component,
    },
    SearchEntry {
        id: "deployment",
        title: "Deployment",
        description: "Deploy your projects to production",
        path: "/deepwiki/deploy",
        keywords: &["deploy", "production", "hosting", "publish"],
        category: Category::Component,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexViolation {
    DuplicateId(&'static str),
    InvalidPath(&'static str),
}

/// Checks the invariants every index must hold: unique ids, rooted paths.
pub fn validate(entries: &[SearchEntry]) -> Result<(), IndexViolation> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(IndexViolation::DuplicateId(entry.id));
        }
        if !entry.path.starts_with('/') || entry.path.contains(char::is_whitespace) {
            return Err(IndexViolation::InvalidPath(entry.path));
        }
    }
    Ok(())
}

#[must_use]
pub fn find_by_path(path: &str) -> Option<&'static SearchEntry> {
    SEARCH_INDEX.iter().find(|e| e.path == path)
}

/// Every route the shell can display: home plus each indexed path.
#[must_use]
pub fn known_routes() -> Vec<&'static str> {
    std::iter::once("/")
        .chain(SEARCH_INDEX.iter().map(|e| e.path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_index_is_valid() {
        assert_eq!(validate(SEARCH_INDEX), Ok(()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = [SEARCH_INDEX[0].clone(), SEARCH_INDEX[0].clone()];
        assert_eq!(
            validate(&entries),
            Err(IndexViolation::DuplicateId("deepwiki"))
        );
    }

    #[test]
    fn test_unrooted_path_rejected() {
        let mut entry = SEARCH_INDEX[1].clone();
        entry.path = "hub";
        assert_eq!(validate(&[entry]), Err(IndexViolation::InvalidPath("hub")));
    }

    #[test]
    fn test_known_routes_include_home() {
        let routes = known_routes();
        assert_eq!(routes[0], "/");
        assert!(routes.contains(&"/analytics/training"));
        assert_eq!(routes.len(), SEARCH_INDEX.len() + 1);
    }
}
