use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feature,
    Page,
    Component,
}

impl Category {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Feature => "Features",
            Category::Page => "Pages",
            Category::Component => "Components",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Category] {
        &[Category::Feature, Category::Page, Category::Component]
    }
}

/// A navigable destination. Defined at build time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route(pub String);

impl Route {
    #[must_use]
    pub fn home() -> Self {
        Self("/".to_string())
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification handed to the toast stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Info,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Warning,
        }
    }
}
