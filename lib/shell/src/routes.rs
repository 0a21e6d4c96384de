//! The declarative page table.
//!
//! Pure data consumed by the host for dispatch and navigation menus.
//! Deliberately separate from guard configuration: a route entry says
//! which page lives at a path, never whether the path is public. Paths
//! here may contain `:param` dynamic segments — that is router syntax,
//! not whitelist syntax.

use serde::{Deserialize, Serialize};

/// A single page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Human-readable page name.
    pub name: String,
    /// Path template, possibly with `:param` segments.
    pub path: String,
    /// Whether the entry appears in navigation menus.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl RouteEntry {
    /// Creates a menu-visible route.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            visible: true,
        }
    }

    /// Creates a route hidden from navigation menus.
    #[must_use]
    pub fn hidden(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(name, path)
        }
    }

    /// Returns true if the path contains a `:param` dynamic segment.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.path.split('/').any(|segment| segment.starts_with(':'))
    }
}

/// The ordered set of page routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates a table from the given entries.
    #[must_use]
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Returns all entries, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Returns the entries shown in navigation menus.
    pub fn visible_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }
}
