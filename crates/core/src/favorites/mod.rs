//! The canonical, persisted set of favorite shows.

mod store;

pub use store::FavoritesStore;

use serde::Serialize;

/// Result of toggling a show's favorite membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The show was not a favorite and is now.
    Added,
    /// The show was a favorite and no longer is.
    Removed,
    /// The show was not a favorite and no record could be found for it.
    /// Nothing changed.
    Unresolved,
}

impl ToggleOutcome {
    /// Membership after the toggle.
    pub fn is_favorite(self) -> bool {
        matches!(self, ToggleOutcome::Added)
    }

    /// Whether the favorites set was mutated.
    pub fn changed(self) -> bool {
        !matches!(self, ToggleOutcome::Unresolved)
    }

    /// Label used for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ToggleOutcome::Added => "added",
            ToggleOutcome::Removed => "removed",
            ToggleOutcome::Unresolved => "unresolved",
        }
    }
}
