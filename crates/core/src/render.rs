//! The rendering capability the session drives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::view::{CardView, Feedback};

/// The two card grids, which double as the UI tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Results,
    Favorites,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Results => "results",
            Tab::Favorites => "favorites",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "results" => Ok(Tab::Results),
            "favorites" => Ok(Tab::Favorites),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Receives view updates from a session.
///
/// Called on the initial favorites load, when a search starts (the results
/// grid is cleared), when a search completes and after every toggle. A
/// toggle patches the affected results card and re-renders the favorites
/// grid.
pub trait RenderPort: Send + Sync {
    /// Replace the contents of `tab`'s grid.
    fn render_grid(&self, tab: Tab, cards: &[CardView]);

    /// Refresh one card in `tab`'s grid.
    fn patch_card(&self, tab: Tab, card: &CardView);

    /// Replace the feedback line.
    fn show_feedback(&self, feedback: &Feedback);
}

/// A renderer that draws nothing, for headless sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderPort for NullRenderer {
    fn render_grid(&self, _tab: Tab, _cards: &[CardView]) {}

    fn patch_card(&self, _tab: Tab, _card: &CardView) {}

    fn show_feedback(&self, _feedback: &Feedback) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse() {
        assert_eq!("results".parse::<Tab>().unwrap(), Tab::Results);
        assert_eq!("favorites".parse::<Tab>().unwrap(), Tab::Favorites);
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn test_tab_display_round_trip() {
        for tab in [Tab::Results, Tab::Favorites] {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
    }
}
