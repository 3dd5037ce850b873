//! Qoogle Types - Pure type definitions for WASM compatibility
//!
//! This crate contains only pure data types with no async runtime dependencies,
//! so both the terminal client and the browser app can share them.

pub mod friend;
pub mod reel;
pub mod search;
pub mod user;

pub use friend::*;
pub use reel::*;
pub use search::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Screens reachable from the bottom navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Search,
    Reels,
    Streaks,
}

impl View {
    /// All views in navigation order
    pub fn all() -> &'static [View] {
        &[View::Search, View::Reels, View::Streaks]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Search => "search",
            View::Reels => "reels",
            View::Streaks => "streaks",
        }
    }

    /// Label shown under the navigation icon
    pub fn label(&self) -> &'static str {
        match self {
            View::Search => "Search",
            View::Reels => "Reels",
            View::Streaks => "Streaks",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_display_and_labels() {
        let names: Vec<String> = View::all().iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["search", "reels", "streaks"]);
        assert_eq!(View::Streaks.label(), "Streaks");
        assert_eq!(View::default(), View::Search);
    }

    #[test]
    fn test_view_serializes_lowercase() {
        let json = serde_json::to_string(&View::Streaks).unwrap();
        assert_eq!(json, r#""streaks""#);
    }
}
