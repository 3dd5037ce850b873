//! Streak friend records

use serde::{Deserialize, Serialize};

/// A friend with a daily streak counter.
///
/// `last_interaction` is milliseconds since the Unix epoch. A zero `streak`
/// means the streak is expired; otherwise `last_interaction` is the moment
/// it was last extended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub streak: u32,
    pub last_interaction: i64,
}

impl Friend {
    pub fn is_active(&self) -> bool {
        self.streak > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_uses_browser_field_names() {
        let friend = Friend {
            id: 2,
            name: "Ben".to_string(),
            avatar: "https://picsum.photos/seed/ben/100".to_string(),
            streak: 45,
            last_interaction: 1_700_000_000_000,
        };

        let value = serde_json::to_value(&friend).unwrap();
        assert_eq!(value["lastInteraction"], 1_700_000_000_000_i64);
        assert!(value.get("last_interaction").is_none());

        let parsed: Friend = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, friend);
        assert!(parsed.is_active());
    }
}
