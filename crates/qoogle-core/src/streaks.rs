//! Streak rules and the per-user friend list
//!
//! A streak has two states: ACTIVE (`streak > 0`) and EXPIRED (`streak == 0`).
//! Sending extends or restarts it; letting 24 hours pass expires it.

use crate::error::{QoogleError, Result};
use crate::storage::KeyValueStore;
use qoogle_types::Friend;
use tracing::{debug, error, warn};

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Time a streak survives without a send
pub const STREAK_WINDOW_MS: i64 = 24 * HOUR_MS;

/// Elapsed time after which an active streak shows the warning indicator
pub const WARNING_THRESHOLD_MS: i64 = 20 * HOUR_MS;

/// Period of the decay sweep
pub const DECAY_SWEEP_INTERVAL_MS: u32 = 60 * 1000;

/// Storage key of a user's friend list
pub fn streaks_key(username: &str) -> String {
    format!("friends-streaks-{}", username)
}

/// Time since the last interaction. Stored timestamps are untrusted, so
/// extreme values clamp instead of overflowing.
fn elapsed(friend: &Friend, now: i64) -> i64 {
    now.saturating_sub(friend.last_interaction)
}

/// Expire the streak if the last interaction is more than 24h old
pub fn decay(friend: &Friend, now: i64) -> Friend {
    if friend.is_active() && elapsed(friend, now) > STREAK_WINDOW_MS {
        Friend {
            streak: 0,
            ..friend.clone()
        }
    } else {
        friend.clone()
    }
}

/// Extend the streak if it is still within the window, otherwise restart at 1
pub fn send(friend: &Friend, now: i64) -> Friend {
    let continuing = friend.is_active() && elapsed(friend, now) < STREAK_WINDOW_MS;
    Friend {
        streak: if continuing { friend.streak.saturating_add(1) } else { 1 },
        last_interaction: now,
        ..friend.clone()
    }
}

/// Indicator shown next to a streak count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStatus {
    Expired,
    Warning,
    Active,
}

impl StreakStatus {
    pub fn of(friend: &Friend, now: i64) -> Self {
        if !friend.is_active() {
            return StreakStatus::Expired;
        }
        let since = elapsed(friend, now);
        if since > WARNING_THRESHOLD_MS && since < STREAK_WINDOW_MS {
            StreakStatus::Warning
        } else {
            StreakStatus::Active
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StreakStatus::Expired => "",
            StreakStatus::Warning => "⌛",
            StreakStatus::Active => "🔥",
        }
    }
}

/// Demo list every user starts with
pub fn demo_friends(now: i64) -> Vec<Friend> {
    let seed = |id: u32, name: &str, streak: u32, last_interaction: i64| Friend {
        id,
        name: name.to_string(),
        avatar: format!("https://picsum.photos/seed/{}/100", name.to_lowercase()),
        streak,
        last_interaction,
    };

    vec![
        seed(1, "Alex", 12, now - 5 * HOUR_MS),
        seed(2, "Ben", 45, now - 22 * HOUR_MS),
        seed(3, "Casey", 3, now - 2 * STREAK_WINDOW_MS),
        seed(4, "Dana", 112, now - 10 * HOUR_MS),
        seed(5, "Frankie", 0, 0),
    ]
}

/// A user's friend list bound to the store it persists to.
///
/// Every mutation writes the whole list back. Write failures are logged and
/// otherwise ignored.
pub struct StreakBook<S> {
    store: S,
    key: String,
    friends: Vec<Friend>,
}

impl<S: KeyValueStore> StreakBook<S> {
    /// Load the user's list and run one decay sweep
    pub fn load(store: S, username: &str, now: i64) -> Self {
        let mut book = Self::open(store, username, now);
        if book.sweep(now) == 0 {
            book.persist();
        }
        book
    }

    /// Load the user's list without sweeping, seeding the demo friends when
    /// nothing usable is stored
    pub fn open(store: S, username: &str, now: i64) -> Self {
        let key = streaks_key(username);
        let friends = match store.get_json::<Vec<Friend>>(&key) {
            Ok(Some(friends)) => friends,
            Ok(None) => {
                debug!("Seeding demo friends for {}", username);
                demo_friends(now)
            }
            Err(e) => {
                error!("Error reading streaks from storage: {}", e);
                demo_friends(now)
            }
        };

        Self {
            store,
            key,
            friends,
        }
    }

    /// Friends ordered by streak, longest first
    pub fn ranked(&self) -> Vec<Friend> {
        let mut friends = self.friends.clone();
        friends.sort_by(|a, b| b.streak.cmp(&a.streak));
        friends
    }

    pub fn get(&self, id: u32) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// Apply the decay rule to every friend. Returns how many streaks expired.
    pub fn sweep(&mut self, now: i64) -> usize {
        let mut expired = 0;
        for friend in &mut self.friends {
            let decayed = decay(friend, now);
            if decayed != *friend {
                debug!("Streak with {} expired", friend.name);
                *friend = decayed;
                expired += 1;
            }
        }
        if expired > 0 {
            self.persist();
        }
        expired
    }

    pub fn send(&mut self, id: u32, now: i64) -> Result<&Friend> {
        let index = self
            .friends
            .iter()
            .position(|f| f.id == id)
            .ok_or(QoogleError::FriendNotFound(id))?;

        self.friends[index] = send(&self.friends[index], now);
        self.persist();
        Ok(&self.friends[index])
    }

    fn persist(&self) {
        if let Err(e) = self.store.set_json(&self.key, &self.friends) {
            warn!("Error writing streaks to storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const NOW: i64 = 1_760_000_000_000;

    fn friend(streak: u32, last_interaction: i64) -> Friend {
        Friend {
            id: 7,
            name: "Robin".to_string(),
            avatar: "https://picsum.photos/seed/robin/100".to_string(),
            streak,
            last_interaction,
        }
    }

    #[test]
    fn test_decay_is_noop_inside_window() {
        for elapsed in [0, HOUR_MS, 20 * HOUR_MS, STREAK_WINDOW_MS] {
            let f = friend(5, NOW - elapsed);
            assert_eq!(decay(&f, NOW), f, "elapsed {}", elapsed);
        }
        let expired = friend(0, NOW - 3 * STREAK_WINDOW_MS);
        assert_eq!(decay(&expired, NOW), expired);
    }

    #[test]
    fn test_decay_expires_after_window() {
        let f = friend(5, NOW - 25 * HOUR_MS);
        let decayed = decay(&f, NOW);
        assert_eq!(decayed.streak, 0);
        assert_eq!(decayed.last_interaction, f.last_interaction);

        let just_over = friend(1, NOW - STREAK_WINDOW_MS - 1);
        assert_eq!(decay(&just_over, NOW).streak, 0);
    }

    #[test]
    fn test_send_within_window_increments() {
        let f = friend(5, NOW - 23 * HOUR_MS);
        let sent = send(&f, NOW);
        assert_eq!(sent.streak, 6);
        assert_eq!(sent.last_interaction, NOW);
        assert_eq!(StreakStatus::of(&sent, NOW), StreakStatus::Active);
    }

    #[test]
    fn test_send_outside_window_restarts() {
        assert_eq!(send(&friend(5, NOW - 25 * HOUR_MS), NOW).streak, 1);
        assert_eq!(send(&friend(5, NOW - STREAK_WINDOW_MS), NOW).streak, 1);
        assert_eq!(send(&friend(0, NOW - HOUR_MS), NOW).streak, 1);
        assert_eq!(send(&friend(0, 0), NOW).last_interaction, NOW);
    }

    #[test]
    fn test_status_indicator() {
        assert_eq!(StreakStatus::of(&friend(0, NOW - 21 * HOUR_MS), NOW), StreakStatus::Expired);
        assert_eq!(StreakStatus::of(&friend(3, NOW - 21 * HOUR_MS), NOW), StreakStatus::Warning);
        assert_eq!(StreakStatus::of(&friend(3, NOW - 20 * HOUR_MS), NOW), StreakStatus::Active);
        assert_eq!(StreakStatus::of(&friend(3, NOW - STREAK_WINDOW_MS), NOW), StreakStatus::Active);
        assert_eq!(StreakStatus::of(&friend(3, NOW - HOUR_MS), NOW), StreakStatus::Active);
        assert_eq!(StreakStatus::Warning.emoji(), "⌛");
        assert_eq!(StreakStatus::Expired.emoji(), "");
    }

    #[test]
    fn test_load_seeds_and_sweeps() {
        let store = MemoryStore::new();
        let book = StreakBook::load(&store, "alice", NOW);

        assert_eq!(book.ranked().len(), 5);
        // Casey's two-day-old streak is expired by the initial sweep.
        assert_eq!(book.get(3).unwrap().streak, 0);
        assert_eq!(book.get(2).unwrap().streak, 45);
        assert!(store.get(&streaks_key("alice")).unwrap().is_some());

        let ranked: Vec<u32> = book.ranked().iter().map(|f| f.streak).collect();
        assert_eq!(ranked, vec![112, 45, 12, 0, 0]);
    }

    #[test]
    fn test_send_persists_per_user() {
        let store = MemoryStore::new();
        {
            let mut book = StreakBook::load(&store, "alice", NOW);
            let alex = book.send(1, NOW).unwrap();
            assert_eq!(alex.streak, 13);
            assert!(matches!(book.send(99, NOW), Err(QoogleError::FriendNotFound(99))));
        }

        let reloaded = StreakBook::load(&store, "alice", NOW + 1000);
        assert_eq!(reloaded.get(1).unwrap().streak, 13);
        assert_eq!(reloaded.get(1).unwrap().last_interaction, NOW);

        let other = StreakBook::load(&store, "bob", NOW);
        assert_eq!(other.get(1).unwrap().streak, 12);
    }

    #[test]
    fn test_sweep_reports_changes() {
        let store = MemoryStore::new();
        store
            .set_json(&streaks_key("alice"), &vec![friend(5, NOW - 23 * HOUR_MS)])
            .unwrap();

        let mut book = StreakBook::load(&store, "alice", NOW);
        assert_eq!(book.sweep(NOW), 0);
        assert_eq!(book.sweep(NOW + 2 * HOUR_MS), 1);
        assert_eq!(book.sweep(NOW + 2 * HOUR_MS), 0);
        assert_eq!(book.get(7).unwrap().streak, 0);

        let stored: Vec<Friend> = store.get_json(&streaks_key("alice")).unwrap().unwrap();
        assert_eq!(stored[0].streak, 0);
    }

    #[test]
    fn test_open_does_not_sweep() {
        let store = MemoryStore::new();
        let mut book = StreakBook::open(&store, "alice", NOW);
        assert_eq!(book.get(3).unwrap().streak, 3);
        assert!(store.get(&streaks_key("alice")).unwrap().is_none());
        assert_eq!(book.sweep(NOW), 1);
        assert!(store.get(&streaks_key("alice")).unwrap().is_some());
    }

    #[test]
    fn test_extreme_stored_values_do_not_overflow() {
        let store = MemoryStore::new();
        let mut maxed = friend(u32::MAX, NOW - HOUR_MS);
        maxed.id = 1;
        let mut ancient = friend(3, i64::MIN);
        ancient.id = 2;
        let mut future = friend(4, i64::MAX);
        future.id = 3;
        store
            .set_json(&streaks_key("alice"), &vec![maxed, ancient, future])
            .unwrap();

        let mut book = StreakBook::load(&store, "alice", NOW);
        assert_eq!(book.get(2).unwrap().streak, 0);
        assert_eq!(book.get(3).unwrap().streak, 4);
        assert_eq!(StreakStatus::of(book.get(3).unwrap(), NOW), StreakStatus::Active);

        let sent = book.send(1, NOW).unwrap();
        assert_eq!(sent.streak, u32::MAX);
        assert_eq!(sent.last_interaction, NOW);
        assert_eq!(book.send(2, i64::MIN).unwrap().streak, 1);
    }

    #[test]
    fn test_corrupt_snapshot_reseeds() {
        let store = MemoryStore::new();
        store.set(&streaks_key("alice"), "[{").unwrap();
        let book = StreakBook::load(&store, "alice", NOW);
        assert_eq!(book.ranked().len(), 5);
    }
}
