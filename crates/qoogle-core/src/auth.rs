//! Authentication service
//!
//! Credentials are a plaintext username -> password map kept in the
//! key/value store; there is no hashing and no session token.

use crate::error::{QoogleError, Result};
use crate::storage::{KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use qoogle_types::User;
use std::collections::HashMap;
use tracing::{error, info};

/// Shortest password accepted at sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService<S> {
    store: S,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Signed-in user, if any. A corrupt record counts as signed out.
    pub fn current_user(&self) -> Option<User> {
        match self.store.get_json::<User>(CURRENT_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to parse current user from storage: {}", e);
                None
            }
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let users = self.users();
        match users.get(username) {
            Some(stored) if stored == password => {
                let user = User::new(username);
                self.set_current_user(Some(&user));
                info!("Signed in as {}", username);
                Ok(user)
            }
            _ => Err(QoogleError::InvalidCredentials),
        }
    }

    pub fn signup(&self, username: &str, password: &str) -> Result<User> {
        let mut users = self.users();
        if users.contains_key(username) {
            return Err(QoogleError::UsernameExists);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(QoogleError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        users.insert(username.to_string(), password.to_string());
        if let Err(e) = self.store.set_json(USERS_KEY, &users) {
            error!("Failed to save users to storage: {}", e);
            return Err(QoogleError::AccountCreation);
        }

        let user = User::new(username);
        self.set_current_user(Some(&user));
        info!("Created account {}", username);
        Ok(user)
    }

    pub fn logout(&self) {
        if let Some(user) = self.current_user() {
            info!("Signed out {}", user.username);
        }
        self.set_current_user(None);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn users(&self) -> HashMap<String, String> {
        match self.store.get_json(USERS_KEY) {
            Ok(users) => users.unwrap_or_default(),
            Err(e) => {
                error!("Failed to parse users from storage: {}", e);
                HashMap::new()
            }
        }
    }

    fn set_current_user(&self, user: Option<&User>) {
        let result = match user {
            Some(user) => self.store.set_json(CURRENT_USER_KEY, user),
            None => self.store.remove(CURRENT_USER_KEY),
        };
        if let Err(e) = result {
            error!("Failed to set current user in storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(QoogleError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_store_is_shared_with_streaks() {
        use crate::streaks::{streaks_key, StreakBook};

        let auth = AuthService::new(MemoryStore::new());
        let user = auth.signup("cool_user", "hunter22").unwrap();

        let mut book = StreakBook::load(auth.store().clone(), &user.username, 1_760_000_000_000);
        book.send(1, 1_760_000_000_000).unwrap();

        let stored = auth.store().get(&streaks_key("cool_user")).unwrap();
        assert!(stored.is_some());
        assert_eq!(auth.current_user(), Some(user));
    }

    #[test]
    fn test_signup_password_length_boundary() {
        let auth = AuthService::new(MemoryStore::new());

        let err = auth.signup("cool_user", "12345").unwrap_err();
        assert!(matches!(err, QoogleError::PasswordTooShort { min: 6 }));
        assert_eq!(err.to_string(), "Password must be at least 6 characters long.");
        assert!(auth.current_user().is_none());

        let user = auth.signup("cool_user", "123456").unwrap();
        assert_eq!(user.username, "cool_user");
        assert_eq!(auth.current_user(), Some(user));
    }

    #[test]
    fn test_signup_rejects_existing_username() {
        let auth = AuthService::new(MemoryStore::new());
        auth.signup("alice", "password").unwrap();
        auth.logout();

        // The duplicate check runs before the length check.
        let err = auth.signup("alice", "x").unwrap_err();
        assert!(matches!(err, QoogleError::UsernameExists));
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_login_with_wrong_password_leaves_user_unset() {
        let auth = AuthService::new(MemoryStore::new());
        auth.signup("alice", "password").unwrap();
        auth.logout();

        let err = auth.login("alice", "wrong-password").unwrap_err();
        assert!(matches!(err, QoogleError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid username or password.");
        assert!(auth.current_user().is_none());

        let err = auth.login("nobody", "password").unwrap_err();
        assert!(matches!(err, QoogleError::InvalidCredentials));
    }

    #[test]
    fn test_login_logout_cycle() {
        let store = MemoryStore::new();
        let auth = AuthService::new(store.clone());
        auth.signup("alice", "password").unwrap();
        auth.logout();
        assert!(auth.current_user().is_none());

        let user = auth.login("alice", "password").unwrap();
        assert_eq!(user, User::new("alice"));

        // A second service over the same store sees the session.
        let other = AuthService::new(store);
        assert_eq!(other.current_user(), Some(User::new("alice")));
    }

    #[test]
    fn test_corrupt_records_are_treated_as_empty() {
        let store = MemoryStore::new();
        store.set(USERS_KEY, "not json").unwrap();
        store.set(CURRENT_USER_KEY, "{").unwrap();

        let auth = AuthService::new(store);
        assert!(auth.current_user().is_none());
        assert!(auth.signup("alice", "password").is_ok());
    }

    #[test]
    fn test_signup_storage_failure() {
        let auth = AuthService::new(ReadOnlyStore(MemoryStore::new()));
        let err = auth.signup("alice", "password").unwrap_err();
        assert!(matches!(err, QoogleError::AccountCreation));
        assert!(auth.current_user().is_none());
    }
}
