//! User types

use serde::{Deserialize, Serialize};

/// Signed-in account. Only the username is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Credentials submitted by the sign-in and sign-up forms
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
