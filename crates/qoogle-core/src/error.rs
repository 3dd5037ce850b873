//! Error types for Qoogle

use thiserror::Error;

/// Main error type for Qoogle
#[derive(Error, Debug)]
pub enum QoogleError {
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Username already exists.")]
    UsernameExists,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Could not create account.")]
    AccountCreation,

    #[error("Prompt cannot be empty.")]
    EmptyPrompt,

    #[error("Failed to fetch search results from Gemini API.")]
    Upstream(String),

    #[error("Friend not found: {0}")]
    FriendNotFound(u32),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QoogleError>;
