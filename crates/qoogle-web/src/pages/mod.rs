//! Page components

pub mod auth;
pub mod reels;
pub mod search;
pub mod streaks;

pub use auth::AuthPage;
pub use reels::ReelsPage;
pub use search::SearchPage;
pub use streaks::StreaksPage;
