//! Qoogle - Core Library
//!
//! Runtime-agnostic services shared by the terminal client and the browser
//! app: credential checks, streak rules, the reels feed and AI search.
//! Nothing here spawns tasks or touches a specific async runtime.

pub mod auth;
pub mod config;
pub mod error;
pub mod reels;
pub mod search;
pub mod storage;
pub mod streaks;
pub mod utils;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use reels::*;
pub use search::*;
pub use storage::*;
pub use streaks::*;

pub use qoogle_types::*;
