//! UI components

pub mod auth_gate;
pub mod bottom_nav;
pub mod reel_item;

pub use auth_gate::{AuthContext, AuthGate};
pub use bottom_nav::BottomNav;
pub use reel_item::ReelItem;
