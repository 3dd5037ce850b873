//! Short video entries

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    pub id: String,
    pub url: String,
    pub author: String,
    pub description: String,
}
