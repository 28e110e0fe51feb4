//! Entity definitions for the dungeon: locations, the monsters inside them and the
//! passages leading out.

mod location;

pub use location::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a play session.
///
/// A new session starts every time a game is (re)started from the root location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
