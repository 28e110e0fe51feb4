//! # Game Rules
//!
//! The rules crate - the location map, encounter tokens and the turn-based game state machine.
//! This crate is the single source of truth for game state and performs no file I/O; loading
//! the map from disk and persisting results are left to the caller.

pub mod entities;
pub mod map;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use map::*;
pub use mechanics::*;
pub use world_state::*;
