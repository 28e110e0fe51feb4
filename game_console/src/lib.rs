//! # Game Console
//!
//! The console front end for the dungeon. This crate wires the pure rules from `game_rules`
//! to the outside world:
//!
//! - **config**: optional TOML configuration with defaults for every field
//! - **loader**: reads the JSON map from disk
//! - **result_log**: appends one CSV row per location transition
//! - **render**: turns game state and outcomes into text
//! - **session**: the line-based interaction loop over any reader and writer

pub mod config;
pub mod loader;
pub mod render;
pub mod result_log;
pub mod session;

pub use config::*;
pub use loader::*;
pub use result_log::*;
pub use session::*;

use game_rules::{MapError, RecordError};
use thiserror::Error;

/// Fatal errors that end the program.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Cannot write result log: {0}")]
    Record(#[from] RecordError),

    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),
}
