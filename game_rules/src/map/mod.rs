//! The dungeon map: a tree of locations loaded once from JSON and immutable afterwards.
//!
//! The document is an object of top-level locations. Each location is an ordered list of
//! entries; a string entry is a monster, an object entry is a passage whose single key names
//! the destination and whose value is the destination's own entry list:
//!
//! ```json
//! { "Location_0_tm0": ["Rat_exp10_tm5", { "Cave_tm30": ["Bat_exp3_tm1"] }] }
//! ```

mod parser;

pub use parser::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;
use thiserror::Error;

use crate::entities::Location;
use crate::mechanics::TokenOverflow;

/// Errors raised while reading or validating a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Malformed map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Location `{0}` not found in map")]
    MissingRoot(String),

    #[error("Monster `{monster}` in `{location}` has no experience token")]
    MissingExperience { location: String, monster: String },

    #[error("`{name}` in `{location}` has no time token")]
    MissingTimeCost { location: String, name: String },

    #[error("`{name}` in `{location}` has an out of range token: {source}")]
    TokenOverflow {
        location: String,
        name: String,
        source: TokenOverflow,
    },

    #[error("Passage #{index} in `{location}` must name exactly one destination, found {found}")]
    PassageShape {
        location: String,
        index: usize,
        found: usize,
    },
}

/// An entry exactly as it appears in the map document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Monster(String),
    Passage(BTreeMap<String, Vec<RawEntry>>),
}

/// The map document: top-level location name -> entries.
pub type RawMap = BTreeMap<String, Vec<RawEntry>>;

/// The parsed dungeon.
#[derive(Debug, Clone, Default)]
pub struct GameMap {
    locations: BTreeMap<String, Arc<Location>>,
}

impl GameMap {
    /// Parse a map from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        let raw: RawMap = serde_json::from_str(json)?;
        Self::from_raw(&raw)
    }

    /// Parse a map from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MapError> {
        let raw: RawMap = serde_json::from_reader(reader)?;
        Self::from_raw(&raw)
    }

    /// Build the map from an already deserialized document.
    pub fn from_raw(raw: &RawMap) -> Result<Self, MapError> {
        let mut locations = BTreeMap::new();
        for (name, entries) in raw {
            locations.insert(name.clone(), Arc::new(parse_location(name, entries)?));
        }

        let map = Self { locations };
        tracing::debug!(
            top_level = map.locations.len(),
            total = map.location_count(),
            "Map parsed"
        );
        Ok(map)
    }

    /// Get a top-level location, typically the starting one.
    pub fn root(&self, name: &str) -> Result<Arc<Location>, MapError> {
        self.locations
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::MissingRoot(name.to_string()))
    }

    /// Find a location anywhere in the map, searching depth-first.
    pub fn find(&self, name: &str) -> Option<Arc<Location>> {
        let mut stack: Vec<&Arc<Location>> = self.locations.values().rev().collect();
        while let Some(location) = stack.pop() {
            if location.name == name {
                return Some(Arc::clone(location));
            }
            let children: Vec<_> = location.neighbours().collect();
            stack.extend(children.into_iter().rev());
        }
        None
    }

    /// Total number of locations, nested ones included.
    pub fn location_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Arc<Location>> = self.locations.values().collect();
        while let Some(location) = stack.pop() {
            count += 1;
            stack.extend(location.neighbours());
        }
        count
    }
}
