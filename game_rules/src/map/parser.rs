//! Location parser - turns raw map entries into typed locations.
//!
//! Parsing is pure: the same raw entries always produce the same location, and tokens are
//! extracted here once rather than on every action.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{MapError, RawEntry};
use crate::entities::{Location, LocationEntry, Monster, Passage};
use crate::mechanics::{parse_experience, parse_time_cost, TokenOverflow};

/// Parse a location and, recursively, every location nested inside it.
pub fn parse_location(name: &str, raw: &[RawEntry]) -> Result<Location, MapError> {
    let mut location = Location::new(name);
    location.entries.reserve(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let parsed = match entry {
            RawEntry::Monster(text) => LocationEntry::Monster(parse_monster(name, text)?),
            RawEntry::Passage(mapping) => {
                LocationEntry::Passage(parse_passage(name, index, mapping)?)
            }
        };
        location.entries.push(parsed);
    }

    Ok(location)
}

/// Parse a monster name such as `Rat_exp10_tm5`.
pub fn parse_monster(location: &str, text: &str) -> Result<Monster, MapError> {
    let reward = parse_experience(text)
        .map_err(|source| overflow(location, text, source))?
        .ok_or_else(|| MapError::MissingExperience {
            location: location.to_string(),
            monster: text.to_string(),
        })?;
    let cost = parse_time_cost(text)
        .map_err(|source| overflow(location, text, source))?
        .ok_or_else(|| MapError::MissingTimeCost {
            location: location.to_string(),
            name: text.to_string(),
        })?;

    Ok(Monster {
        name: text.to_string(),
        reward,
        cost,
    })
}

fn parse_passage(
    location: &str,
    index: usize,
    mapping: &BTreeMap<String, Vec<RawEntry>>,
) -> Result<Passage, MapError> {
    let (destination, entries) = match mapping.iter().next() {
        Some(only) if mapping.len() == 1 => only,
        _ => {
            return Err(MapError::PassageShape {
                location: location.to_string(),
                index,
                found: mapping.len(),
            })
        }
    };

    let cost = parse_time_cost(destination)
        .map_err(|source| overflow(location, destination, source))?
        .ok_or_else(|| MapError::MissingTimeCost {
            location: location.to_string(),
            name: destination.clone(),
        })?;

    Ok(Passage {
        index,
        cost,
        destination: Arc::new(parse_location(destination, entries)?),
    })
}

fn overflow(location: &str, name: &str, source: TokenOverflow) -> MapError {
    MapError::TokenOverflow {
        location: location.to_string(),
        name: name.to_string(),
        source,
    }
}
