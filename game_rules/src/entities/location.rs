//! Locations and their contents.

use rust_decimal::Decimal;
use std::sync::Arc;

/// A monster waiting inside a location.
///
/// The name is kept exactly as it appears in the map (e.g. `Rat_exp10_tm5`); the reward and
/// cost are extracted from it once, when the map is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    /// Experience granted for defeating the monster.
    pub reward: Decimal,
    /// Time spent fighting the monster.
    pub cost: Decimal,
}

/// A passage from one location into a nested location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// Position of the passage among all entries of its parent location.
    pub index: usize,
    /// Time spent walking through the passage.
    pub cost: Decimal,
    /// The location the passage leads to, including everything nested inside it.
    pub destination: Arc<Location>,
}

impl Passage {
    /// Name of the destination location.
    pub fn destination_name(&self) -> &str {
        &self.destination.name
    }
}

/// A single entry inside a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationEntry {
    Monster(Monster),
    Passage(Passage),
}

/// A named node of the dungeon with its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub entries: Vec<LocationEntry>,
}

/// The monsters and passages of a location, split apart in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationContents {
    pub monsters: Vec<Monster>,
    pub passages: Vec<Passage>,
}

impl LocationContents {
    /// A location with neither monsters nor passages is a dead end.
    pub fn is_dead_end(&self) -> bool {
        self.monsters.is_empty() && self.passages.is_empty()
    }
}

impl Location {
    /// Create an empty location.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Split the entries into monsters and passages, preserving their order.
    pub fn contents(&self) -> LocationContents {
        let mut contents = LocationContents::default();
        for entry in &self.entries {
            match entry {
                LocationEntry::Monster(monster) => contents.monsters.push(monster.clone()),
                LocationEntry::Passage(passage) => contents.passages.push(passage.clone()),
            }
        }
        contents
    }

    /// Iterate over the locations directly reachable from this one.
    pub fn neighbours(&self) -> impl Iterator<Item = &Arc<Location>> {
        self.entries.iter().filter_map(|entry| match entry {
            LocationEntry::Passage(passage) => Some(&passage.destination),
            LocationEntry::Monster(_) => None,
        })
    }
}
