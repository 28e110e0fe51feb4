//! Game mechanics: the rules every session is played by and the encounter tokens embedded in
//! map names.

mod tokens;

pub use tokens::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the location every session starts in.
pub const ROOT_LOCATION: &str = "Location_0_tm0";

/// Marker identifying the exit location.
pub const WIN_MARKER: &str = "Hatch";

/// Experience needed to pass through the exit.
pub const WIN_EXPERIENCE: i64 = 280;

/// Total time allowance of a session: 1234567890.0987654321 seconds.
pub fn default_time_budget() -> Decimal {
    Decimal::from_i128_with_scale(12_345_678_900_987_654_321, 10)
}

/// The rules a session is played by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Total time allowance; the session is lost once elapsed time reaches it.
    pub time_budget: Decimal,

    /// Experience needed to pass through the exit.
    pub win_experience: Decimal,

    /// Substring identifying the exit location.
    pub win_marker: String,

    /// Name of the starting location.
    pub root_location: String,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            time_budget: default_time_budget(),
            win_experience: Decimal::from(WIN_EXPERIENCE),
            win_marker: WIN_MARKER.to_string(),
            root_location: ROOT_LOCATION.to_string(),
        }
    }
}

impl GameRules {
    /// Check if a location name marks the exit.
    pub fn is_exit(&self, location_name: &str) -> bool {
        location_name.contains(&self.win_marker)
    }

    /// Check if the given experience is enough to pass through the exit.
    pub fn can_exit_with(&self, experience: Decimal) -> bool {
        experience >= self.win_experience
    }
}
