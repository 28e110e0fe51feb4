//! Encounter tokens embedded in map names.
//!
//! Monster names carry their reward and cost (`Rat_exp10_tm5`), passage destinations carry
//! the walking time (`Location_B1_tm2000`, `Hatch_tm159.098765432`).

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Marker preceding an experience reward.
pub const EXPERIENCE_MARKER: &str = "exp";

/// Marker preceding a time cost.
pub const TIME_MARKER: &str = "tm";

/// A token whose digits do not fit in a [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{digits}` is too large")]
pub struct TokenOverflow {
    pub digits: String,
}

/// Extract the experience reward: the first `exp` followed by digits.
///
/// `Ok(None)` means the text carries no reward token.
pub fn parse_experience(text: &str) -> Result<Option<Decimal>, TokenOverflow> {
    find_number(text, EXPERIENCE_MARKER, false)
}

/// Extract the time cost: the first `tm` followed by digits, with an optional fraction.
pub fn parse_time_cost(text: &str) -> Result<Option<Decimal>, TokenOverflow> {
    find_number(text, TIME_MARKER, true)
}

fn find_number(
    text: &str,
    marker: &str,
    fractional: bool,
) -> Result<Option<Decimal>, TokenOverflow> {
    let Some(digits) = text
        .match_indices(marker)
        .find_map(|(at, _)| number_prefix(&text[at + marker.len()..], fractional))
    else {
        return Ok(None);
    };

    Decimal::from_str(digits).map(Some).map_err(|_| TokenOverflow {
        digits: digits.to_string(),
    })
}

/// Leading `digits[.digits]` of `rest`, if any.
fn number_prefix(rest: &str, fractional: bool) -> Option<&str> {
    let bytes = rest.as_bytes();
    let whole = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if whole == 0 {
        return None;
    }

    let mut end = whole;
    if fractional && bytes.get(whole) == Some(&b'.') {
        let fraction = bytes[whole + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if fraction > 0 {
            end = whole + 1 + fraction;
        }
    }
    Some(&rest[..end])
}
