//! Text rendering of the game state, outcomes and rejections.

use game_rules::{ActionError, GameState, GameStatus, Monster, Outcome, Passage};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

const MICROS_PER_SECOND: u128 = 1_000_000;
const MICROS_PER_MINUTE: u128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: u128 = 24 * MICROS_PER_HOUR;

/// Render seconds as `N days, H:MM:SS.ffffff`.
///
/// Sub-microsecond digits are rounded away; the fraction is omitted when it is zero.
pub fn format_duration(seconds: Decimal) -> String {
    let micros = seconds
        .abs()
        .checked_mul(Decimal::from(MICROS_PER_SECOND as u64))
        .and_then(|m| m.round().to_u128());
    let Some(micros) = micros else {
        return format!("{} s", seconds);
    };

    let mut out = String::new();
    if seconds.is_sign_negative() && micros > 0 {
        out.push('-');
    }

    let days = micros / MICROS_PER_DAY;
    match days {
        0 => {}
        1 => out.push_str("1 day, "),
        n => {
            let _ = write!(out, "{} days, ", n);
        }
    }

    let hours = micros % MICROS_PER_DAY / MICROS_PER_HOUR;
    let minutes = micros % MICROS_PER_HOUR / MICROS_PER_MINUTE;
    let secs = micros % MICROS_PER_MINUTE / MICROS_PER_SECOND;
    let fraction = micros % MICROS_PER_SECOND;
    let _ = write!(out, "{}:{:02}:{:02}", hours, minutes, secs);
    if fraction > 0 {
        let _ = write!(out, ".{:06}", fraction);
    }
    out
}

/// Describe where the player stands and what they can see.
pub fn describe_location(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "You are in {}", state.location_name());
    let _ = writeln!(
        out,
        "You have {} experience and {} left",
        state.experience(),
        format_duration(state.remaining_budget())
    );
    let _ = writeln!(out, "Time spent so far: {}", format_duration(state.elapsed()));
    let _ = writeln!(out, "Inside you see:");
    for monster in state.monsters() {
        let _ = writeln!(out, "-- Monster {}", monster.name);
    }
    for passage in state.passages() {
        let _ = writeln!(out, "-- Entrance to {}", passage.destination_name());
    }
    out
}

/// Numbered list of monsters to pick from; empty when there are none.
pub fn monster_menu(monsters: &[Monster]) -> String {
    numbered(monsters.iter().map(|m| m.name.as_str()))
}

/// Numbered list of passages to pick from; empty when there are none.
pub fn passage_menu(passages: &[Passage]) -> String {
    numbered(passages.iter().map(Passage::destination_name))
}

fn numbered<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, name) in names.enumerate() {
        let _ = writeln!(out, "-- {}. {}", i + 1, name);
    }
    out
}

/// Message for an accepted action. Finished sessions are reported by [`status_message`].
pub fn outcome_message(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Attacked {
            monster,
            reward,
            cost,
        } => Some(format!(
            "You defeated {} and gained {} experience in {}",
            monster,
            reward,
            format_duration(*cost)
        )),
        Outcome::Moved { to, cost, .. } => Some(format!(
            "You walked to {} in {}",
            to,
            format_duration(*cost)
        )),
        Outcome::Finished(_) => None,
    }
}

/// Final message of a session.
pub fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Active => "The adventure continues",
        GameStatus::Won => "You won!!!",
        GameStatus::LostTimeout => "Your time is up! Game over!",
        GameStatus::LostDeadEnd => "Unfortunately you are in a dead end... Game over!",
        GameStatus::LostInsufficientExperience => {
            "Not enough experience to enter this location! Game over!"
        }
        GameStatus::Quit => "You leave the game!",
    }
}

/// Message shown when input is rejected.
pub fn rejection_message(error: &ActionError) -> String {
    match error {
        ActionError::NotANumber(_) => "Please enter digits only!".to_string(),
        ActionError::NoSuchMonster { .. } => format!("No such monster! {}", error),
        ActionError::NoSuchPassage { .. } => format!("No such location! {}", error),
        other => other.to_string(),
    }
}
