//! World state management - the game state machine driven by player actions.
//!
//! A session starts at the root location and is advanced one action at a time. Every action
//! either completes (mutating the state, possibly ending the game) or is rejected with an
//! [`ActionError`] that leaves the state untouched.

mod record;

pub use record::*;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::entities::{Location, LocationContents, Monster, Passage, SessionId};
use crate::map::{GameMap, MapError};
use crate::mechanics::GameRules;

/// Where a session stands. Everything but `Active` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    LostTimeout,
    LostDeadEnd,
    LostInsufficientExperience,
    Quit,
}

impl GameStatus {
    /// Check if the session is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::Active => "in progress",
            GameStatus::Won => "won",
            GameStatus::LostTimeout => "out of time",
            GameStatus::LostDeadEnd => "dead end",
            GameStatus::LostInsufficientExperience => "not enough experience",
            GameStatus::Quit => "quit",
        };
        f.write_str(text)
    }
}

/// A player request. Choices are the raw tokens typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Attack(String),
    Move(String),
    Quit,
}

/// What an accepted action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Attacked {
        monster: String,
        reward: Decimal,
        cost: Decimal,
    },
    Moved {
        from: String,
        to: String,
        cost: Decimal,
    },
    Finished(GameStatus),
}

/// Response to an [`Action`]: what happened and where the session now stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub outcome: Outcome,
    pub status: GameStatus,
}

/// Rejected actions. The state is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("The game is over ({0})")]
    GameOver(GameStatus),

    #[error("There are no monsters to attack")]
    NoMonsters,

    #[error("There are no passages here, but there are monsters to fight")]
    NoPassages,

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("There is no monster #{choice}, pick 1 to {available}")]
    NoSuchMonster { choice: i64, available: usize },

    #[error("There is no passage #{choice}, pick 1 to {available}")]
    NoSuchPassage { choice: i64, available: usize },

    #[error("Your {0} cannot grow any further")]
    Overflow(&'static str),
}

/// Errors raised by actions that touch the result log.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Failed to record result: {0}")]
    Record(#[from] RecordError),
}

/// The complete state of a session.
#[derive(Debug, Clone)]
pub struct GameState {
    session: SessionId,
    rules: GameRules,
    location: Arc<Location>,
    /// Always the contents of `location`.
    contents: LocationContents,
    experience: Decimal,
    elapsed: Decimal,
    status: GameStatus,
}

impl GameState {
    /// Start a new session at the root location named by the rules.
    pub fn new(map: &GameMap, rules: GameRules) -> Result<Self, MapError> {
        let location = map.root(&rules.root_location)?;
        let mut state = Self {
            session: SessionId::new(),
            contents: location.contents(),
            location,
            rules,
            experience: Decimal::ZERO,
            elapsed: Decimal::ZERO,
            status: GameStatus::Active,
        };

        tracing::info!(
            session = %state.session,
            location = %state.location.name,
            budget = %state.rules.time_budget,
            "Session started"
        );
        state.settle_budget();
        Ok(state)
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn location_name(&self) -> &str {
        &self.location.name
    }

    /// Accumulated experience.
    pub fn experience(&self) -> Decimal {
        self.experience
    }

    /// Accumulated time spent on fights and walking.
    pub fn elapsed(&self) -> Decimal {
        self.elapsed
    }

    /// Time budget minus elapsed time.
    pub fn remaining_budget(&self) -> Decimal {
        self.rules.time_budget.saturating_sub(self.elapsed)
    }

    pub fn contents(&self) -> &LocationContents {
        &self.contents
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.contents.monsters
    }

    pub fn passages(&self) -> &[Passage] {
        &self.contents.passages
    }

    /// Submit an action and get back the outcome together with the new status.
    pub fn apply(
        &mut self,
        action: Action,
        recorder: &mut dyn ResultRecorder,
    ) -> Result<Turn, GameError> {
        let outcome = match action {
            Action::Attack(choice) => self.attack(&choice)?,
            Action::Move(choice) => self.move_to(&choice, recorder)?,
            Action::Quit => self.quit()?,
        };
        Ok(Turn {
            outcome,
            status: self.status,
        })
    }

    /// Fight the monster at the 1-based `choice`.
    ///
    /// Defeated monsters stay in the location and can be fought again.
    pub fn attack(&mut self, choice: &str) -> Result<Outcome, ActionError> {
        self.ensure_active()?;
        let available = self.contents.monsters.len();
        if available == 0 {
            return Err(self.reject(ActionError::NoMonsters));
        }

        let choice = self.parse_choice(choice)?;
        let index = in_range(choice, available)
            .ok_or_else(|| self.reject(ActionError::NoSuchMonster { choice, available }))?;

        let monster = &self.contents.monsters[index];
        let (name, reward, cost) = (monster.name.clone(), monster.reward, monster.cost);
        let experience = self.accumulate(self.experience, reward, "experience")?;
        let elapsed = self.accumulate(self.elapsed, cost, "elapsed time")?;
        self.experience = experience;
        self.elapsed = elapsed;

        tracing::debug!(
            session = %self.session,
            monster = %name,
            experience = %self.experience,
            elapsed = %self.elapsed,
            "Monster defeated"
        );
        self.settle_budget();

        Ok(Outcome::Attacked {
            monster: name,
            reward,
            cost,
        })
    }

    /// Walk through the passage at the 1-based `choice`.
    ///
    /// The choice is only read when the location has passages. Without passages the move is
    /// refused while monsters remain, otherwise the session ends in a dead end. When the first
    /// passage leads to the exit, any valid choice triggers the exit check instead of a move.
    pub fn move_to(
        &mut self,
        choice: &str,
        recorder: &mut dyn ResultRecorder,
    ) -> Result<Outcome, GameError> {
        self.ensure_active()?;
        let available = self.contents.passages.len();
        if available == 0 {
            if self.contents.is_dead_end() {
                return Ok(self.finish(GameStatus::LostDeadEnd));
            }
            return Err(self.reject(ActionError::NoPassages).into());
        }

        let choice = self.parse_choice(choice)?;
        let index = in_range(choice, available)
            .ok_or_else(|| self.reject(ActionError::NoSuchPassage { choice, available }))?;

        if self.rules.is_exit(self.contents.passages[0].destination_name()) {
            let status = if self.rules.can_exit_with(self.experience) {
                GameStatus::Won
            } else {
                GameStatus::LostInsufficientExperience
            };
            return Ok(self.finish(status));
        }

        let passage = self.contents.passages[index].clone();
        let elapsed = self.accumulate(self.elapsed, passage.cost, "elapsed time")?;
        let from = std::mem::replace(&mut self.location, Arc::clone(&passage.destination));
        self.contents = self.location.contents();
        self.elapsed = elapsed;

        tracing::info!(
            session = %self.session,
            from = %from.name,
            to = %self.location.name,
            elapsed = %self.elapsed,
            "Moved"
        );
        self.settle_budget();
        recorder.record(ResultRecord::now(from.name.clone(), self.experience))?;

        Ok(Outcome::Moved {
            from: from.name.clone(),
            to: self.location.name.clone(),
            cost: passage.cost,
        })
    }

    /// Leave the game.
    pub fn quit(&mut self) -> Result<Outcome, ActionError> {
        self.ensure_active()?;
        Ok(self.finish(GameStatus::Quit))
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.status.is_terminal() {
            return Err(self.reject(ActionError::GameOver(self.status)));
        }
        Ok(())
    }

    fn parse_choice(&self, choice: &str) -> Result<i64, ActionError> {
        let choice = choice.trim();
        choice
            .parse::<i64>()
            .map_err(|_| self.reject(ActionError::NotANumber(choice.to_string())))
    }

    /// Exact decimal sum, refused when it leaves the decimal range.
    fn accumulate(
        &self,
        total: Decimal,
        amount: Decimal,
        quantity: &'static str,
    ) -> Result<Decimal, ActionError> {
        total
            .checked_add(amount)
            .ok_or_else(|| self.reject(ActionError::Overflow(quantity)))
    }

    fn reject(&self, error: ActionError) -> ActionError {
        tracing::debug!(session = %self.session, %error, "Action rejected");
        error
    }

    fn finish(&mut self, status: GameStatus) -> Outcome {
        self.status = status;
        tracing::info!(
            session = %self.session,
            location = %self.location.name,
            experience = %self.experience,
            %status,
            "Session finished"
        );
        Outcome::Finished(status)
    }

    /// End the session once the budget is spent.
    fn settle_budget(&mut self) {
        if !self.status.is_terminal() && self.remaining_budget() <= Decimal::ZERO {
            self.finish(GameStatus::LostTimeout);
        }
    }
}

/// Zero-based index for a 1-based choice, if it names one of `available` items.
fn in_range(choice: i64, available: usize) -> Option<usize> {
    usize::try_from(choice)
        .ok()
        .filter(|c| (1..=available).contains(c))
        .map(|c| c - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    const SCENARIO: &str = r#"{
        "Location_0_tm0": [
            "Rat_exp10_tm5",
            { "Cave_tm30": [
                "Bat_exp3_tm1",
                { "Pit_tm2.5": [] },
                { "Tunnel_tm4": ["Ghoul_exp20_tm6"] }
            ] }
        ]
    }"#;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn start(json: &str) -> GameState {
        GameState::new(&GameMap::from_json_str(json).unwrap(), GameRules::default()).unwrap()
    }

    fn start_with(json: &str, rules: GameRules) -> GameState {
        GameState::new(&GameMap::from_json_str(json).unwrap(), rules).unwrap()
    }

    fn snapshot(state: &GameState) -> (String, Decimal, Decimal, GameStatus, usize, usize) {
        (
            state.location_name().to_string(),
            state.experience(),
            state.elapsed(),
            state.status(),
            state.monsters().len(),
            state.passages().len(),
        )
    }

    #[test]
    fn test_new_state_starts_at_root() {
        let state = start(SCENARIO);

        assert_eq!(state.location_name(), "Location_0_tm0");
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.experience(), Decimal::ZERO);
        assert_eq!(state.elapsed(), Decimal::ZERO);
        assert_eq!(state.remaining_budget(), dec("1234567890.0987654321"));
        assert_eq!(state.monsters().len(), 1);
        assert_eq!(state.passages().len(), 1);
    }

    #[test]
    fn test_missing_root_location() {
        let map = GameMap::from_json_str(r#"{ "Elsewhere_tm0": [] }"#).unwrap();
        let err = GameState::new(&map, GameRules::default()).unwrap_err();
        assert!(matches!(err, MapError::MissingRoot(_)));
    }

    #[test]
    fn test_attack_then_move() {
        let mut state = start(SCENARIO);
        let mut log: Vec<ResultRecord> = Vec::new();

        let outcome = state.attack("1").unwrap();
        assert_eq!(
            outcome,
            Outcome::Attacked {
                monster: "Rat_exp10_tm5".to_string(),
                reward: dec("10"),
                cost: dec("5"),
            }
        );
        assert_eq!(state.experience(), dec("10"));
        assert_eq!(state.elapsed(), dec("5"));

        let outcome = state.move_to("1", &mut log).unwrap();
        assert_eq!(
            outcome,
            Outcome::Moved {
                from: "Location_0_tm0".to_string(),
                to: "Cave_tm30".to_string(),
                cost: dec("30"),
            }
        );
        assert_eq!(state.elapsed(), dec("35"));
        assert_eq!(state.location_name(), "Cave_tm30");
        assert_eq!(state.contents(), &state.location().contents());
        assert_eq!(state.monsters()[0].name, "Bat_exp3_tm1");
        assert_eq!(state.passages().len(), 2);

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].location, "Location_0_tm0");
        assert_eq!(log[0].experience, dec("10"));
    }

    #[test]
    fn test_remaining_budget_tracks_elapsed() {
        let mut state = start(SCENARIO);
        let mut log: Vec<ResultRecord> = Vec::new();

        state.attack("1").unwrap();
        state.move_to("1", &mut log).unwrap();
        state.move_to("1", &mut log).unwrap();

        assert_eq!(state.elapsed(), dec("37.5"));
        assert_eq!(
            state.remaining_budget(),
            dec("1234567890.0987654321") - dec("37.5")
        );
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].location, "Cave_tm30");
    }

    #[test]
    fn test_monsters_can_be_fought_again() {
        let mut state = start(SCENARIO);
        for _ in 0..3 {
            state.attack("1").unwrap();
        }
        assert_eq!(state.experience(), dec("30"));
        assert_eq!(state.elapsed(), dec("15"));
        assert_eq!(state.monsters().len(), 1);
    }

    #[test]
    fn test_invalid_choices_leave_state_unchanged() {
        let mut state = start(SCENARIO);
        let mut log: Vec<ResultRecord> = Vec::new();
        let before = snapshot(&state);

        assert_eq!(
            state.attack("0"),
            Err(ActionError::NoSuchMonster {
                choice: 0,
                available: 1
            })
        );
        assert_eq!(
            state.attack("2"),
            Err(ActionError::NoSuchMonster {
                choice: 2,
                available: 1
            })
        );
        assert_eq!(
            state.attack("-1"),
            Err(ActionError::NoSuchMonster {
                choice: -1,
                available: 1
            })
        );
        assert_eq!(
            state.attack("abc"),
            Err(ActionError::NotANumber("abc".to_string()))
        );
        assert_eq!(state.attack(""), Err(ActionError::NotANumber(String::new())));
        assert_eq!(
            state.attack("1.5"),
            Err(ActionError::NotANumber("1.5".to_string()))
        );

        let err = state.move_to("7", &mut log).unwrap_err();
        assert!(matches!(
            err,
            GameError::Action(ActionError::NoSuchPassage {
                choice: 7,
                available: 1
            })
        ));
        let err = state.move_to("x", &mut log).unwrap_err();
        assert!(matches!(err, GameError::Action(ActionError::NotANumber(_))));

        assert_eq!(snapshot(&state), before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_overflowing_attack_is_refused() {
        let mut state = start(
            r#"{ "Location_0_tm0": [ "Giant_exp79228162514264337593543950335_tm1" ] }"#,
        );
        state.attack("1").unwrap();
        assert_eq!(state.experience(), Decimal::MAX);
        let before = snapshot(&state);

        assert_eq!(state.attack("1"), Err(ActionError::Overflow("experience")));
        assert_eq!(snapshot(&state), before);
        assert_eq!(state.elapsed(), dec("1"));
    }

    #[test]
    fn test_overflowing_move_is_refused() {
        let rules = GameRules {
            time_budget: Decimal::MAX,
            ..GameRules::default()
        };
        let mut state = start_with(
            r#"{ "Location_0_tm0": [
                "Sloth_exp1_tm79228162514264337593543950000",
                { "Cave_tm1000": [] }
            ] }"#,
            rules,
        );
        let mut log: Vec<ResultRecord> = Vec::new();
        state.attack("1").unwrap();
        let before = snapshot(&state);

        let err = state.move_to("1", &mut log).unwrap_err();
        assert!(matches!(
            err,
            GameError::Action(ActionError::Overflow("elapsed time"))
        ));
        assert_eq!(snapshot(&state), before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_choice_whitespace_is_ignored() {
        let mut state = start(SCENARIO);
        state.attack(" 1 \n").unwrap();
        assert_eq!(state.experience(), dec("10"));
    }

    #[test]
    fn test_timeout_after_attack() {
        let rules = GameRules {
            time_budget: dec("10"),
            ..GameRules::default()
        };
        let mut state = start_with(SCENARIO, rules);

        state.attack("1").unwrap();
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.remaining_budget(), dec("5"));

        state.attack("1").unwrap();
        assert_eq!(state.remaining_budget(), Decimal::ZERO);
        assert_eq!(state.status(), GameStatus::LostTimeout);

        assert_eq!(
            state.attack("1"),
            Err(ActionError::GameOver(GameStatus::LostTimeout))
        );
        assert_eq!(
            state.quit(),
            Err(ActionError::GameOver(GameStatus::LostTimeout))
        );
        assert_eq!(state.experience(), dec("20"));
    }

    #[test]
    fn test_timeout_after_move_still_records() {
        let rules = GameRules {
            time_budget: dec("20"),
            ..GameRules::default()
        };
        let mut state = start_with(SCENARIO, rules);
        let mut log: Vec<ResultRecord> = Vec::new();

        state.move_to("1", &mut log).unwrap();

        assert_eq!(state.status(), GameStatus::LostTimeout);
        assert_eq!(state.location_name(), "Cave_tm30");
        assert_eq!(log.len(), 1);
        assert!(matches!(
            state.move_to("1", &mut log),
            Err(GameError::Action(ActionError::GameOver(GameStatus::LostTimeout)))
        ));
    }

    #[test]
    fn test_spent_budget_is_terminal_from_the_start() {
        let rules = GameRules {
            time_budget: Decimal::ZERO,
            ..GameRules::default()
        };
        let state = start_with(SCENARIO, rules);
        assert_eq!(state.status(), GameStatus::LostTimeout);
    }

    #[test]
    fn test_dead_end() {
        let mut state = start(r#"{ "Location_0_tm0": [] }"#);
        let mut log: Vec<ResultRecord> = Vec::new();

        assert_eq!(state.attack("1"), Err(ActionError::NoMonsters));
        let outcome = state.move_to("", &mut log).unwrap();

        assert_eq!(outcome, Outcome::Finished(GameStatus::LostDeadEnd));
        assert_eq!(state.status(), GameStatus::LostDeadEnd);
        assert!(log.is_empty());
    }

    #[test]
    fn test_no_passages_but_monsters() {
        let mut state = start(r#"{ "Location_0_tm0": ["Rat_exp10_tm5"] }"#);
        let mut log: Vec<ResultRecord> = Vec::new();

        let err = state.move_to("1", &mut log).unwrap_err();
        assert!(matches!(err, GameError::Action(ActionError::NoPassages)));
        assert_eq!(state.status(), GameStatus::Active);
    }

    const EXIT_FIRST: &str = r#"{
        "Location_0_tm0": [
            "Boss_exp100_tm1",
            { "Hatch_tm159.098765432": [] },
            { "Cave_tm30": [] }
        ]
    }"#;

    #[test]
    fn test_exit_without_enough_experience() {
        let mut state = start(EXIT_FIRST);
        let mut log: Vec<ResultRecord> = Vec::new();
        state.attack("1").unwrap();
        state.attack("1").unwrap();

        let outcome = state.move_to("1", &mut log).unwrap();
        assert_eq!(
            outcome,
            Outcome::Finished(GameStatus::LostInsufficientExperience)
        );
        assert_eq!(state.location_name(), "Location_0_tm0");
        assert_eq!(state.elapsed(), dec("2"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_exit_with_enough_experience() {
        let mut state = start(EXIT_FIRST);
        let mut log: Vec<ResultRecord> = Vec::new();
        for _ in 0..3 {
            state.attack("1").unwrap();
        }

        let outcome = state.move_to("1", &mut log).unwrap();
        assert_eq!(outcome, Outcome::Finished(GameStatus::Won));
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn test_exit_check_applies_to_any_choice() {
        let mut state = start(EXIT_FIRST);
        let mut log: Vec<ResultRecord> = Vec::new();

        // Picking the cave still runs the exit check because the first passage is the hatch.
        let outcome = state.move_to("2", &mut log).unwrap();
        assert_eq!(
            outcome,
            Outcome::Finished(GameStatus::LostInsufficientExperience)
        );
    }

    #[test]
    fn test_exit_in_second_place_is_an_ordinary_move() {
        let mut state = start(
            r#"{ "Location_0_tm0": [ { "Cave_tm30": [] }, { "Hatch_tm159.098765432": [] } ] }"#,
        );
        let mut log: Vec<ResultRecord> = Vec::new();

        state.move_to("2", &mut log).unwrap();
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.location_name(), "Hatch_tm159.098765432");
        assert_eq!(state.elapsed(), dec("159.098765432"));
    }

    #[test]
    fn test_exact_threshold_wins() {
        let mut state = start(
            r#"{ "Location_0_tm0": [ "Boss_exp280_tm1", { "Hatch_tm1": [] } ] }"#,
        );
        let mut log: Vec<ResultRecord> = Vec::new();
        state.attack("1").unwrap();
        state.move_to("1", &mut log).unwrap();
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn test_quit() {
        let mut state = start(SCENARIO);
        assert_eq!(state.quit(), Ok(Outcome::Finished(GameStatus::Quit)));
        assert_eq!(state.status(), GameStatus::Quit);
        assert_eq!(state.quit(), Err(ActionError::GameOver(GameStatus::Quit)));
    }

    #[test]
    fn test_apply_reports_status() {
        let mut state = start(SCENARIO);
        let mut log: Vec<ResultRecord> = Vec::new();

        let turn = state
            .apply(Action::Attack("1".to_string()), &mut log)
            .unwrap();
        assert_eq!(turn.status, GameStatus::Active);
        assert!(matches!(turn.outcome, Outcome::Attacked { .. }));

        let turn = state
            .apply(Action::Move("1".to_string()), &mut log)
            .unwrap();
        assert!(matches!(turn.outcome, Outcome::Moved { .. }));
        assert_eq!(log.len(), 1);

        let turn = state.apply(Action::Quit, &mut log).unwrap();
        assert_eq!(turn.outcome, Outcome::Finished(GameStatus::Quit));
        assert_eq!(turn.status, GameStatus::Quit);
    }

    #[test]
    fn test_status_flags() {
        assert!(!GameStatus::Active.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Quit.is_terminal());
        assert!(GameStatus::LostTimeout.is_terminal());
    }

    /// A chain of rooms, each holding one monster and a passage to the next.
    fn corridor(costs: &[(u32, u32)]) -> String {
        let mut content = r#"["Mob_exp1_tm1"]"#.to_string();
        for (i, (whole, frac)) in costs.iter().enumerate().rev() {
            content = format!(
                r#"["Mob_exp1_tm1", {{ "Room{}_tm{}.{:03}": {} }}]"#,
                i, whole, frac, content
            );
        }
        format!(r#"{{ "Location_0_tm0": {} }}"#, content)
    }

    proptest! {
        #[test]
        fn test_moves_accumulate_exactly(
            costs in proptest::collection::vec((1u32..10_000, 0u32..1000), 1..6),
        ) {
            let mut state = start(&corridor(&costs));
            let mut log: Vec<ResultRecord> = Vec::new();

            for (i, (whole, frac)) in costs.iter().enumerate() {
                let before = state.elapsed();
                let previous = state.location_name().to_string();
                let cost = dec(&format!("{}.{:03}", whole, frac));

                state.move_to("1", &mut log).unwrap();

                prop_assert_eq!(state.elapsed(), before + cost);
                prop_assert!(state.elapsed() > before);
                let room = format!("Room{}_tm{}.{:03}", i, whole, frac);
                prop_assert_eq!(state.location_name(), room);
                prop_assert_eq!(state.contents(), &state.location().contents());
                let expected = if i + 1 == costs.len() { 0 } else { 1 };
                prop_assert_eq!(state.passages().len(), expected);
                prop_assert_eq!(log.len(), i + 1);
                prop_assert_eq!(&log[i].location, &previous);
            }
        }

        #[test]
        fn test_attacks_accumulate_exactly(
            reward in 0u32..100_000,
            whole in 0u32..10_000,
            frac in 0u32..1000,
            times in 1usize..20,
        ) {
            let monster = format!("Mob_exp{}_tm{}.{:03}", reward, whole, frac);
            let json = format!(r#"{{ "Location_0_tm0": ["{}"] }}"#, monster);
            let mut state = start(&json);
            let cost = dec(&format!("{}.{:03}", whole, frac));

            for _ in 0..times {
                state.attack("1").unwrap();
            }

            let n = Decimal::from(times as u64);
            prop_assert_eq!(state.experience(), Decimal::from(reward) * n);
            prop_assert_eq!(state.elapsed(), cost * n);
            prop_assert_eq!(
                state.remaining_budget(),
                dec("1234567890.0987654321") - cost * n
            );
        }
    }
}
