//! The interaction loop.
//!
//! Reads the player's choices line by line, submits them to the game state and prints the
//! result. Works over any reader and writer, so the same loop serves a terminal and tests.

use game_rules::{
    Action, ActionError, GameError, GameMap, GameRules, GameState, GameStatus, ResultRecorder,
};
use std::io::{BufRead, Write};

use crate::render;
use crate::ConsoleError;

const ACTION_MENU: &str = "Choose an action:\n\
                           1. Attack a monster\n\
                           2. Go to another location\n\
                           3. Quit the game\n\
                           Your choice: ";
const MONSTER_PROMPT: &str = "Which monster do you attack?: ";
const PASSAGE_PROMPT: &str = "Which location do you enter?: ";
const RESTART_PROMPT: &str =
    "Enter 'yes' to stay in the game and play again,\nor 'q' to leave the game: ";

/// Line-based console driving game sessions.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Play sessions until the player leaves, time runs out or input ends.
    ///
    /// Every restart begins a fresh session at the root location; all sessions share the
    /// same recorder.
    pub fn run(
        &mut self,
        map: &GameMap,
        rules: &GameRules,
        recorder: &mut dyn ResultRecorder,
    ) -> Result<(), ConsoleError> {
        loop {
            let mut state = GameState::new(map, rules.clone())?;
            let Some(status) = self.play(&mut state, recorder)? else {
                return Ok(());
            };

            if status == GameStatus::LostTimeout {
                writeln!(self.output, "TIME IS UP")?;
                return Ok(());
            }

            loop {
                let Some(answer) = self.prompt(RESTART_PROMPT)? else {
                    return Ok(());
                };
                match answer.trim() {
                    "yes" => break,
                    "q" => {
                        writeln!(self.output, "YOU LEAVE")?;
                        return Ok(());
                    }
                    _ => writeln!(self.output, "Please enter 'yes' or 'q'")?,
                }
            }
        }
    }

    /// Run the action loop of one session. Returns `None` when input ran out first.
    pub fn play(
        &mut self,
        state: &mut GameState,
        recorder: &mut dyn ResultRecorder,
    ) -> Result<Option<GameStatus>, ConsoleError> {
        loop {
            if state.status().is_terminal() {
                writeln!(self.output, "{}", render::status_message(state.status()))?;
                return Ok(Some(state.status()));
            }

            write!(self.output, "{}", render::describe_location(state))?;
            let Some(choice) = self.prompt(ACTION_MENU)? else {
                return Ok(self.hang_up(state));
            };

            let action = match choice.trim() {
                "1" => {
                    let menu = render::monster_menu(state.monsters());
                    self.pick(&menu, MONSTER_PROMPT)?.map(Action::Attack)
                }
                "2" => {
                    let menu = render::passage_menu(state.passages());
                    self.pick(&menu, PASSAGE_PROMPT)?.map(Action::Move)
                }
                "3" => Some(Action::Quit),
                other => {
                    writeln!(self.output, "Unknown choice '{}', enter 1, 2 or 3", other)?;
                    continue;
                }
            };
            let Some(action) = action else {
                return Ok(self.hang_up(state));
            };

            match state.apply(action, recorder) {
                Ok(turn) => {
                    if let Some(message) = render::outcome_message(&turn.outcome) {
                        writeln!(self.output, "{}", message)?;
                    }
                }
                Err(GameError::Action(err @ ActionError::Overflow(_))) => {
                    // Nothing can be gained or spent any more, the session is over.
                    writeln!(self.output, "{}", render::rejection_message(&err))?;
                    if state.quit().is_ok() {
                        tracing::warn!(session = %state.session(), %err, "Session ended");
                    }
                }
                Err(GameError::Action(err)) => {
                    writeln!(self.output, "{}", render::rejection_message(&err))?;
                }
                Err(GameError::Record(err)) => return Err(err.into()),
            }
        }
    }

    /// Show a numbered menu and read the pick. An empty menu yields an empty pick without
    /// prompting, leaving the game state to explain why nothing can be chosen.
    fn pick(&mut self, menu: &str, question: &str) -> Result<Option<String>, ConsoleError> {
        if menu.is_empty() {
            return Ok(Some(String::new()));
        }
        write!(self.output, "{}", menu)?;
        self.prompt(question)
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn hang_up(&self, state: &mut GameState) -> Option<GameStatus> {
        if state.quit().is_ok() {
            tracing::info!(session = %state.session(), "Input closed, session quit");
        }
        None
    }
}
