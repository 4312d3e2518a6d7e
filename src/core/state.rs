//! Round state: the computer's sequence, the player's answer, and progress.
//!
//! `RoundState` is plain data. It knows how to compare an answer against the
//! sequence but nothing about timing or display; the controller drives it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// Inline capacity for sequences. Games rarely get past twenty rounds.
pub type ColorList = SmallVec<[Color; 24]>;

/// Controller phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a start trigger.
    #[default]
    Idle,
    /// The computer is extending and replaying its sequence.
    ShowingSequence,
    /// The player is reproducing the sequence.
    AwaitingInput,
    /// A game just ended; the game-over indicator is up.
    GameOver,
}

/// Result of checking one button press against the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Correct so far, more colors to go.
    Partial,
    /// Correct and the whole sequence has been reproduced.
    Complete,
    /// Wrong color at this position.
    Mismatch { expected: Color, pressed: Color },
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The player pressed the wrong button.
    WrongColor { expected: Color, pressed: Color },
    /// The countdown ran out.
    TimeUp,
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOverReason::WrongColor { expected, pressed } => {
                write!(f, "pressed {pressed}, expected {expected}")
            }
            GameOverReason::TimeUp => f.write_str("time's up"),
        }
    }
}

/// Outcome of the most recent finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub reason: GameOverReason,
    /// Level reached when the game ended.
    pub level: u32,
    /// High score before this game.
    pub previous_high_score: u32,
    /// Whether `level` replaced the high score.
    pub new_high_score: bool,
}

/// Mutable per-game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    pub started: bool,
    pub level: u32,
    /// Whether button presses are accepted right now.
    pub input_enabled: bool,
    sequence: ColorList,
    user_input: ColorList,
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The computer's sequence so far.
    #[must_use]
    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// The player's answer in the current round.
    #[must_use]
    pub fn user_input(&self) -> &[Color] {
        &self.user_input
    }

    /// Clear sequence, answer and level. Does not touch `phase` or `started`.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.user_input.clear();
        self.level = 0;
        self.input_enabled = false;
    }

    /// Begin a new round: clear the answer and bump the level.
    pub fn next_round(&mut self) -> u32 {
        self.user_input.clear();
        self.level += 1;
        self.level
    }

    /// Append one color to the computer's sequence.
    pub fn extend(&mut self, color: Color) {
        self.sequence.push(color);
    }

    /// Record a press and compare it with the sequence at the same position.
    pub fn record_press(&mut self, pressed: Color) -> PressOutcome {
        self.user_input.push(pressed);
        let index = self.user_input.len() - 1;

        match self.sequence.get(index) {
            Some(&expected) if expected == pressed => {
                if self.user_input.len() == self.sequence.len() {
                    PressOutcome::Complete
                } else {
                    PressOutcome::Partial
                }
            }
            Some(&expected) => PressOutcome::Mismatch { expected, pressed },
            // Pressing past the end can only happen if input was left enabled
            // after completion; the controller never allows it.
            None => PressOutcome::Mismatch {
                expected: self.sequence.last().copied().unwrap_or(pressed),
                pressed,
            },
        }
    }

    /// Whether the answer so far is a prefix of the sequence.
    #[must_use]
    pub fn answer_is_prefix(&self) -> bool {
        self.sequence.starts_with(&self.user_input)
    }
}
