//! Core game types: colors, color sources, configuration, round state.
//!
//! Nothing in here schedules or displays anything; the controller combines
//! these pieces with the timing and display modules.

pub mod color;
pub mod rng;
pub mod config;
pub mod state;

pub use color::{Color, UnknownColor};
pub use rng::{ColorSource, GameRng, GameRngState, ScriptedColors};
pub use config::{ConfigError, CountdownRules, GameConfig, DEFAULT_HIGH_SCORE_KEY};
pub use state::{ColorList, GameOverReason, GameSummary, Phase, PressOutcome, RoundState};
