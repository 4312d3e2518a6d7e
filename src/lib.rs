//! # rust-simon
//!
//! A memory-sequence game engine: the computer flashes a growing sequence
//! of colored buttons and the player repeats it.
//!
//! ## Design Principles
//!
//! 1. **No Waiting**: Every pause is a scheduled event on a virtual clock.
//!    Hosts advance the clock; tests advance it by exact amounts.
//!
//! 2. **Collaborators at the Edges**: Presentation goes through [`Screen`],
//!    the high score through [`ScoreStore`], randomness through
//!    [`ColorSource`]. The controller only holds game state.
//!
//! 3. **Failure Is Gameplay**: A wrong color or an expired countdown is a
//!    transition to game over, never an error.
//!
//! ## Modules
//!
//! - `core`: Colors, color sources, configuration, round state
//! - `timing`: Timer queue and per-turn countdown
//! - `display`: Screen collaborator, display events, messages
//! - `storage`: High-score stores
//! - `controller`: The turn state machine

pub mod core;
pub mod timing;
pub mod display;
pub mod storage;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorSource, GameRng, GameRngState, ScriptedColors,
    GameConfig, CountdownRules, ConfigError,
    Phase, RoundState, GameOverReason, GameSummary, PressOutcome,
};

pub use crate::timing::{allowed_time, Countdown, Scheduler, TimerHandle, TimerQueue};

pub use crate::display::{DisplayEvent, FlashSource, Message, NullScreen, RecordingScreen, Screen};

pub use crate::storage::{JsonFileStore, MemoryStore, ScoreStore, StoreError};

pub use crate::controller::{GameController, Input, TimerEvent};
