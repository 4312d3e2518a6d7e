//! The game's turn-taking state machine.
//!
//! ## States
//!
//! ```text
//! Idle --start--> ShowingSequence --replay done--> AwaitingInput
//!                      ^                               |
//!                      +------ full match, pause ------+
//!                                                      |
//! Idle <--indicator cleared-- GameOver <--wrong color / time's up
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_simon::controller::{GameController, Input};
//! use rust_simon::core::{Color, GameConfig, Phase, ScriptedColors};
//! use rust_simon::display::RecordingScreen;
//! use rust_simon::storage::MemoryStore;
//!
//! let mut game = GameController::new(
//!     GameConfig::classic(),
//!     RecordingScreen::new(),
//!     MemoryStore::new(),
//!     ScriptedColors::new([Color::Red]),
//! )
//! .unwrap();
//!
//! game.handle(Input::Start);
//! game.advance(Duration::from_millis(1000));
//! assert_eq!(game.phase(), Phase::AwaitingInput);
//!
//! game.handle(Input::Press(Color::Red));
//! game.advance(Duration::from_millis(1000));
//! assert_eq!(game.level(), 2);
//! ```

mod game;
mod input;

pub use game::GameController;
pub use input::{Input, TimerEvent};
