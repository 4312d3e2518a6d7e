//! Player-facing status messages.

use serde::{Deserialize, Serialize};

/// The status line shown above the buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    /// Shown once when a game starts.
    WatchSequence,
    /// Shown at the start of each round.
    Watch { level: u32 },
    /// Input is open.
    YourTurn,
    /// The countdown ran out.
    TimeUp,
    /// The game ended with a new record.
    NewHighScore { score: u32 },
    /// The game ended without a new record.
    GameOver { score: u32 },
}

impl Message {
    /// Whether this message ends a game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Message::NewHighScore { .. } | Message::GameOver { .. })
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::WatchSequence => f.write_str("Watch the sequence!"),
            Message::Watch { level } => write!(f, "Level {level} - Watch!"),
            Message::YourTurn => f.write_str("Your turn!"),
            Message::TimeUp => f.write_str("Time's up!"),
            Message::NewHighScore { score } => {
                write!(f, "New High Score! {score}\nPress any key to play again")
            }
            Message::GameOver { score } => {
                write!(f, "Game Over! Score: {score}\nPress any key to play again")
            }
        }
    }
}
