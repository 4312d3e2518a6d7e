//! External input and internal timer events.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Something the player did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Any key or tap that starts a game.
    Start,
    /// A color button was pressed.
    Press(Color),
}

impl From<Color> for Input {
    fn from(color: Color) -> Self {
        Input::Press(color)
    }
}

/// A delayed step the controller scheduled for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Lead-in finished: draw and append the round's new color.
    ExtendSequence,
    /// Light one button of the replay.
    Flash(Color),
    /// Unlight a replay button.
    FlashOff(Color),
    /// Every replay flash has been shown.
    ReplayFinished,
    /// Unlight a player-pressed button.
    PlayerFlashOff(Color),
    /// Post-round pause finished.
    NextRound,
    /// One countdown period elapsed.
    CountdownTick,
    /// "Time's up!" has been on screen long enough.
    TimeUp,
    /// Lower the game-over indicator.
    ClearGameOverIndicator,
}
