//! Screen collaborator and display events.

use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::core::Color;

/// Placeholder shown for an inactive level or countdown.
pub const PLACEHOLDER: &str = "--";

/// Who lit a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlashSource {
    /// Replay of the computer's sequence.
    Computer,
    /// Feedback for a player press.
    Player,
}

/// One presentation change requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEvent {
    /// Current level, `None` between games.
    Level(Option<u32>),
    Message(Message),
    HighScore(u32),
    /// Seconds left on the countdown, `None` when inactive.
    Countdown(Option<u32>),
    /// A button lit or unlit.
    Flash {
        color: Color,
        source: FlashSource,
        lit: bool,
    },
    /// Buttons enabled or disabled.
    InputEnabled(bool),
    /// The transient game-over indicator raised or cleared.
    GameOverIndicator(bool),
}

/// Text for the level field.
#[must_use]
pub fn level_text(level: Option<u32>) -> String {
    match level {
        Some(level) if level > 0 => level.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Text for the countdown field.
#[must_use]
pub fn countdown_text(remaining: Option<u32>) -> String {
    match remaining {
        Some(secs) if secs > 0 => format!("{secs}s"),
        _ => PLACEHOLDER.to_string(),
    }
}

impl std::fmt::Display for DisplayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayEvent::Level(level) => write!(f, "level: {}", level_text(*level)),
            DisplayEvent::Message(msg) => write!(f, "message: {msg}"),
            DisplayEvent::HighScore(score) => write!(f, "high score: {score}"),
            DisplayEvent::Countdown(secs) => write!(f, "timer: {}", countdown_text(*secs)),
            DisplayEvent::Flash { color, source, lit } => {
                let state = if *lit { "on" } else { "off" };
                write!(f, "{source:?} flash {color} {state}")
            }
            DisplayEvent::InputEnabled(on) => write!(f, "input enabled: {on}"),
            DisplayEvent::GameOverIndicator(on) => write!(f, "game over indicator: {on}"),
        }
    }
}

/// Presentation sink. Implementations render; they never feed back into
/// game logic.
pub trait Screen {
    fn show(&mut self, event: DisplayEvent);
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn show(&mut self, event: DisplayEvent) {
        (**self).show(event);
    }
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn show(&mut self, event: DisplayEvent) {
        (**self).show(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn show(&mut self, _event: DisplayEvent) {}
}

/// Keeps every event in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingScreen {
    events: Vec<DisplayEvent>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Every message shown, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = Message> + '_ {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Message(m) => Some(*m),
            _ => None,
        })
    }

    #[must_use]
    pub fn last_message(&self) -> Option<Message> {
        self.messages().last()
    }

    /// Colors the computer lit, in order.
    #[must_use]
    pub fn computer_flashes(&self) -> Vec<Color> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Flash {
                    color,
                    source: FlashSource::Computer,
                    lit: true,
                } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Most recent level field value.
    #[must_use]
    pub fn level(&self) -> Option<Option<u32>> {
        self.events.iter().rev().find_map(|e| match e {
            DisplayEvent::Level(level) => Some(*level),
            _ => None,
        })
    }

    /// Most recent countdown field value.
    #[must_use]
    pub fn countdown(&self) -> Option<Option<u32>> {
        self.events.iter().rev().find_map(|e| match e {
            DisplayEvent::Countdown(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Most recent high score shown.
    #[must_use]
    pub fn high_score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            DisplayEvent::HighScore(score) => Some(*score),
            _ => None,
        })
    }
}

impl Screen for RecordingScreen {
    fn show(&mut self, event: DisplayEvent) {
        self.events.push(event);
    }
}
