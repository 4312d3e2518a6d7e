//! Display collaborator.
//!
//! The controller describes what changed as [`DisplayEvent`]s and hands them
//! to a [`Screen`]. How a flash looks, or how long the browser keeps a CSS
//! class on, is the screen's business.

mod message;
mod screen;

pub use message::Message;
pub use screen::{
    countdown_text, level_text, DisplayEvent, FlashSource, NullScreen, RecordingScreen, Screen,
    PLACEHOLDER,
};
