//! Color sources: where each new sequence element comes from.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical color sequence
//! - **Serializable**: O(1) state capture and restore for replays
//! - **Scriptable**: [`ScriptedColors`] plays back a fixed cycle for tests
//!
//! ```
//! use rust_simon::core::{ColorSource, GameRng};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let seq_a: Vec<_> = (0..5).map(|_| a.next_color()).collect();
//! let seq_b: Vec<_> = (0..5).map(|_| b.next_color()).collect();
//! assert_eq!(seq_a, seq_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Supplies the next color appended to the computer's sequence.
///
/// Every draw is independent: implementations must not avoid repeating the
/// previous color.
pub trait ColorSource {
    /// Draw the next color.
    fn next_color(&mut self) -> Color;
}

/// Deterministic RNG drawing uniformly from the color alphabet.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed taken from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ColorSource for GameRng {
    fn next_color(&mut self) -> Color {
        let index = self.gen_range_usize(0..Color::COUNT);
        Color::ALL[index]
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how
/// many colors have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Plays back a fixed list of colors, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedColors {
    colors: Vec<Color>,
    cursor: usize,
}

impl ScriptedColors {
    /// Create a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        assert!(!colors.is_empty(), "Scripted colors must not be empty");
        Self { colors, cursor: 0 }
    }

    /// Number of colors handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.cursor % self.colors.len()];
        self.cursor += 1;
        color
    }
}
