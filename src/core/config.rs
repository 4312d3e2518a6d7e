//! Game configuration.
//!
//! `GameConfig::default()` reproduces the browser game's timings exactly.
//! Every delay is stored in milliseconds so configs serialize as plain
//! integers.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default key the high score is stored under.
pub const DEFAULT_HIGH_SCORE_KEY: &str = "simonHighScore";

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("flash interval must be greater than zero")]
    ZeroFlashInterval,

    #[error("flash duration {duration_ms}ms exceeds flash interval {interval_ms}ms")]
    OverlappingFlashes { duration_ms: u64, interval_ms: u64 },

    #[error("countdown tick must be greater than zero")]
    ZeroCountdownTick,

    #[error("countdown must grow every 1 or more levels")]
    ZeroCountdownPeriod,

    #[error("countdown cap {cap_secs}s is below base {base_secs}s")]
    CapBelowBase { base_secs: u32, cap_secs: u32 },

    #[error("high score key must not be empty")]
    EmptyHighScoreKey,
}

/// Per-turn countdown sizing.
///
/// `allowed_secs(level) = min(cap, base + floor(level / every) * step)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownRules {
    /// Seconds allowed before any growth.
    pub base_secs: u32,
    /// Seconds added per growth step.
    pub step_secs: u32,
    /// Levels per growth step.
    pub every_levels: u32,
    /// Upper bound on the allowance.
    pub cap_secs: u32,
}

impl Default for CountdownRules {
    fn default() -> Self {
        Self {
            base_secs: 30,
            step_secs: 5,
            every_levels: 3,
            cap_secs: 60,
        }
    }
}

impl CountdownRules {
    /// Seconds the player gets to reproduce the sequence at `level`.
    ///
    /// Level 0 is treated as level 1.
    #[must_use]
    pub fn allowed_secs(&self, level: u32) -> u32 {
        let level = level.max(1);
        let steps = level / self.every_levels.max(1);
        self.base_secs
            .saturating_add(steps.saturating_mul(self.step_secs))
            .min(self.cap_secs)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Run a countdown while the player is answering.
    pub timer_enabled: bool,

    /// Delay between round start and the new color being appended.
    pub lead_in_ms: u64,

    /// Cadence of computer flashes during replay.
    pub flash_interval_ms: u64,

    /// How long one computer flash stays lit.
    pub flash_duration_ms: u64,

    /// How long a player press stays lit.
    pub player_flash_ms: u64,

    /// Pause after a completed sequence before the next round.
    pub round_pause_ms: u64,

    /// Delay between "Time's up!" and the game ending.
    pub time_up_delay_ms: u64,

    /// How long the game-over indicator stays raised.
    pub game_over_indicator_ms: u64,

    /// Countdown decrement period.
    pub countdown_tick_ms: u64,

    /// Countdown sizing.
    pub countdown: CountdownRules,

    /// Store key for the persisted high score.
    pub high_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_enabled: true,
            lead_in_ms: 500,
            flash_interval_ms: 500,
            flash_duration_ms: 300,
            player_flash_ms: 200,
            round_pause_ms: 1000,
            time_up_delay_ms: 300,
            game_over_indicator_ms: 600,
            countdown_tick_ms: 1000,
            countdown: CountdownRules::default(),
            high_score_key: DEFAULT_HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Default timings with the countdown enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// The variant without a per-turn countdown.
    pub fn classic() -> Self {
        Self::default().with_timer(false)
    }

    /// Enable or disable the countdown.
    #[must_use]
    pub fn with_timer(mut self, enabled: bool) -> Self {
        self.timer_enabled = enabled;
        self
    }

    /// Set the countdown sizing.
    #[must_use]
    pub fn with_countdown(mut self, rules: CountdownRules) -> Self {
        self.countdown = rules;
        self
    }

    /// Set the replay cadence and flash length.
    #[must_use]
    pub fn with_flash_timing(mut self, interval_ms: u64, duration_ms: u64) -> Self {
        self.flash_interval_ms = interval_ms;
        self.flash_duration_ms = duration_ms;
        self
    }

    /// Set the pause between a completed sequence and the next round.
    #[must_use]
    pub fn with_round_pause(mut self, pause_ms: u64) -> Self {
        self.round_pause_ms = pause_ms;
        self
    }

    /// Store the high score under a different key.
    #[must_use]
    pub fn with_high_score_key(mut self, key: impl Into<String>) -> Self {
        self.high_score_key = key.into();
        self
    }

    /// Check that the timings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_interval_ms == 0 {
            return Err(ConfigError::ZeroFlashInterval);
        }
        if self.flash_duration_ms > self.flash_interval_ms {
            return Err(ConfigError::OverlappingFlashes {
                duration_ms: self.flash_duration_ms,
                interval_ms: self.flash_interval_ms,
            });
        }
        if self.countdown_tick_ms == 0 {
            return Err(ConfigError::ZeroCountdownTick);
        }
        if self.countdown.every_levels == 0 {
            return Err(ConfigError::ZeroCountdownPeriod);
        }
        if self.countdown.cap_secs < self.countdown.base_secs {
            return Err(ConfigError::CapBelowBase {
                base_secs: self.countdown.base_secs,
                cap_secs: self.countdown.cap_secs,
            });
        }
        if self.high_score_key.is_empty() {
            return Err(ConfigError::EmptyHighScoreKey);
        }
        Ok(())
    }

    pub(crate) fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    pub(crate) fn flash_interval(&self) -> Duration {
        Duration::from_millis(self.flash_interval_ms)
    }

    pub(crate) fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }

    pub(crate) fn player_flash(&self) -> Duration {
        Duration::from_millis(self.player_flash_ms)
    }

    pub(crate) fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }

    pub(crate) fn time_up_delay(&self) -> Duration {
        Duration::from_millis(self.time_up_delay_ms)
    }

    pub(crate) fn game_over_indicator(&self) -> Duration {
        Duration::from_millis(self.game_over_indicator_ms)
    }

    pub(crate) fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_secs_defaults() {
        let rules = CountdownRules::default();
        assert_eq!(rules.allowed_secs(0), 30);
        assert_eq!(rules.allowed_secs(1), 30);
        assert_eq!(rules.allowed_secs(2), 30);
        assert_eq!(rules.allowed_secs(3), 35);
        assert_eq!(rules.allowed_secs(4), 35);
        assert_eq!(rules.allowed_secs(6), 40);
        assert_eq!(rules.allowed_secs(18), 60);
        assert_eq!(rules.allowed_secs(300), 60);
        assert_eq!(rules.allowed_secs(u32::MAX), 60);
    }

    #[test]
    fn test_default_matches_browser_timings() {
        let config = GameConfig::default();
        assert!(config.timer_enabled);
        assert_eq!(config.flash_interval(), Duration::from_millis(500));
        assert_eq!(config.round_pause(), Duration::from_millis(1000));
        assert_eq!(config.game_over_indicator(), Duration::from_millis(600));
        assert_eq!(config.high_score_key, "simonHighScore");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_classic_has_no_timer() {
        assert!(!GameConfig::classic().timer_enabled);
    }

    #[test]
    fn test_validate_rejects_bad_timings() {
        assert_eq!(
            GameConfig::new().with_flash_timing(0, 0).validate(),
            Err(ConfigError::ZeroFlashInterval)
        );
        assert_eq!(
            GameConfig::new().with_flash_timing(200, 300).validate(),
            Err(ConfigError::OverlappingFlashes {
                duration_ms: 300,
                interval_ms: 200
            })
        );

        let rules = CountdownRules {
            every_levels: 0,
            ..CountdownRules::default()
        };
        assert_eq!(
            GameConfig::new().with_countdown(rules).validate(),
            Err(ConfigError::ZeroCountdownPeriod)
        );

        let rules = CountdownRules {
            base_secs: 40,
            cap_secs: 20,
            ..CountdownRules::default()
        };
        assert!(matches!(
            GameConfig::new().with_countdown(rules).validate(),
            Err(ConfigError::CapBelowBase { .. })
        ));

        assert_eq!(
            GameConfig::new().with_high_score_key("").validate(),
            Err(ConfigError::EmptyHighScoreKey)
        );
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: GameConfig = serde_json::from_str(r#"{"timer_enabled": false}"#).unwrap();
        assert!(!config.timer_enabled);
        assert_eq!(config.flash_interval_ms, 500);
        assert_eq!(config.countdown, CountdownRules::default());
    }
}
