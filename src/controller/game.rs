//! Game controller implementation.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::input::{Input, TimerEvent};
use crate::core::{
    Color, ColorSource, ConfigError, GameConfig, GameOverReason, GameRng, GameSummary, Phase,
    PressOutcome, RoundState,
};
use crate::display::{DisplayEvent, FlashSource, Message, Screen};
use crate::storage::{read_high_score, ScoreStore};
use crate::timing::{Countdown, Scheduler, Tick, TimerQueue};

/// Turn engine for one player.
///
/// Owns the round state, the high score, and a timer queue. The host feeds
/// it [`Input`]s and advances its clock; everything else happens through
/// the screen and store collaborators.
pub struct GameController<S, P, C = GameRng> {
    config: GameConfig,
    state: RoundState,
    high_score: u32,
    timers: TimerQueue<TimerEvent>,
    countdown: Countdown,
    last_summary: Option<GameSummary>,
    screen: S,
    store: P,
    colors: C,
}

impl<S, P> GameController<S, P, GameRng>
where
    S: Screen,
    P: ScoreStore,
{
    /// Create a controller drawing colors from a seeded [`GameRng`].
    pub fn with_seed(
        config: GameConfig,
        screen: S,
        store: P,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(config, screen, store, GameRng::new(seed))
    }
}

impl<S, P, C> GameController<S, P, C>
where
    S: Screen,
    P: ScoreStore,
    C: ColorSource,
{
    /// Create an idle controller.
    ///
    /// Reads the high score from `store` once and shows the initial
    /// level, countdown and high score.
    pub fn new(
        config: GameConfig,
        mut screen: S,
        store: P,
        colors: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score = read_high_score(&store, &config.high_score_key);
        screen.show(DisplayEvent::HighScore(high_score));
        screen.show(DisplayEvent::Level(None));
        screen.show(DisplayEvent::Countdown(None));

        Ok(Self {
            config,
            state: RoundState::new(),
            high_score,
            timers: TimerQueue::new(),
            countdown: Countdown::new(),
            last_summary: None,
            screen,
            store,
            colors,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.state.level
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.started
    }

    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.state.input_enabled
    }

    #[must_use]
    pub fn sequence(&self) -> &[Color] {
        self.state.sequence()
    }

    #[must_use]
    pub fn user_input(&self) -> &[Color] {
        self.state.user_input()
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seconds left on the countdown, `None` when it is not running.
    #[must_use]
    pub fn time_remaining(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    /// Result of the most recently finished game.
    #[must_use]
    pub fn last_summary(&self) -> Option<&GameSummary> {
        self.last_summary.as_ref()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the next scheduled step fires, if anything is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Number of scheduled steps waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub fn colors(&self) -> &C {
        &self.colors
    }

    // === Events ===

    /// Handle player input. Returns whether the input was accepted.
    pub fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::Start => self.start(),
            Input::Press(color) => self.press(color),
        }
    }

    /// Start a new game. Ignored while a game is running.
    pub fn start(&mut self) -> bool {
        if self.state.started {
            debug!("start ignored, game already running");
            return false;
        }

        info!("game started");
        self.state.reset();
        self.state.started = true;
        self.show(DisplayEvent::Level(None));
        self.show(DisplayEvent::Message(Message::WatchSequence));
        self.begin_round();
        true
    }

    /// Press a color button. Ignored unless the player's turn is open.
    pub fn press(&mut self, color: Color) -> bool {
        let open = self.state.started
            && self.state.phase == Phase::AwaitingInput
            && self.state.input_enabled;
        if !open {
            debug!(%color, phase = ?self.state.phase, "press ignored");
            return false;
        }

        self.show(DisplayEvent::Flash {
            color,
            source: FlashSource::Player,
            lit: true,
        });
        self.timers
            .schedule(self.config.player_flash(), TimerEvent::PlayerFlashOff(color));

        match self.state.record_press(color) {
            PressOutcome::Partial => {}
            PressOutcome::Complete => {
                debug!(level = self.state.level, "sequence reproduced");
                self.stop_countdown();
                self.set_input(false);
                self.state.phase = Phase::ShowingSequence;
                self.timers.schedule(self.config.round_pause(), TimerEvent::NextRound);
            }
            PressOutcome::Mismatch { expected, pressed } => {
                self.end_game(GameOverReason::WrongColor { expected, pressed });
            }
        }
        true
    }

    /// Advance the clock by `dt`, firing every step that falls due.
    ///
    /// Steps scheduled while firing are included if they fall inside the
    /// window. Returns how many steps fired.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let deadline = self.timers.now().saturating_add(dt);
        let mut fired = 0;
        while let Some(event) = self.timers.pop_due(deadline) {
            self.on_timer(event);
            fired += 1;
        }
        self.timers.set_now(deadline);
        fired
    }

    /// Advance straight to the next scheduled step and fire everything due
    /// at that instant. Returns `false` if nothing was pending.
    pub fn advance_to_next(&mut self) -> bool {
        match self.timers.next_due() {
            Some(due) => {
                let dt = due.saturating_sub(self.timers.now());
                self.advance(dt) > 0
            }
            None => false,
        }
    }

    // === Transitions ===

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ExtendSequence => self.extend_and_replay(),
            TimerEvent::Flash(color) => self.show(DisplayEvent::Flash {
                color,
                source: FlashSource::Computer,
                lit: true,
            }),
            TimerEvent::FlashOff(color) => self.show(DisplayEvent::Flash {
                color,
                source: FlashSource::Computer,
                lit: false,
            }),
            TimerEvent::ReplayFinished => self.open_input(),
            TimerEvent::PlayerFlashOff(color) => self.show(DisplayEvent::Flash {
                color,
                source: FlashSource::Player,
                lit: false,
            }),
            TimerEvent::NextRound => {
                if self.state.started && self.state.phase == Phase::ShowingSequence {
                    self.begin_round();
                }
            }
            TimerEvent::CountdownTick => self.countdown_tick(),
            TimerEvent::TimeUp => {
                if self.state.started && self.state.phase == Phase::AwaitingInput {
                    self.end_game(GameOverReason::TimeUp);
                }
            }
            TimerEvent::ClearGameOverIndicator => {
                self.show(DisplayEvent::GameOverIndicator(false));
                if self.state.phase == Phase::GameOver {
                    self.state.phase = Phase::Idle;
                }
            }
        }
    }

    fn begin_round(&mut self) {
        self.stop_countdown();
        let level = self.state.next_round();
        debug!(level, "round started");

        self.state.phase = Phase::ShowingSequence;
        self.set_input(false);
        self.show(DisplayEvent::Level(Some(level)));
        self.show(DisplayEvent::Message(Message::Watch { level }));
        self.timers.schedule(self.config.lead_in(), TimerEvent::ExtendSequence);
    }

    fn extend_and_replay(&mut self) {
        if !self.state.started || self.state.phase != Phase::ShowingSequence {
            return;
        }

        let color = self.colors.next_color();
        self.state.extend(color);
        debug!(%color, len = self.state.sequence().len(), "sequence extended");

        let interval = self.config.flash_interval();
        let duration = self.config.flash_duration();
        let mut at = Duration::ZERO;
        for &c in self.state.sequence() {
            self.timers.schedule(at, TimerEvent::Flash(c));
            self.timers.schedule(at.saturating_add(duration), TimerEvent::FlashOff(c));
            at = at.saturating_add(interval);
        }
        self.timers.schedule(at, TimerEvent::ReplayFinished);
    }

    fn open_input(&mut self) {
        if !self.state.started || self.state.phase != Phase::ShowingSequence {
            return;
        }

        self.state.phase = Phase::AwaitingInput;
        self.set_input(true);
        self.show(DisplayEvent::Message(Message::YourTurn));

        if self.config.timer_enabled {
            let secs = self.config.countdown.allowed_secs(self.state.level);
            debug!(secs, level = self.state.level, "countdown started");
            self.countdown.start(
                &mut self.timers,
                secs,
                self.config.countdown_tick(),
                TimerEvent::CountdownTick,
            );
            self.show(DisplayEvent::Countdown(Some(secs)));
        }
    }

    fn countdown_tick(&mut self) {
        let period = self.config.countdown_tick();
        match self.countdown.tick(&mut self.timers, period, TimerEvent::CountdownTick) {
            Tick::Remaining(secs) => self.show(DisplayEvent::Countdown(Some(secs))),
            Tick::Expired => {
                debug!(level = self.state.level, "countdown expired");
                self.show(DisplayEvent::Countdown(None));
                self.show(DisplayEvent::Message(Message::TimeUp));
                self.set_input(false);
                self.timers.schedule(self.config.time_up_delay(), TimerEvent::TimeUp);
            }
            Tick::Inactive => {}
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.state.started = false;
        self.stop_countdown();
        self.set_input(false);

        let level = self.state.level;
        let previous = self.high_score;
        let new_high_score = level > previous;

        if new_high_score {
            self.high_score = level;
            if let Err(err) = self.store.set(&self.config.high_score_key, i64::from(level)) {
                warn!(%err, level, "failed to persist high score");
            }
            self.show(DisplayEvent::HighScore(level));
            self.show(DisplayEvent::Message(Message::NewHighScore { score: level }));
        } else {
            self.show(DisplayEvent::Message(Message::GameOver { score: level }));
        }
        info!(level, %reason, high_score = self.high_score, new_high_score, "game over");

        self.last_summary = Some(GameSummary {
            reason,
            level,
            previous_high_score: previous,
            new_high_score,
        });

        self.show(DisplayEvent::GameOverIndicator(true));
        self.timers.schedule(
            self.config.game_over_indicator(),
            TimerEvent::ClearGameOverIndicator,
        );

        self.state.reset();
        self.state.phase = Phase::GameOver;
        self.show(DisplayEvent::Level(None));
    }

    // === Helpers ===

    fn stop_countdown(&mut self) {
        if self.countdown.stop(&mut self.timers) {
            self.show(DisplayEvent::Countdown(None));
        }
    }

    fn set_input(&mut self, enabled: bool) {
        if self.state.input_enabled != enabled {
            self.state.input_enabled = enabled;
            self.show(DisplayEvent::InputEnabled(enabled));
        }
    }

    fn show(&mut self, event: DisplayEvent) {
        self.screen.show(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedColors;
    use crate::display::RecordingScreen;
    use crate::storage::MemoryStore;

    type TestController = GameController<RecordingScreen, MemoryStore, ScriptedColors>;

    fn controller(config: GameConfig, colors: &[Color]) -> TestController {
        GameController::new(
            config,
            RecordingScreen::new(),
            MemoryStore::new(),
            ScriptedColors::new(colors.iter().copied()),
        )
        .unwrap()
    }

    /// Lead-in plus one interval per color.
    fn replay_ms(len: u64) -> Duration {
        Duration::from_millis(500 + len * 500)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = GameController::new(
            GameConfig::new().with_flash_timing(0, 0),
            RecordingScreen::new(),
            MemoryStore::new(),
            ScriptedColors::new([Color::Red]),
        );
        assert!(matches!(result, Err(ConfigError::ZeroFlashInterval)));
    }

    #[test]
    fn test_initial_display() {
        let game = controller(GameConfig::new(), &[Color::Red]);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.screen().high_score(), Some(0));
        assert_eq!(game.screen().level(), Some(None));
        assert_eq!(game.screen().countdown(), Some(None));
    }

    #[test]
    fn test_start_begins_round_one() {
        let mut game = controller(GameConfig::new(), &[Color::Red]);
        assert!(game.start());

        assert!(game.is_started());
        assert_eq!(game.phase(), Phase::ShowingSequence);
        assert_eq!(game.level(), 1);
        assert!(game.sequence().is_empty());
        assert!(!game.input_enabled());
        assert_eq!(game.screen().last_message(), Some(Message::Watch { level: 1 }));

        // Second start while running is ignored
        assert!(!game.start());
    }

    #[test]
    fn test_sequence_appended_after_lead_in() {
        let mut game = controller(GameConfig::new(), &[Color::Green]);
        game.start();

        game.advance(Duration::from_millis(499));
        assert!(game.sequence().is_empty());

        game.advance(Duration::from_millis(1));
        assert_eq!(game.sequence(), &[Color::Green]);
        assert_eq!(game.sequence().len() as u32, game.level());
    }

    #[test]
    fn test_input_opens_after_replay() {
        let mut game = controller(GameConfig::new(), &[Color::Red]);
        game.start();

        game.advance(replay_ms(1) - Duration::from_millis(1));
        assert_eq!(game.phase(), Phase::ShowingSequence);
        assert!(!game.press(Color::Red));

        game.advance(Duration::from_millis(1));
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert!(game.input_enabled());
        assert_eq!(game.time_remaining(), Some(30));
        assert_eq!(game.screen().last_message(), Some(Message::YourTurn));
    }

    #[test]
    fn test_classic_variant_has_no_countdown() {
        let mut game = controller(GameConfig::classic(), &[Color::Red]);
        game.start();
        game.advance(replay_ms(1));

        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert_eq!(game.time_remaining(), None);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_flash_off_follows_flash_on() {
        let mut game = controller(GameConfig::new(), &[Color::Purple]);
        game.start();
        game.screen_mut().clear();
        game.advance(replay_ms(1));

        let flashes: Vec<_> = game
            .screen()
            .events()
            .iter()
            .filter(|e| matches!(e, DisplayEvent::Flash { .. }))
            .cloned()
            .collect();
        assert_eq!(
            flashes,
            vec![
                DisplayEvent::Flash {
                    color: Color::Purple,
                    source: FlashSource::Computer,
                    lit: true
                },
                DisplayEvent::Flash {
                    color: Color::Purple,
                    source: FlashSource::Computer,
                    lit: false
                },
            ]
        );
    }

    #[test]
    fn test_game_over_indicator_clears() {
        let mut game = controller(GameConfig::new(), &[Color::Red]);
        game.start();
        game.advance(replay_ms(1));
        game.press(Color::Green);

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game
            .screen()
            .events()
            .contains(&DisplayEvent::GameOverIndicator(true)));

        game.advance(Duration::from_millis(600));
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(
            game.screen().events().last(),
            Some(&DisplayEvent::GameOverIndicator(false))
        );
    }
}
