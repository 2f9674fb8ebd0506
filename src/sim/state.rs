//! Game state and screen flow
//!
//! All mutable session state lives in `GameState`; the shell owns exactly one.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::background::Background;
use super::ball::Ball;
use super::paddle::Paddle;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title and instructions, waiting for space
    Start,
    /// Active gameplay
    Playing,
    /// Session ended, waiting for space to play again
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The countdown reached zero
    TimeUp,
    /// Too many balls were on screen at once
    Overflow,
}

impl GameOverReason {
    /// Line shown on the game over screen
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::TimeUp => "Time's up!",
            GameOverReason::Overflow => "Too many balls!",
        }
    }
}

/// Things that happened during a frame, for the shell to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session began from the start screen
    Started,
    /// A session began again after game over
    Restarted,
    /// The paddle caught a ball
    BallCaught { points: u32 },
    /// A ball fell off the bottom of the screen
    BallMissed,
    /// The session ended
    GameOver { reason: GameOverReason, score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Current screen
    pub phase: GamePhase,
    pub score: u32,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    pub paddle: Paddle,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Frames between spawns (fractional, shrinks toward a floor)
    pub spawn_delay: f32,
    /// Seconds left in the session
    pub time_remaining: f32,
    /// Set once when the session ends
    pub game_over_reason: Option<GameOverReason>,
    /// Decorative pattern behind every screen
    pub background: Background,
    /// Frames simulated while playing
    pub frame: u64,
    /// Pending events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let background = Background::generate(&mut rng, 0);

        Self {
            seed,
            rng,
            paddle: Paddle::with_speed(tuning.paddle_speed),
            spawn_delay: tuning.initial_spawn_delay,
            time_remaining: tuning.time_limit(),
            tuning,
            phase: GamePhase::Start,
            score: 0,
            balls: Vec::new(),
            spawn_timer: 0,
            game_over_reason: None,
            background,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Put every field back to its initial value and regenerate the
    /// background. The RNG keeps its stream so the next session differs.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.score = 0;
        self.balls.clear();
        self.paddle = Paddle::with_speed(self.tuning.paddle_speed);
        self.spawn_timer = 0;
        self.spawn_delay = self.tuning.initial_spawn_delay;
        self.time_remaining = self.tuning.time_limit();
        self.game_over_reason = None;
        self.frame = 0;
        let generation = self.background.generation.wrapping_add(1);
        self.background = Background::generate(&mut self.rng, generation);
    }

    /// Leave the start screen
    pub fn start(&mut self) {
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Started);
        }
    }

    /// Space starts from the start screen and restarts from game over
    pub fn press_space(&mut self) {
        match self.phase {
            GamePhase::Start => self.start(),
            GamePhase::GameOver => {
                self.reset();
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Restarted);
            }
            GamePhase::Playing => {}
        }
    }

    /// End the session. The first reason recorded wins.
    pub fn end(&mut self, reason: GameOverReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.game_over_reason = Some(reason);
        self.events.push(GameEvent::GameOver {
            reason,
            score: self.score,
        });
    }

    /// Append a freshly randomized ball
    pub fn spawn_ball(&mut self) {
        let ball = Ball::spawn(&mut self.rng);
        self.balls.push(ball);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Remaining time as `MM:SS`
    pub fn time_display(&self) -> String {
        format_clock(self.time_remaining)
    }
}

/// Format seconds as `MM:SS`, truncating fractions and treating negatives as zero
pub fn format_clock(secs: f32) -> String {
    let whole = secs.max(0.0) as u32;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.time_remaining, 60.0);
        assert_eq!(state.spawn_delay, 60.0);
        assert_eq!(state.game_over_reason, None);
    }

    #[test]
    fn test_space_starts_only_from_start() {
        let mut state = GameState::new(1);
        state.press_space();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);

        // Space while playing does nothing
        state.score = 7;
        state.press_space();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 7);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1);
        state.press_space();
        state.score = 42;
        state.spawn_ball();
        state.spawn_delay = 25.0;
        state.spawn_timer = 9;
        state.time_remaining = 3.0;
        state.paddle.pos.x = 0.0;
        let old_generation = state.background.generation;
        state.end(GameOverReason::Overflow);

        state.press_space();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.time_remaining, 60.0);
        assert_eq!(state.spawn_delay, 60.0);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.paddle, Paddle::default());
        assert_eq!(state.game_over_reason, None);
        assert_ne!(state.background.generation, old_generation);
    }

    #[test]
    fn test_first_reason_wins() {
        let mut state = GameState::new(1);
        state.press_space();
        state.end(GameOverReason::TimeUp);
        state.end(GameOverReason::Overflow);
        assert_eq!(state.game_over_reason, Some(GameOverReason::TimeUp));
        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(60.0), "01:00");
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(125.5), "02:05");
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(-1.0), "00:00");
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(GameOverReason::TimeUp.message(), "Time's up!");
        assert_eq!(GameOverReason::Overflow.message(), "Too many balls!");
    }
}
