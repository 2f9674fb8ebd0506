//! Per-frame simulation step
//!
//! Ball motion is frame-stepped; only the session clock uses wall time.

use super::state::{GameEvent, GameOverReason, GamePhase, GameState};

/// Keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game by one frame. `dt` is real elapsed seconds since the
/// previous frame. Does nothing outside the playing phase.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.frame += 1;

    // Session clock
    state.time_remaining -= dt;
    if state.time_remaining <= 0.0 {
        state.time_remaining = 0.0;
        state.end(GameOverReason::TimeUp);
    }

    state.paddle.update(input);

    // Spawn pacing: delay is fractional, the counter is whole frames
    state.spawn_timer += 1;
    if state.spawn_timer as f32 >= state.spawn_delay {
        state.spawn_ball();
        state.spawn_timer = 0;
        state.spawn_delay = state.tuning.next_spawn_delay(state.spawn_delay);
    }

    // Move balls, keeping only those neither caught nor lost
    let balls = std::mem::take(&mut state.balls);
    let mut survivors = Vec::with_capacity(balls.len());
    for mut ball in balls {
        ball.update();

        if ball.is_caught(&state.paddle) {
            let points = ball.points();
            state.score += points;
            state.push_event(GameEvent::BallCaught { points });
        } else if ball.is_off_screen() {
            state.push_event(GameEvent::BallMissed);
        } else {
            survivors.push(ball);
        }
    }
    state.balls = survivors;

    if state.balls.len() > state.tuning.max_active_balls {
        state.end(GameOverReason::Overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::palette::BALL_COLORS;
    use crate::sim::Ball;
    use glam::Vec2;

    const FRAME_DT: f32 = 1.0 / FPS as f32;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        state.press_space();
        state.drain_events();
        state
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.time_remaining, 60.0);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_start_then_catch_scores() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Start);
        state.press_space();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_remaining, 60.0);

        let x = state.paddle.pos.x + state.paddle.width / 2.0;
        state.balls.push(Ball::new(
            20,
            BALL_COLORS[3],
            Vec2::new(x, 500.0),
            Vec2::new(0.0, 3.0),
        ));

        let mut frames = 0;
        while state.score == 0 && frames < 100 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
            frames += 1;
        }

        assert_eq!(state.score, 2);
        assert!(state.balls.iter().all(|b| b.pos.y < 0.0));
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::BallCaught { points: 2 })
        );
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_overflow_ends_game() {
        let mut state = playing_state();
        for i in 0..21 {
            state.balls.push(Ball::new(
                30,
                BALL_COLORS[i % BALL_COLORS.len()],
                Vec2::new(100.0, 100.0),
                Vec2::new(0.0, 2.0),
            ));
        }

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.game_over_reason, Some(GameOverReason::Overflow));
        assert!(state.time_remaining > 0.0);
    }

    #[test]
    fn test_exactly_threshold_keeps_playing() {
        let mut state = playing_state();
        for _ in 0..20 {
            state.balls.push(Ball::new(
                30,
                BALL_COLORS[0],
                Vec2::new(100.0, 100.0),
                Vec2::new(0.0, 2.0),
            ));
        }

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_timeout_clamps_to_zero() {
        let mut state = playing_state();
        state.time_remaining = 0.05;

        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.time_remaining, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.game_over_reason, Some(GameOverReason::TimeUp));
        assert_eq!(state.time_display(), "00:00");
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut state = playing_state();
        state.score = 11;
        state.time_remaining = 0.01;
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen while game over
        let frame = state.frame;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.frame, frame);

        state.press_space();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert_eq!(state.time_remaining, 60.0);
    }

    #[test]
    fn test_spawn_pacing_ramps() {
        let mut state = playing_state();

        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert!(state.balls.is_empty());

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.spawn_timer, 0);
        assert!((state.spawn_delay - 59.8).abs() < 1e-4);

        // Fractional delay rounds up to whole frames: 59.8 needs 60 ticks
        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.balls.len(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.balls.len(), 2);
    }

    #[test]
    fn test_spawn_delay_floor() {
        let mut state = playing_state();
        state.spawn_delay = 20.1;
        state.spawn_timer = 20;
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.spawn_delay, 20.0);
        state.spawn_timer = 20;
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.spawn_delay, 20.0);
    }

    #[test]
    fn test_missed_ball_removed_without_score() {
        let mut state = playing_state();
        state.balls.push(Ball::new(
            15,
            BALL_COLORS[0],
            Vec2::new(20.0, SCREEN_HEIGHT + 14.0),
            Vec2::new(0.0, 2.0),
        ));

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.balls.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::BallMissed]);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = playing_state();
        let x = state.paddle.pos.x;
        tick(
            &mut state,
            &TickInput {
                left: true,
                right: false,
            },
            FRAME_DT,
        );
        assert_eq!(state.paddle.pos.x, x - PADDLE_SPEED);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = playing_state();
        let mut state2 = playing_state();

        let inputs = [
            TickInput {
                left: true,
                right: false,
            },
            TickInput::default(),
            TickInput {
                left: false,
                right: true,
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, FRAME_DT);
            tick(&mut state2, input, FRAME_DT);
        }

        assert_eq!(state1.balls, state2.balls);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.paddle, state2.paddle);
    }
}
