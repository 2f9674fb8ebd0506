//! Frame composition
//!
//! Turns a `GameState` into one vertex list: the background pattern first,
//! then exactly one screen layout. No GPU access, so layouts are testable.

use glam::Vec2;

use super::font::{FontSize, draw_text, draw_text_centered, text_width};
use super::shapes::{circle, rect, rect_outline, ring, segments_for};
use super::vertex::{Vertex, rgb, rgba};
use crate::consts::*;
use crate::palette::{PADDLE, WHITE};
use crate::sim::{Background, Ball, GameOverReason, GamePhase, GameState, Paddle};

/// Outline thickness for paddle and balls
const OUTLINE: f32 = 2.0;
/// Margin between HUD text and the screen edge
const HUD_MARGIN: f32 = 20.0;

/// Builds frame geometry, caching the static background between frames
#[derive(Debug, Default)]
pub struct SceneBuilder {
    background: Option<(u32, Vec<Vertex>)>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All vertices for the current frame, in draw order
    pub fn build(&mut self, state: &GameState) -> Vec<Vertex> {
        let mut vertices = self.background_vertices(&state.background).to_vec();

        match state.phase {
            GamePhase::Start => start_screen(&mut vertices, state),
            GamePhase::Playing => game_screen(&mut vertices, state),
            GamePhase::GameOver => game_over_screen(&mut vertices, state),
        }

        vertices
    }

    /// Background geometry, rebuilt only when the pattern was regenerated
    fn background_vertices(&mut self, background: &Background) -> &[Vertex] {
        let stale = !matches!(&self.background, Some((generation, _)) if *generation == background.generation);
        if stale {
            log::debug!(
                "Rebuilding background geometry (generation {})",
                background.generation
            );
            self.background = Some((background.generation, background_geometry(background)));
        }
        self.background
            .as_ref()
            .map(|(_, verts)| verts.as_slice())
            .unwrap_or_default()
    }
}

fn background_geometry(background: &Background) -> Vec<Vertex> {
    background
        .rings
        .iter()
        .flat_map(|r| {
            let radius = r.radius as f32;
            ring(
                r.center,
                radius - 1.0,
                radius,
                rgba(r.color, BACKGROUND_ALPHA),
                segments_for(radius),
            )
        })
        .collect()
}

/// Instruction lines for the start screen
pub fn instructions(time_limit_secs: u32) -> Vec<String> {
    vec![
        "Catch the falling balls with your paddle".to_string(),
        "Use LEFT and RIGHT arrow keys to move".to_string(),
        "Smaller balls are worth more points!".to_string(),
        format!("You have {time_limit_secs} seconds to score as many points as possible"),
        String::new(),
        "Press SPACE to start".to_string(),
    ]
}

fn start_screen(vertices: &mut Vec<Vertex>, state: &GameState) {
    let white = rgb(WHITE);
    let center_x = SCREEN_WIDTH / 2.0;

    draw_text_centered(vertices, center_x, 150.0, "Fun Ball Puzzle", FontSize::Title, white);

    let mut y = 300.0;
    for line in instructions(state.tuning.time_limit_secs) {
        draw_text_centered(vertices, center_x, y, &line, FontSize::Small, white);
        y += 40.0;
    }
}

fn game_screen(vertices: &mut Vec<Vertex>, state: &GameState) {
    let white = rgb(WHITE);

    let score = format!("Score: {}", state.score);
    draw_text(
        vertices,
        Vec2::new(HUD_MARGIN, HUD_MARGIN),
        &score,
        FontSize::Normal,
        white,
    );

    let timer = format!("Time: {}", state.time_display());
    let timer_x = SCREEN_WIDTH - text_width(&timer, FontSize::Normal) - HUD_MARGIN;
    draw_text(
        vertices,
        Vec2::new(timer_x, HUD_MARGIN),
        &timer,
        FontSize::Normal,
        white,
    );

    paddle_geometry(vertices, &state.paddle);
    for ball in &state.balls {
        ball_geometry(vertices, ball);
    }
}

fn game_over_screen(vertices: &mut Vec<Vertex>, state: &GameState) {
    let white = rgb(WHITE);
    let center_x = SCREEN_WIDTH / 2.0;

    draw_text_centered(vertices, center_x, 150.0, "Game Over", FontSize::Title, white);

    let score = format!("Final Score: {}", state.score);
    draw_text_centered(vertices, center_x, 250.0, &score, FontSize::Normal, white);

    let reason = state.game_over_reason.unwrap_or(GameOverReason::TimeUp);
    draw_text_centered(
        vertices,
        center_x,
        300.0,
        reason.message(),
        FontSize::Small,
        white,
    );

    draw_text_centered(
        vertices,
        center_x,
        350.0,
        "Press SPACE to play again",
        FontSize::Small,
        white,
    );
}

fn paddle_geometry(vertices: &mut Vec<Vertex>, paddle: &Paddle) {
    let size = Vec2::new(paddle.width, paddle.height);
    vertices.extend(rect(paddle.pos, size, rgb(PADDLE)));
    vertices.extend(rect_outline(paddle.pos, size, OUTLINE, rgb(WHITE)));
}

fn ball_geometry(vertices: &mut Vec<Vertex>, ball: &Ball) {
    let r = ball.r();
    let segments = segments_for(r);
    vertices.extend(circle(ball.pos, r, rgb(ball.color), segments));
    vertices.extend(ring(ball.pos, r - OUTLINE, r, rgb(WHITE), segments));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::BALL_COLORS;
    use crate::sim::{TickInput, tick};

    fn has_color(verts: &[Vertex], color: [f32; 4]) -> bool {
        verts.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_instructions_mention_time_limit() {
        let lines = instructions(60);
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("60 seconds"));
        assert_eq!(lines[5], "Press SPACE to start");
    }

    #[test]
    fn test_instructions_fit_screen() {
        for line in instructions(60) {
            assert!(text_width(&line, FontSize::Small) <= SCREEN_WIDTH);
        }
        assert!(text_width("Fun Ball Puzzle", FontSize::Title) <= SCREEN_WIDTH);
    }

    #[test]
    fn test_start_screen_has_no_paddle() {
        let state = GameState::new(5);
        let verts = SceneBuilder::new().build(&state);
        assert!(!has_color(&verts, rgb(PADDLE)));
        assert!(has_color(&verts, rgb(WHITE)));
    }

    #[test]
    fn test_playing_screen_draws_paddle_and_balls() {
        let mut state = GameState::new(5);
        state.press_space();
        state.balls.push(Ball::new(
            20,
            BALL_COLORS[6],
            Vec2::new(200.0, 200.0),
            Vec2::new(0.0, 2.0),
        ));

        let verts = SceneBuilder::new().build(&state);
        assert!(has_color(&verts, rgb(PADDLE)));
        assert!(has_color(&verts, rgb(BALL_COLORS[6])));
    }

    #[test]
    fn test_game_over_screen_hides_play_field() {
        let mut state = GameState::new(5);
        state.press_space();
        state.time_remaining = 0.01;
        tick(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.phase, GamePhase::GameOver);

        let verts = SceneBuilder::new().build(&state);
        assert!(!has_color(&verts, rgb(PADDLE)));
    }

    #[test]
    fn test_background_cached_per_generation() {
        let mut state = GameState::new(5);
        let mut builder = SceneBuilder::new();

        builder.build(&state);
        let first = builder.background.clone();
        builder.build(&state);
        assert_eq!(builder.background, first);

        state.press_space();
        state.end(GameOverReason::Overflow);
        state.press_space();
        builder.build(&state);
        assert_ne!(builder.background, first);
        assert_eq!(
            builder.background.as_ref().map(|(g, _)| *g),
            Some(state.background.generation)
        );
    }

    #[test]
    fn test_background_is_dim() {
        let state = GameState::new(5);
        let verts = background_geometry(&state.background);
        assert!(!verts.is_empty());
        let alpha = BACKGROUND_ALPHA as f32 / 255.0;
        assert!(verts.iter().all(|v| (v.color[3] - alpha).abs() < 1e-6));
    }
}
