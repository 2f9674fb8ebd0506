//! Falling ball entity

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::paddle::Paddle;
use crate::consts::*;
use crate::palette::{BALL_COLORS, Rgb};

/// A falling, wall-bouncing disc worth more points the smaller it is
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub radius: u32,
    pub color: Rgb,
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
}

impl Ball {
    pub fn new(radius: u32, color: Rgb, pos: Vec2, vel: Vec2) -> Self {
        Self {
            radius,
            color,
            pos,
            vel,
        }
    }

    /// Spawn a ball with random size, color and velocity just above the screen
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let radius = rng.random_range(BALL_MIN_RADIUS..=BALL_MAX_RADIUS);
        let color = *BALL_COLORS.choose(rng).unwrap_or(&BALL_COLORS[0]);
        let x = rng.random_range(radius..=SCREEN_WIDTH as u32 - radius) as f32;
        let vel = Vec2::new(
            rng.random_range(BALL_MIN_SPEED_X..=BALL_MAX_SPEED_X),
            rng.random_range(BALL_MIN_SPEED_Y..=BALL_MAX_SPEED_Y),
        );
        Self::new(radius, color, Vec2::new(x, -(radius as f32)), vel)
    }

    /// Radius as a float for position math
    #[inline]
    pub fn r(&self) -> f32 {
        self.radius as f32
    }

    /// Score for catching this ball (always at least 1)
    pub fn points(&self) -> u32 {
        6u32.saturating_sub(self.radius / 5).max(1)
    }

    /// Advance one frame: move, bounce off side walls, clamp into bounds
    pub fn update(&mut self) {
        self.pos += self.vel;

        let r = self.r();
        if self.pos.x <= r || self.pos.x >= SCREEN_WIDTH - r {
            self.vel.x = -self.vel.x;
        }
        self.pos.x = self.pos.x.clamp(r, SCREEN_WIDTH - r);
    }

    /// True once the ball has fallen fully below the bottom edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT + self.r()
    }

    /// Bottom edge at or past the paddle top, center inside the paddle span.
    ///
    /// Only the center x is tested, so a ball hanging mostly off the paddle
    /// still counts while one whose rim overlaps a paddle corner does not.
    pub fn is_caught(&self, paddle: &Paddle) -> bool {
        self.pos.y + self.r() >= paddle.pos.y
            && self.pos.x >= paddle.pos.x
            && self.pos.x <= paddle.pos.x + paddle.width
    }
}
