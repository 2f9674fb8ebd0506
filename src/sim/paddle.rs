//! Player paddle

use glam::Vec2;

use super::tick::TickInput;
use crate::consts::*;

/// Horizontally sliding rectangle near the bottom of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame while a direction key is held
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::with_speed(PADDLE_SPEED)
    }
}

impl Paddle {
    /// Centered paddle moving at the given speed
    pub fn with_speed(speed: f32) -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0).floor(),
                SCREEN_HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
        }
    }

    /// Apply held keys for one frame. Left and right together cancel out.
    pub fn update(&mut self, input: &TickInput) {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, SCREEN_WIDTH - self.width);
    }

    /// Right edge x
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}
