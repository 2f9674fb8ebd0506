//! Data-driven game balance
//!
//! Every knob that shapes a session's difficulty curve lives here so the
//! simulation never reaches for a magic number.

use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_SPEED;

/// Balance values for a single session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Session length in seconds
    pub time_limit_secs: u32,
    /// Frames between spawns at session start
    pub initial_spawn_delay: f32,
    /// How much the spawn delay shrinks after each spawn
    pub spawn_delay_step: f32,
    /// Spawn delay never drops below this many frames
    pub min_spawn_delay: f32,
    /// More active balls than this ends the session
    pub max_active_balls: usize,
    /// Paddle movement per frame while a direction key is held
    pub paddle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            time_limit_secs: 60,
            initial_spawn_delay: 60.0,
            spawn_delay_step: 0.2,
            min_spawn_delay: 20.0,
            max_active_balls: 20,
            paddle_speed: PADDLE_SPEED,
        }
    }
}

impl Tuning {
    /// Session length as fractional seconds
    pub fn time_limit(&self) -> f32 {
        self.time_limit_secs as f32
    }

    /// Next spawn delay after a spawn, respecting the floor
    pub fn next_spawn_delay(&self, current: f32) -> f32 {
        (current - self.spawn_delay_step).max(self.min_spawn_delay)
    }
}
