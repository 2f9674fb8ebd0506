//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Ball motion advances one fixed step per frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod background;
pub mod ball;
pub mod paddle;
pub mod state;
pub mod tick;

pub use background::{Background, Ring};
pub use ball::Ball;
pub use paddle::Paddle;
pub use state::{GameEvent, GameOverReason, GamePhase, GameState, format_clock};
pub use tick::{TickInput, tick};
