//! Platform abstraction layer
//!
//! Handles the native shell's side of:
//! - Time/frame pacing
//! - Keyboard input

pub mod input;
pub mod time;

pub use input::{Command, KeyState};
pub use time::FrameClock;
