//! Fun Ball Puzzle - catch the falling balls before the clock runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balls, paddle, game state machine)
//! - `renderer`: wgpu rendering pipeline and screen layouts
//! - `audio`: Catch sound playback with a silent fallback
//! - `platform`: Keyboard state and frame pacing
//! - `settings` / `tuning`: Compiled-in presentation and balance defaults

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Target frame rate of the main loop
    pub const FPS: u32 = 60;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the paddle's top edge to the bottom of the screen
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball radius range (inclusive)
    pub const BALL_MIN_RADIUS: u32 = 15;
    pub const BALL_MAX_RADIUS: u32 = 30;
    /// Horizontal speed range (pixels per frame)
    pub const BALL_MIN_SPEED_X: f32 = -2.0;
    pub const BALL_MAX_SPEED_X: f32 = 2.0;
    /// Vertical speed range (pixels per frame, always downward)
    pub const BALL_MIN_SPEED_Y: f32 = 2.0;
    pub const BALL_MAX_SPEED_Y: f32 = 5.0;

    /// Number of rings in the decorative background
    pub const BACKGROUND_RINGS: usize = 100;
    pub const BACKGROUND_MIN_RADIUS: u32 = 5;
    pub const BACKGROUND_MAX_RADIUS: u32 = 20;
    /// Background pattern opacity (0-255)
    pub const BACKGROUND_ALPHA: u8 = 50;
}

/// Fixed palette and named colors (8-bit sRGB)
pub mod palette {
    pub type Rgb = (u8, u8, u8);

    pub const WHITE: Rgb = (255, 255, 255);
    pub const BACKGROUND: Rgb = (20, 20, 50);
    pub const PADDLE: Rgb = (50, 150, 200);

    /// Colors a ball (or background ring) may take
    pub const BALL_COLORS: [Rgb; 8] = [
        (255, 0, 0),   // Red
        (0, 255, 0),   // Green
        (0, 0, 255),   // Blue
        (255, 255, 0), // Yellow
        (255, 0, 255), // Magenta
        (0, 255, 255), // Cyan
        (255, 165, 0), // Orange
        (128, 0, 128), // Purple
    ];
}
