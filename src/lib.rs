//! Pixel Pong - a two-player Pong variant for a small square pixel display
//!
//! Core modules:
//! - `sim`: deterministic simulation (ball, paddles, board, tick resolution)
//! - `settings`: validated game configuration and difficulty pacing
//!
//! The host owns the display, the paddle controls, and the timers. This
//! crate owns what happens when the ball moves: per-tick advancement,
//! collision resolution against the board edges and both paddles, and
//! round-over detection.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Board dimensions in pixels (sized for an 8x8 LED matrix).
    pub const BOARD_WIDTH: i32 = 8;
    pub const BOARD_HEIGHT: i32 = 8;

    /// Paddle defaults - a single-column span of three pixels
    pub const PADDLE_SIZE: i32 = 3;
    /// Index of the pixel (from the top of the span) used as the
    /// paddle's position reference.
    pub const PADDLE_ANCHOR: i32 = 1;
    /// One pixel each for the top, middle, and bottom hit regions.
    pub const HIT_REGIONS: (i32, i32, i32) = (1, 1, 1);

    /// Starting placements
    pub const BALL_START: (i32, i32) = (4, 2);
    pub const BALL_START_VELOCITY: (i32, i32) = (-1, 0);
    pub const LEFT_PADDLE_START: (i32, i32) = (0, 3);
    pub const RIGHT_PADDLE_START: (i32, i32) = (7, 3);

    /// Pacing: milliseconds between ticks, shrinking per paddle hit
    pub const INITIAL_TICK_MS: u32 = 1000;
    pub const MIN_TICK_MS: u32 = 100;
    pub const TICK_REDUCTION_MS: u32 = 50;
}
