//! BreakPong - two-player Pong with brick rows along the walls
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (physics, collisions, rounds, phase machine)
//! - `settings`: Match configuration (winning score)
//!
//! Windowing, text, audio and raw input polling live outside this crate. The
//! simulation consumes a [`sim::TickInput`] per tick and hands back a
//! [`sim::Scene`] for whatever draws it.

pub mod settings;
pub mod sim;

pub use settings::{Settings, WinningScore};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (origin top-left, y grows downward)
    pub const PLAY_WIDTH: f32 = 640.0;
    pub const PLAY_HEIGHT: f32 = 480.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const BASE_PADDLE_HEIGHT: f32 = 60.0;
    pub const LEFT_PADDLE_X: f32 = 20.0;
    pub const RIGHT_PADDLE_X: f32 = PLAY_WIDTH - 30.0;
    /// Movement per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis speed given to the ball on serve
    pub const BALL_SERVE_SPEED: f32 = 4.0;
    /// Ball speed magnitude is clamped to this after a paddle hit
    pub const BALL_MAX_SPEED: f32 = 6.0;

    /// Spin from paddle movement (per unit of paddle speed)
    pub const SPIN_MOTION_FACTOR: f32 = 0.1;
    /// Spin from paddle/ball center offset (per pixel)
    pub const SPIN_OFFSET_FACTOR: f32 = 0.05;
    /// Distance the ball is pushed off a paddle after a hit
    pub const PADDLE_NUDGE: f32 = 5.0;
    /// Vertical speed given to a ball that would leave a paddle perfectly flat
    pub const MIN_DEFLECT_DY: f32 = 0.5;

    /// Obstacle rows (one flush to the top, one flush to the bottom)
    pub const OBSTACLE_COLUMNS: usize = 8;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;

    /// Boost (paddle growth) granted when an obstacle breaks
    pub const BOOST_CHANCE: f32 = 0.2;
    pub const BOOST_FACTOR: f32 = 1.5;
    pub const BOOST_DURATION_MS: u64 = 5000;

    /// Phase timers
    pub const INTRO_DURATION_MS: u64 = 4000;
    pub const COUNTDOWN_DURATION_MS: u64 = 3500;
    pub const GRACE_DURATION_MS: u64 = 1000;

    /// Obstacle colors, picked per cell on regeneration
    pub const OBSTACLE_PALETTE: [[u8; 3]; 9] = [
        [255, 100, 100],
        [100, 255, 100],
        [100, 100, 255],
        [255, 255, 100],
        [255, 150, 200],
        [200, 150, 255],
        [255, 120, 0],
        [0, 200, 200],
        [200, 100, 50],
    ];
}
