//! Game state and entity types
//!
//! Everything the simulation mutates lives in [`GameState`]; there are no
//! process-wide globals. The phase machine, round controller and collision
//! resolver all take it (or parts of it) by `&mut`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: play_area_center(),
            vel: Vec2::splat(BALL_SERVE_SPEED),
            size: BALL_SIZE,
        }
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Re-center and serve away from the direction the ball was travelling
    pub fn serve(&mut self) {
        self.pos = play_area_center();
        self.vel.x = if self.vel.x < 0.0 {
            BALL_SERVE_SPEED
        } else {
            -BALL_SERVE_SPEED
        };
        self.vel.y = BALL_SERVE_SPEED;
    }
}

/// A player's paddle. `x` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub height: f32,
    /// Speed applied this tick (for spin on the ball)
    pub speed: f32,
    /// Height drops back to base once the clock reaches this
    pub boost_until_ms: u64,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        let mut paddle = Self {
            side,
            x,
            y: 0.0,
            height: BASE_PADDLE_HEIGHT,
            speed: 0.0,
            boost_until_ms: 0,
        };
        paddle.recenter();
        paddle
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, self.height)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn is_boosted(&self) -> bool {
        self.height > BASE_PADDLE_HEIGHT
    }

    /// Center vertically, keeping the current height
    pub fn recenter(&mut self) {
        self.y = (PLAY_HEIGHT - self.height) / 2.0;
    }

    /// Change height around the current vertical center
    pub fn resize(&mut self, height: f32) {
        let center = self.center_y();
        self.height = height.min(PLAY_HEIGHT);
        self.y = center - self.height / 2.0;
        self.clamp_to_play_area();
    }

    /// Move by a signed per-tick speed (negative = up), staying inside the
    /// play area. Records and returns the speed actually applied: zero when
    /// the paddle is already against the edge it is pushing toward.
    pub fn move_by(&mut self, speed: f32) -> f32 {
        let speed = speed.clamp(-PADDLE_SPEED, PADDLE_SPEED);
        let can_move = (speed < 0.0 && self.y > 0.0)
            || (speed > 0.0 && self.y + self.height < PLAY_HEIGHT);

        self.speed = if can_move { speed } else { 0.0 };
        self.y += self.speed;
        self.clamp_to_play_area();
        self.speed
    }

    pub fn clamp_to_play_area(&mut self) {
        self.y = self.y.clamp(0.0, (PLAY_HEIGHT - self.height).max(0.0));
    }
}

/// A destructible brick. Immutable once placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Display color (RGB), no gameplay effect
    pub color: [u8; 3],
}

/// Scores and per-match bookkeeping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchState {
    pub score_left: u32,
    pub score_right: u32,
    /// Last paddle to touch the ball (receives obstacle boosts)
    pub last_hit: Option<Side>,
    /// Set once a side reaches the winning score
    pub winner: Option<Side>,
}

impl MatchState {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Left => &mut self.score_left,
            Side::Right => &mut self.score_right,
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Obstacle colors and boost rolls
    pub rng: Pcg32,
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Clock time the current phase was entered (drives intro/countdown/grace)
    pub phase_started_ms: u64,
    /// Clock time of the most recent tick
    pub now_ms: u64,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Live obstacles in draw order
    pub obstacles: Vec<Obstacle>,
    pub score: MatchState,
}

impl GameState {
    /// Create a new game in the intro phase
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: Settings::default(),
            phase: GamePhase::Intro,
            phase_started_ms: now_ms,
            now_ms,
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            obstacles: Vec::new(),
            score: MatchState::default(),
        };

        // Bricks are visible behind the menu before the first match
        super::round::regenerate_obstacles(&mut state.obstacles, &mut state.rng);

        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Milliseconds spent in the current phase
    pub fn phase_elapsed_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.phase_started_ms)
    }
}

pub fn play_area_center() -> Vec2 {
    Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0)
}
