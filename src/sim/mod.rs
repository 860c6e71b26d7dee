//! Fixed-tick simulation module
//!
//! All gameplay logic lives here:
//! - One tick per call, no dt scaling
//! - Seeded RNG only
//! - Clock sampled once per tick from the input snapshot
//! - No rendering or platform dependencies

pub mod collision;
pub mod phase;
pub mod rect;
pub mod round;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{CollisionEvents, advance, deflect_off_paddle};
pub use phase::{GamePhase, PhaseEvent, next_phase};
pub use rect::{Rect, intersects};
pub use round::{award_point, expire_boost, grant_boost, regenerate_obstacles, start_match};
pub use scene::Scene;
pub use state::{Ball, GameState, MatchState, Obstacle, Paddle, Side};
pub use tick::{Command, TickInput, tick, tick_scene};
