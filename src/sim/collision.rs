//! Ball movement and collision resolution
//!
//! One call to [`advance`] is one tick of ball physics. Order within a tick:
//! integrate, walls, paddles (both checked), first overlapping obstacle,
//! scoring edges. Velocity is a per-tick displacement, there is no dt.

use rand::Rng;

use super::state::{Ball, Obstacle, Paddle, Side};
use crate::consts::*;

/// What happened during one tick of ball physics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionEvents {
    /// Ball bounced off the top or bottom edge
    pub wall_bounce: bool,
    /// Paddles the ball touched this tick
    pub left_hit: bool,
    pub right_hit: bool,
    /// Obstacle removed this tick (at most one)
    pub destroyed: Option<Obstacle>,
    /// Side that earned a paddle boost from the destroyed obstacle
    pub boost: Option<Side>,
    /// Side that scored (ball reached the opposite edge)
    pub scored: Option<Side>,
}

/// Advance the ball one tick and resolve every collision.
///
/// Paddle spin comes from each paddle's recorded `speed`. `last_hit` is read
/// for boost attribution and updated on paddle contact.
pub fn advance<R: Rng>(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    obstacles: &mut Vec<Obstacle>,
    last_hit: &mut Option<Side>,
    rng: &mut R,
) -> CollisionEvents {
    let mut events = CollisionEvents::default();

    ball.pos += ball.vel;

    // No position correction, a sub-pixel overshoot is fine
    let rect = ball.rect();
    if rect.top() <= 0.0 || rect.bottom() >= PLAY_HEIGHT {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    if ball.rect().intersects(&left.rect()) {
        deflect_off_paddle(ball, left);
        *last_hit = Some(Side::Left);
        events.left_hit = true;
    }
    if ball.rect().intersects(&right.rect()) {
        deflect_off_paddle(ball, right);
        *last_hit = Some(Side::Right);
        events.right_hit = true;
    }

    let ball_rect = ball.rect();
    if let Some(index) = obstacles.iter().position(|o| o.rect.intersects(&ball_rect)) {
        // Order-preserving removal keeps draw order stable
        events.destroyed = Some(obstacles.remove(index));
        ball.vel.y = -ball.vel.y;

        if rng.random::<f32>() < BOOST_CHANCE {
            events.boost = *last_hit;
        }
    }

    events.scored = scoring_side(ball);

    events
}

/// Reflect the ball off a paddle, add spin, then cap the speed.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    let away = match paddle.side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };

    let spin = paddle.speed * SPIN_MOTION_FACTOR
        + (paddle.center_y() - ball.pos.y) * SPIN_OFFSET_FACTOR;

    ball.vel.x = ball.vel.x.abs() * away;
    ball.vel.y += spin;
    if ball.vel.y == 0.0 {
        // Never leave a paddle flat: tip toward the spin, down when there is none
        ball.vel.y = if spin < 0.0 { -MIN_DEFLECT_DY } else { MIN_DEFLECT_DY };
    }
    ball.pos.x += PADDLE_NUDGE * away;

    ball.vel = ball.vel.clamp_length_max(BALL_MAX_SPEED);
    debug_assert!(
        ball.vel.length() <= BALL_MAX_SPEED + 1e-4,
        "ball speed {} above cap after paddle hit",
        ball.vel.length()
    );
}

/// Side that scores if the ball has reached a scoring edge
pub fn scoring_side(ball: &Ball) -> Option<Side> {
    let rect = ball.rect();
    if rect.left() <= 0.0 {
        Some(Side::Right)
    } else if rect.right() >= PLAY_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
