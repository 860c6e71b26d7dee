//! Rounds, scoring and the paddle boost
//!
//! The controller reacts to [`CollisionEvents`] and decides which phase
//! event follows. It never sets the phase itself.

use rand::Rng;

use super::collision::CollisionEvents;
use super::phase::PhaseEvent;
use super::rect::Rect;
use super::state::{GameState, Obstacle, Paddle, Side};
use crate::consts::*;

/// Rebuild both brick rows (top row flush to y = 0, bottom row flush to the
/// bottom edge), centered horizontally, with fresh colors.
pub fn regenerate_obstacles<R: Rng>(obstacles: &mut Vec<Obstacle>, rng: &mut R) {
    obstacles.clear();

    let row_width = OBSTACLE_COLUMNS as f32 * OBSTACLE_WIDTH;
    let start_x = ((PLAY_WIDTH - row_width) / 2.0).floor();

    for row_y in [0.0, PLAY_HEIGHT - OBSTACLE_HEIGHT] {
        for col in 0..OBSTACLE_COLUMNS {
            let x = start_x + col as f32 * OBSTACLE_WIDTH;
            let color = OBSTACLE_PALETTE[rng.random_range(0..OBSTACLE_PALETTE.len())];
            obstacles.push(Obstacle {
                rect: Rect::new(x, row_y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
                color,
            });
        }
    }
}

/// Grow a paddle around its center and (re)start its expiry timer
pub fn grant_boost(paddle: &mut Paddle, now_ms: u64) {
    paddle.resize(paddle.height * BOOST_FACTOR);
    paddle.boost_until_ms = now_ms + BOOST_DURATION_MS;
    log::debug!(
        "{} paddle boosted to {} until {}ms",
        paddle.side.as_str(),
        paddle.height,
        paddle.boost_until_ms
    );
}

/// Drop back to base height once the boost has run out. Safe every tick.
pub fn expire_boost(paddle: &mut Paddle, now_ms: u64) {
    if now_ms >= paddle.boost_until_ms && paddle.height != BASE_PADDLE_HEIGHT {
        paddle.resize(BASE_PADDLE_HEIGHT);
    }
}

pub fn expire_boosts(state: &mut GameState) {
    let now = state.now_ms;
    expire_boost(&mut state.left, now);
    expire_boost(&mut state.right, now);
}

/// Fresh match: zero scores, base-size centered paddles, new bricks, no boosts
pub fn start_match(state: &mut GameState) {
    state.score.score_left = 0;
    state.score.score_right = 0;
    state.score.winner = None;
    state.score.last_hit = None;

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle_mut(side);
        paddle.height = BASE_PADDLE_HEIGHT;
        paddle.boost_until_ms = 0;
        paddle.speed = 0.0;
        paddle.recenter();
    }

    state.ball.serve();
    regenerate_obstacles(&mut state.obstacles, &mut state.rng);

    log::info!(
        "Match started (first to {})",
        state.settings.winning_score.value()
    );
}

/// Called whenever play (re)starts: every round gets a full set of bricks
pub fn start_round(state: &mut GameState) {
    regenerate_obstacles(&mut state.obstacles, &mut state.rng);
    log::info!(
        "Round started at {} : {}",
        state.score.score_left,
        state.score.score_right
    );
}

/// Credit a point, serve the next ball and report whether the match is over.
///
/// Paddles are recentered but keep their height; a running boost carries
/// over into the next round.
pub fn award_point(state: &mut GameState, side: Side) -> PhaseEvent {
    *state.score.score_mut(side) += 1;
    state.ball.serve();
    state.left.recenter();
    state.right.recenter();

    log::debug!(
        "{} scores ({} : {})",
        side.as_str(),
        state.score.score_left,
        state.score.score_right
    );

    if state.score.score(side) >= state.settings.winning_score.value() {
        state.score.winner = Some(side);
        log::info!("{} player wins", side.as_str());
        PhaseEvent::MatchWon
    } else {
        PhaseEvent::PointScored
    }
}

/// Apply one tick of collision results. Returns the phase event a score
/// produced, if any.
pub fn apply_collisions(state: &mut GameState, events: &CollisionEvents) -> Option<PhaseEvent> {
    if let Some(side) = events.boost {
        let now = state.now_ms;
        grant_boost(state.paddle_mut(side), now);
    }

    events.scored.map(|side| award_point(state, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WinningScore;
    use crate::sim::phase::GamePhase;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_obstacle_rows() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obstacles = Vec::new();
        regenerate_obstacles(&mut obstacles, &mut rng);

        assert_eq!(obstacles.len(), 2 * OBSTACLE_COLUMNS);
        let (top, bottom) = obstacles.split_at(OBSTACLE_COLUMNS);
        for (t, b) in top.iter().zip(bottom) {
            assert_eq!(t.rect.top(), 0.0);
            assert_eq!(b.rect.bottom(), PLAY_HEIGHT);
            // Mirrored columns
            assert_eq!(t.rect.x, b.rect.x);
            assert!(OBSTACLE_PALETTE.contains(&t.color));
            assert!(OBSTACLE_PALETTE.contains(&b.color));
        }
        // Centered horizontally
        let left_gap = top[0].rect.left();
        let right_gap = PLAY_WIDTH - top[OBSTACLE_COLUMNS - 1].rect.right();
        assert_eq!(left_gap, right_gap);
    }

    #[test]
    fn test_regenerate_replaces_existing() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obstacles = Vec::new();
        regenerate_obstacles(&mut obstacles, &mut rng);
        obstacles.truncate(3);
        regenerate_obstacles(&mut obstacles, &mut rng);
        assert_eq!(obstacles.len(), 2 * OBSTACLE_COLUMNS);
    }

    #[test]
    fn test_boost_expiry_is_exact() {
        let mut paddle = Paddle::new(Side::Left);
        let center = paddle.center_y();
        let granted_at = 10_000;
        grant_boost(&mut paddle, granted_at);
        assert_eq!(paddle.height, BASE_PADDLE_HEIGHT * BOOST_FACTOR);
        assert_eq!(paddle.center_y(), center);

        for now in [granted_at, granted_at + 1, granted_at + BOOST_DURATION_MS - 1] {
            expire_boost(&mut paddle, now);
            assert!(paddle.is_boosted(), "expired early at {now}");
        }

        expire_boost(&mut paddle, granted_at + BOOST_DURATION_MS);
        assert_eq!(paddle.height, BASE_PADDLE_HEIGHT);
        assert_eq!(paddle.center_y(), center);
    }

    #[test]
    fn test_expire_without_boost_is_noop() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.y = 17.0;
        expire_boost(&mut paddle, 0);
        expire_boost(&mut paddle, 99_999);
        assert_eq!(paddle.height, BASE_PADDLE_HEIGHT);
        assert_eq!(paddle.y, 17.0);
    }

    #[test]
    fn test_boosts_stack_and_restart_timer() {
        let mut paddle = Paddle::new(Side::Left);
        grant_boost(&mut paddle, 0);
        grant_boost(&mut paddle, 3000);
        assert_eq!(paddle.height, BASE_PADDLE_HEIGHT * BOOST_FACTOR * BOOST_FACTOR);
        assert_eq!(paddle.boost_until_ms, 3000 + BOOST_DURATION_MS);

        expire_boost(&mut paddle, BOOST_DURATION_MS);
        assert!(paddle.is_boosted());
    }

    #[test]
    fn test_boost_capped_at_play_height() {
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..20 {
            grant_boost(&mut paddle, 0);
        }
        assert_eq!(paddle.height, PLAY_HEIGHT);
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_award_point_serves_away_from_scorer() {
        let mut state = GameState::new(5, 0);
        state.phase = GamePhase::Playing;
        state.ball.pos = Vec2::new(PLAY_WIDTH - 3.0, 100.0);
        state.ball.vel = Vec2::new(4.5, 2.0);
        state.left.y = 0.0;

        let event = award_point(&mut state, Side::Left);
        assert_eq!(event, PhaseEvent::PointScored);
        assert_eq!(state.score.score_left, 1);
        assert_eq!(state.ball.vel.x, -BALL_SERVE_SPEED);
        assert_eq!(state.ball.pos, Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0));
        assert_eq!(state.left.center_y(), PLAY_HEIGHT / 2.0);
    }

    #[test]
    fn test_boost_survives_point() {
        let mut state = GameState::new(5, 0);
        grant_boost(&mut state.right, 0);
        award_point(&mut state, Side::Left);
        assert!(state.right.is_boosted());
        assert_eq!(state.right.center_y(), PLAY_HEIGHT / 2.0);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(5, 0);
        state.settings.winning_score = WinningScore::Five;
        for _ in 0..4 {
            assert_eq!(award_point(&mut state, Side::Right), PhaseEvent::PointScored);
        }
        assert_eq!(state.score.winner, None);
        assert_eq!(award_point(&mut state, Side::Right), PhaseEvent::MatchWon);
        assert_eq!(state.score.winner, Some(Side::Right));
        assert_eq!(state.score.score_right, 5);
        assert_eq!(state.score.score_left, 0);
    }

    #[test]
    fn test_start_match_resets() {
        let mut state = GameState::new(5, 0);
        state.score.score_left = 3;
        state.score.score_right = 4;
        state.score.last_hit = Some(Side::Left);
        state.score.winner = Some(Side::Right);
        grant_boost(&mut state.left, 0);
        state.obstacles.clear();

        start_match(&mut state);
        assert_eq!(state.score.score_left, 0);
        assert_eq!(state.score.score_right, 0);
        assert_eq!(state.score.last_hit, None);
        assert_eq!(state.score.winner, None);
        assert_eq!(state.left.height, BASE_PADDLE_HEIGHT);
        assert_eq!(state.left.boost_until_ms, 0);
        assert_eq!(state.left.center_y(), PLAY_HEIGHT / 2.0);
        assert_eq!(state.obstacles.len(), 2 * OBSTACLE_COLUMNS);
    }

    #[test]
    fn test_apply_collisions_boost() {
        let mut state = GameState::new(5, 0);
        state.now_ms = 1234;
        let events = CollisionEvents {
            boost: Some(Side::Left),
            ..Default::default()
        };
        assert_eq!(apply_collisions(&mut state, &events), None);
        assert!(state.left.is_boosted());
        assert!(!state.right.is_boosted());
        assert_eq!(state.left.boost_until_ms, 1234 + BOOST_DURATION_MS);
    }
}
