//! Read-only view of the game for the rendering layer

use serde::Serialize;

use super::phase::GamePhase;
use super::rect::Rect;
use super::state::{GameState, Obstacle, Side};
use crate::consts::*;

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub phase: GamePhase,
    pub ball: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub obstacles: Vec<Obstacle>,
    pub score_left: u32,
    pub score_right: u32,
    pub winning_score: u32,
    /// Only set on the game over screen
    pub winner: Option<Side>,
    /// "3", "2", "1", "GO!" while counting down
    pub countdown: Option<&'static str>,
    /// Title opacity during the intro
    pub intro_alpha: Option<u8>,
    pub exit_button: bool,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let elapsed = state.phase_elapsed_ms();
        Self {
            phase: state.phase,
            ball: state.ball.rect(),
            left_paddle: state.left.rect(),
            right_paddle: state.right.rect(),
            obstacles: state.obstacles.clone(),
            score_left: state.score.score_left,
            score_right: state.score.score_right,
            winning_score: state.settings.winning_score.value(),
            winner: match state.phase {
                GamePhase::GameOver => state.score.winner,
                _ => None,
            },
            countdown: match state.phase {
                GamePhase::Countdown => countdown_label(elapsed),
                _ => None,
            },
            intro_alpha: match state.phase {
                GamePhase::Intro => Some(intro_alpha(elapsed)),
                _ => None,
            },
            exit_button: state.phase.has_exit_button(),
        }
    }
}

/// Countdown text for the time spent in the countdown phase
pub fn countdown_label(elapsed_ms: u64) -> Option<&'static str> {
    match elapsed_ms {
        0..1000 => Some("3"),
        1000..2000 => Some("2"),
        2000..3000 => Some("1"),
        _ if elapsed_ms < COUNTDOWN_DURATION_MS => Some("GO!"),
        _ => None,
    }
}

/// Title fade: in over 2s, hold 1s, out over 1s
pub fn intro_alpha(elapsed_ms: u64) -> u8 {
    let alpha = match elapsed_ms {
        0..2000 => elapsed_ms as f32 / 2000.0 * 255.0,
        2000..3000 => 255.0,
        _ if elapsed_ms < INTRO_DURATION_MS => {
            255.0 - (elapsed_ms - 3000) as f32 / 1000.0 * 255.0
        }
        _ => 0.0,
    };
    alpha as u8
}
