//! Fixed-rate simulation tick
//!
//! One call to [`tick`] is one iteration of the game loop: route commands,
//! expire boosts, then run whatever the current phase does. Timers compare
//! the clock sampled in [`TickInput::now_ms`] against the phase start time.

use serde::{Deserialize, Serialize};

use super::collision::advance;
use super::phase::{GamePhase, PhaseEvent};
use super::round::{apply_collisions, expire_boosts, start_match, start_round};
use super::scene::Scene;
use super::state::GameState;
use crate::consts::*;
use crate::settings::WinningScore;

/// Discrete commands mapped from raw input by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Help,
    Settings,
    /// Leave the settings or help screen
    Back,
    SetWinningScore(WinningScore),
    /// Escape during a match
    Cancel,
    /// Exit button (any phase that shows it)
    ExitToMenu,
    /// Game over screen button
    BackToMenu,
}

impl Command {
    fn phase_event(&self) -> Option<PhaseEvent> {
        match self {
            Command::Start => Some(PhaseEvent::Start),
            Command::Help => Some(PhaseEvent::Help),
            Command::Settings => Some(PhaseEvent::Settings),
            Command::Back => Some(PhaseEvent::Back),
            Command::Cancel => Some(PhaseEvent::Cancel),
            Command::ExitToMenu => Some(PhaseEvent::ExitToMenu),
            Command::BackToMenu => Some(PhaseEvent::BackToMenu),
            Command::SetWinningScore(_) => None,
        }
    }
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Monotonic clock, milliseconds
    pub now_ms: u64,
    /// Signed paddle speeds (negative = up). Only used while playing.
    pub left_speed: f32,
    pub right_speed: f32,
    /// Some key or button was pressed (skips the intro, closes help)
    pub any_input: bool,
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Default::default()
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Never let the clock run backwards
    state.now_ms = state.now_ms.max(input.now_ms);

    if input.any_input {
        state.transition(PhaseEvent::AnyInput);
    }
    for command in &input.commands {
        handle_command(state, *command);
    }

    expire_boosts(state);

    state.left.speed = 0.0;
    state.right.speed = 0.0;

    let elapsed = state.phase_elapsed_ms();
    match state.phase {
        GamePhase::Intro => {
            if elapsed >= INTRO_DURATION_MS {
                state.transition(PhaseEvent::IntroElapsed);
            }
        }

        GamePhase::Countdown => {
            if elapsed >= COUNTDOWN_DURATION_MS && state.transition(PhaseEvent::CountdownElapsed) {
                start_round(state);
            }
        }

        GamePhase::Playing => {
            state.left.move_by(input.left_speed);
            state.right.move_by(input.right_speed);

            let events = advance(
                &mut state.ball,
                &state.left,
                &state.right,
                &mut state.obstacles,
                &mut state.score.last_hit,
                &mut state.rng,
            );

            if let Some(event) = apply_collisions(state, &events) {
                state.transition(event);
            }
        }

        GamePhase::Grace => {
            if elapsed >= GRACE_DURATION_MS && state.transition(PhaseEvent::GraceElapsed) {
                start_round(state);
            }
        }

        GamePhase::Menu | GamePhase::Help | GamePhase::Settings | GamePhase::GameOver => {}
    }
}

/// Tick and return the scene to draw
pub fn tick_scene(state: &mut GameState, input: &TickInput) -> Scene {
    tick(state, input);
    Scene::capture(state)
}

fn handle_command(state: &mut GameState, command: Command) {
    match command {
        Command::SetWinningScore(score) => {
            if state.phase == GamePhase::Settings {
                state.settings.winning_score = score;
                log::info!("Winning score set to {}", score.value());
            } else {
                // Still a key press: skips the intro, closes help
                state.transition(PhaseEvent::AnyInput);
            }
        }
        Command::Start => {
            if state.transition(PhaseEvent::Start) && state.phase == GamePhase::Countdown {
                start_match(state);
            }
        }
        _ => {
            if let Some(event) = command.phase_event() {
                state.transition(event);
            }
        }
    }
}
