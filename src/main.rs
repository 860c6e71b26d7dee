//! BreakPong entry point
//!
//! Native build runs the simulation headless: two tracking paddles play a
//! match and the final scene is printed as JSON. Windowing, text and audio
//! belong to the platform layer.

#[cfg(not(target_arch = "wasm32"))]
use breakpong::sim::{Command, GamePhase, GameState, Paddle, Scene, TickInput, tick_scene};

/// Logical milliseconds per tick (~60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const TICK_MS: u64 = 16;

/// Give up after ten minutes of game time
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB8EA_C0DE);
    log::info!("BreakPong (headless) starting with seed {}", seed);

    let mut state = GameState::new(seed, 0);
    let mut scene = Scene::capture(&state);
    let mut now = 0;
    let mut ticks = 0;

    while ticks < MAX_TICKS && state.phase != GamePhase::GameOver {
        now += TICK_MS;
        ticks += 1;

        let mut input = TickInput::at(now);
        match state.phase {
            GamePhase::Intro => input.any_input = true,
            GamePhase::Menu => input.commands.push(Command::Start),
            GamePhase::Playing => {
                input.left_speed = track(&state.left, &state);
                input.right_speed = track(&state.right, &state);
            }
            _ => {}
        }

        scene = tick_scene(&mut state, &input);
    }

    match state.score.winner {
        Some(side) => log::info!(
            "{} player wins {} : {} after {} ticks (seed {})",
            side.as_str(),
            scene.score_left,
            scene.score_right,
            ticks,
            state.seed
        ),
        None => log::warn!("No winner after {} ticks (seed {})", ticks, state.seed),
    }

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode scene: {}", e),
    }
}

/// Follow the ball while it approaches, drift back to center otherwise
#[cfg(not(target_arch = "wasm32"))]
fn track(paddle: &Paddle, state: &GameState) -> f32 {
    use breakpong::consts::{PADDLE_SPEED, PLAY_HEIGHT};
    use breakpong::sim::Side;

    let approaching = match paddle.side {
        Side::Left => state.ball.vel.x < 0.0,
        Side::Right => state.ball.vel.x > 0.0,
    };
    let target = if approaching {
        state.ball.pos.y
    } else {
        PLAY_HEIGHT / 2.0
    };

    let delta = target - paddle.center_y();
    if delta.abs() < PADDLE_SPEED {
        0.0
    } else {
        delta.signum() * PADDLE_SPEED
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser shell drives `breakpong::sim::tick` directly
}
