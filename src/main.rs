//! Arena Shooter entry point
//!
//! The native build runs the simulation headless in demo mode: the autopilot
//! plays until the run ends or the demo time limit is reached, then the
//! process quits cleanly.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use arena_shooter::Tuning;
use arena_shooter::sim::{GameState, autopilot_input, tick};

/// Simulated seconds before the demo quits on its own
const DEMO_SECONDS: u64 = 180;

fn main() {
    env_logger::init();
    log::info!("Arena Shooter (headless demo) starting...");

    let tuning_path = std::env::var_os("ARENA_TUNING").map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let dt = tuning.frame_dt();
    let max_ticks = DEMO_SECONDS * tuning.fps as u64;
    let mut state = GameState::with_tuning(seed, tuning);

    let mut frames = 0;
    while frames < max_ticks && !state.is_game_over() {
        let input = autopilot_input(&state);
        tick(&mut state, &input, dt);
        frames += 1;
    }

    log::info!(
        "Quit after {} frames: score {}, wave {}, health {}, enemies {}, bullets {}",
        frames,
        state.score,
        state.wave,
        state.player.health,
        state.enemies.len(),
        state.bullets.len()
    );
    println!(
        "Final score: {} (wave {}){}",
        state.score,
        state.wave,
        if state.is_game_over() { " - game over" } else { "" }
    );
}
