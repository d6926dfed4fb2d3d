//! Demo mode input
//!
//! Produces the input a hands-off player would give: stand still, aim at the
//! closest enemy and keep the trigger down. Used for headless runs.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Build the next tick's input from the current state
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            restart: true,
            fire_released: state.shooting,
            ..Default::default()
        };
    }

    let nearest = state.enemies.iter().min_by(|a, b| {
        let da = a.pos.distance_squared(state.player.pos);
        let db = b.pos.distance_squared(state.player.pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    match nearest {
        Some(enemy) => TickInput {
            aim: enemy.pos,
            fire_pressed: !state.shooting,
            ..Default::default()
        },
        None => TickInput {
            aim: state.player.pos + state.player.facing,
            fire_released: state.shooting,
            ..Default::default()
        },
    }
}
