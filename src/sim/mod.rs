//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame delta passed in, never read from a clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wave;

pub use autopilot::autopilot_input;
pub use collision::{CollisionResult, circles_overlap, resolve_collisions};
pub use spawn::{Edge, spawn_enemy, spawn_position};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
pub use tick::{MoveKeys, TickInput, tick};
pub use wave::{advance_wave, check_game_over, restart, update_spawn_timer};
