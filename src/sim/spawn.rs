//! Enemy spawning at the screen edges

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState};
use crate::tuning::Tuning;

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Position on `edge`, `margin` units outside the play field, at fraction `t`
/// (0..1) along the edge's free axis
pub fn edge_position(edge: Edge, t: f32, tuning: &Tuning) -> Vec2 {
    let (w, h, m) = (tuning.screen_width, tuning.screen_height, tuning.spawn_margin);
    match edge {
        Edge::Top => Vec2::new(t * w, -m),
        Edge::Bottom => Vec2::new(t * w, h + m),
        Edge::Left => Vec2::new(-m, t * h),
        Edge::Right => Vec2::new(w + m, t * h),
    }
}

/// Push `pos` out along the player->pos line so it sits at least
/// `min_distance` from the player
pub fn enforce_min_distance(pos: Vec2, player_pos: Vec2, min_distance: f32) -> Vec2 {
    let offset = pos - player_pos;
    if offset.length() >= min_distance {
        return pos;
    }
    player_pos + crate::direction_or(offset, Vec2::X) * min_distance
}

/// Pick a spawn position for a new enemy
pub fn spawn_position<R: Rng>(rng: &mut R, player_pos: Vec2, tuning: &Tuning) -> Vec2 {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let t = rng.random_range(0.0..=1.0);
    let pos = edge_position(edge, t, tuning);
    enforce_min_distance(pos, player_pos, tuning.spawn_min_distance)
}

/// Create an enemy near a screen edge, away from the player
pub fn spawn_enemy(state: &mut GameState) -> u32 {
    let pos = spawn_position(&mut state.rng, state.player.pos, &state.tuning);
    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        pos,
        health: state.tuning.enemy_health,
    });
    state.events.push(GameEvent::EnemySpawned { id, pos });
    log::debug!("Spawned enemy {} at ({:.0}, {:.0})", id, pos.x, pos.y);
    id
}
