//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one frame delta.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
use super::wave::{advance_wave, check_game_over, restart, update_spawn_timer};
use crate::direction_or;
use crate::tuning::Tuning;

/// Movement keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Unit movement direction (zero when nothing or only opposing keys held)
    pub fn vector(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MoveKeys,
    /// Pointer position in world coordinates
    pub aim: Vec2,
    /// Primary button went down this frame
    pub fire_pressed: bool,
    /// Primary button went up this frame
    pub fire_released: bool,
    /// Restart request (only honoured in `GameOver`)
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Button edges latch even while the world is frozen
    if input.fire_pressed {
        state.shooting = true;
    }
    if input.fire_released {
        state.shooting = false;
    }
    if input.restart {
        restart(state);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    update_player(&mut state.player, input.movement.vector(), &state.tuning, dt);
    update_facing(&mut state.player, input.aim);

    update_spawn_timer(state, dt);

    if state.shooting && state.bullets.len() < state.tuning.bullet_cap {
        fire_bullet(state, input.aim);
    }

    update_bullets(&mut state.bullets, dt);
    state.bullets.retain(|b| !b.is_expired());
    update_enemies(&mut state.enemies, state.player.pos, state.tuning.enemy_speed, dt);

    let result = resolve_collisions(
        &mut state.bullets,
        &mut state.enemies,
        &mut state.player,
        &state.tuning,
        &mut state.events,
    );
    state.score += result.score_delta;

    advance_wave(state);
    check_game_over(state);
}

/// Move the player from held keys and keep them inside the play field
pub fn update_player(player: &mut Player, movement: Vec2, tuning: &Tuning, dt: f32) {
    player.vel = movement * tuning.player_speed;
    player.pos += player.vel * dt;
    let r = tuning.player_radius;
    player.pos.x = crate::clamp(player.pos.x, r, tuning.screen_width - r);
    player.pos.y = crate::clamp(player.pos.y, r, tuning.screen_height - r);
}

/// Face the pointer; keep the old facing if the pointer sits on the player
pub fn update_facing(player: &mut Player, aim: Vec2) {
    player.facing = direction_or(aim - player.pos, player.facing);
}

/// Build a bullet leaving the player toward `target`
pub fn make_bullet(id: u32, player: &mut Player, target: Vec2, tuning: &Tuning) -> Bullet {
    let dir = direction_or(target - player.pos, player.facing);
    player.facing = dir;
    Bullet {
        id,
        pos: player.pos,
        vel: dir * tuning.bullet_speed,
        ttl: tuning.bullet_lifetime,
    }
}

/// Fire one bullet toward `target`. Cap checking is the caller's job.
pub fn fire_bullet(state: &mut GameState, target: Vec2) -> u32 {
    let id = state.next_entity_id();
    let bullet = make_bullet(id, &mut state.player, target, &state.tuning);
    let dir = state.player.facing;
    state.bullets.push(bullet);
    state.events.push(GameEvent::BulletFired { id, dir });
    id
}

/// Advance bullets and burn down their lifetime. Expiry is filtered separately.
pub fn update_bullets(bullets: &mut [Bullet], dt: f32) {
    for bullet in bullets.iter_mut() {
        bullet.pos += bullet.vel * dt;
        bullet.ttl -= dt;
    }
}

/// Move every enemy straight at the player
pub fn update_enemies(enemies: &mut [Enemy], target: Vec2, speed: f32, dt: f32) {
    for enemy in enemies.iter_mut() {
        // Coincident enemies stay put this tick
        let dir = direction_or(target - enemy.pos, Vec2::ZERO);
        enemy.pos += dir * speed * dt;
    }
}
