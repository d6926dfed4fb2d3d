//! Arena Shooter - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, waves)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and input polling live outside this crate and only
//! read the state exposed by `sim::GameState`.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for `Tuning`)
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 540.0;
    /// Target frame rate of the driving loop
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 240.0;
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 520.0;
    pub const BULLET_LIFETIME: f32 = 0.9;
    pub const BULLET_RADIUS: f32 = 4.0;
    /// Maximum live bullets; firing is rejected at the cap
    pub const BULLET_CAP: usize = 6;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 120.0;
    pub const ENEMY_RADIUS: f32 = 16.0;
    pub const ENEMY_HEALTH: u32 = 30;

    /// Seconds between spawns at wave 0
    pub const ENEMY_SPAWN_TIME: f32 = 1.2;
    /// Spawn interval never drops below this
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.35;
    /// Spawn interval reduction per wave
    pub const SPAWN_INTERVAL_PER_WAVE: f32 = 0.08;
    /// Distance outside the screen edge where enemies appear
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Enemies never spawn closer than this to the player
    pub const SPAWN_MIN_DISTANCE: f32 = 160.0;

    /// Scoring
    pub const KILL_SCORE: u64 = 10;
    pub const CONTACT_DAMAGE: u32 = 12;
    pub const SCORE_PER_WAVE: u64 = 100;
}

/// Clamp a scalar into `[minimum, maximum]`
#[inline]
pub fn clamp(value: f32, minimum: f32, maximum: f32) -> f32 {
    value.min(maximum).max(minimum)
}

/// Unit vector along `v`, or `fallback` when `v` has zero length
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    if v.length_squared() > 0.0 {
        v.normalize()
    } else {
        fallback
    }
}
