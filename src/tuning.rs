//! Data-driven game balance
//!
//! Every gameplay constant lives in `Tuning` so a run can be rebalanced from a
//! JSON file without recompiling. Missing fields fall back to `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate of the driving loop (headless runs use `1 / fps` as dt)
    pub fps: u32,

    // === Player ===
    pub player_speed: f32,
    pub player_radius: f32,
    pub player_max_health: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Seconds before a bullet expires
    pub bullet_lifetime: f32,
    pub bullet_radius: f32,
    pub bullet_cap: usize,

    // === Enemies ===
    pub enemy_speed: f32,
    pub enemy_radius: f32,
    /// Stored on each enemy; any hit is lethal regardless
    pub enemy_health: u32,

    // === Spawning ===
    pub spawn_interval_base: f32,
    pub spawn_interval_floor: f32,
    pub spawn_interval_per_wave: f32,
    pub spawn_margin: f32,
    pub spawn_min_distance: f32,

    // === Scoring ===
    pub kill_score: u64,
    pub contact_damage: u32,
    pub score_per_wave: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            player_speed: PLAYER_SPEED,
            player_radius: PLAYER_RADIUS,
            player_max_health: PLAYER_MAX_HEALTH,

            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_radius: BULLET_RADIUS,
            bullet_cap: BULLET_CAP,

            enemy_speed: ENEMY_SPEED,
            enemy_radius: ENEMY_RADIUS,
            enemy_health: ENEMY_HEALTH,

            spawn_interval_base: ENEMY_SPAWN_TIME,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            spawn_interval_per_wave: SPAWN_INTERVAL_PER_WAVE,
            spawn_margin: SPAWN_MARGIN,
            spawn_min_distance: SPAWN_MIN_DISTANCE,

            kill_score: KILL_SCORE,
            contact_damage: CONTACT_DAMAGE,
            score_per_wave: SCORE_PER_WAVE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a tuning file
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        Ok(tuning)
    }

    /// Load tuning from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Failed to load tuning from {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Fixed frame delta for headless runs
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Seconds between enemy spawns at the given wave
    pub fn spawn_interval(&self, wave: u32) -> f32 {
        (self.spawn_interval_base - wave as f32 * self.spawn_interval_per_wave)
            .max(self.spawn_interval_floor)
    }

    /// Wave implied by a score (1-based)
    pub fn wave_for_score(&self, score: u64) -> u32 {
        (score / self.score_per_wave.max(1)) as u32 + 1
    }
}
