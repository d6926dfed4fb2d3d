//! Game state and core simulation types
//!
//! Everything the rendering layer reads each frame lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, world frozen until restart
    GameOver,
}

/// Things that happened during the last tick (for rendering/audio hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { id: u32, pos: Vec2 },
    BulletFired { id: u32, dir: Vec2 },
    EnemyKilled { id: u32, pos: Vec2 },
    PlayerHit { damage: u32, health: u32 },
    WaveAdvanced { wave: u32 },
    GameOver { score: u64 },
    Restarted,
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Derived from movement input every tick
    pub vel: Vec2,
    pub health: u32,
    /// Last nonzero aim direction (unit length)
    pub facing: Vec2,
}

impl Player {
    /// Fresh player at the center of the play field
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.screen_width / 2.0, tuning.screen_height / 2.0),
            vel: Vec2::ZERO,
            health: tuning.player_max_health,
            facing: Vec2::X,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply contact damage, saturating at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// A chasing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Carried for display only; any hit destroys the enemy
    pub health: u32,
}

/// A projectile fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left before expiry
    pub ttl: f32,
}

impl Bullet {
    pub fn is_expired(&self) -> bool {
        self.ttl <= 0.0
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Balance constants for this run
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Player avatar
    pub player: Player,
    /// Live enemies (unordered)
    pub enemies: Vec<Enemy>,
    /// Live bullets (unordered)
    pub bullets: Vec<Bullet>,
    /// Score for this run
    pub score: u64,
    /// Best score seen in this process (not persisted)
    pub best_score: u64,
    /// Current wave (1-based, only ratchets upward)
    pub wave: u32,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    /// Primary action latch (set on press, cleared on release)
    pub shooting: bool,
    /// Simulated ticks spent in `Playing`
    pub time_ticks: u64,
    /// Events emitted by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            best_score: 0,
            wave: 1,
            spawn_timer: 0.0,
            shooting: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player health as a fraction of max (for the HUD bar)
    pub fn health_ratio(&self) -> f32 {
        self.player.health as f32 / self.tuning.player_max_health.max(1) as f32
    }

    /// Reset the run: fresh player, empty world, score and wave back to start.
    /// The RNG keeps advancing so consecutive runs differ.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.enemies.clear();
        self.bullets.clear();
        self.score = 0;
        self.wave = 1;
        self.spawn_timer = 0.0;
        self.shooting = false;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Export a JSON snapshot of the current frame
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
