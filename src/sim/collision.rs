//! Collision detection and scoring
//!
//! Everything here is circle-vs-circle. Removal is mark-and-compact: hits are
//! flagged during the scan and the collections are filtered once afterwards,
//! so a bullet or enemy can never be consumed twice in the same pass.

use glam::Vec2;

use super::state::{Bullet, Enemy, GameEvent, Player};
use crate::tuning::Tuning;

/// Result of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// Score earned this pass
    pub score_delta: u64,
    /// Enemies destroyed by bullets
    pub kills: u32,
    /// Enemies that reached the player
    pub contacts: u32,
    /// Total health removed from the player
    pub damage: u32,
}

/// Whether two circles touch (edges exactly meeting counts as a hit)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) <= ra + rb
}

/// Resolve bullet-enemy and enemy-player contacts for this tick.
///
/// Bullets are scanned in order; each takes the first live enemy it overlaps
/// (by enemy order, not distance) and stops. Remaining enemies touching the
/// player are removed and each deals `contact_damage`.
pub fn resolve_collisions(
    bullets: &mut Vec<Bullet>,
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> CollisionResult {
    let mut result = CollisionResult::default();
    let mut enemy_dead = vec![false; enemies.len()];
    let mut bullet_spent = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = enemies.iter().enumerate().find(|(ei, enemy)| {
            !enemy_dead[*ei]
                && circles_overlap(bullet.pos, tuning.bullet_radius, enemy.pos, tuning.enemy_radius)
        });
        if let Some((ei, enemy)) = target {
            enemy_dead[ei] = true;
            bullet_spent[bi] = true;
            result.kills += 1;
            result.score_delta += tuning.kill_score;
            events.push(GameEvent::EnemyKilled {
                id: enemy.id,
                pos: enemy.pos,
            });
        }
    }

    for (ei, enemy) in enemies.iter().enumerate() {
        if enemy_dead[ei] {
            continue;
        }
        if circles_overlap(enemy.pos, tuning.enemy_radius, player.pos, tuning.player_radius) {
            enemy_dead[ei] = true;
            player.take_damage(tuning.contact_damage);
            result.contacts += 1;
            result.damage += tuning.contact_damage;
            events.push(GameEvent::PlayerHit {
                damage: tuning.contact_damage,
                health: player.health,
            });
        }
    }

    compact(bullets, &bullet_spent);
    compact(enemies, &enemy_dead);

    result
}

/// Drop every element whose flag is set, keeping order
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut flags = removed.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(&Tuning::default());
        player.pos = Vec2::new(x, y);
        player
    }

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            pos: Vec2::new(x, y),
            health: 30,
        }
    }

    fn bullet(id: u32, x: f32, y: f32) -> Bullet {
        Bullet {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::new(520.0, 0.0),
            ttl: 0.5,
        }
    }

    #[test]
    fn test_circles_overlap_boundary() {
        assert!(circles_overlap(Vec2::ZERO, 16.0, Vec2::new(20.0, 0.0), 4.0));
        assert!(!circles_overlap(Vec2::ZERO, 16.0, Vec2::new(20.1, 0.0), 4.0));
    }

    #[test]
    fn test_bullet_kills_enemy() {
        let tuning = Tuning::default();
        let mut player = player_at(800.0, 400.0);
        let mut bullets = vec![bullet(1, 100.0, 100.0)];
        let mut enemies = vec![enemy(2, 110.0, 100.0), enemy(3, 300.0, 300.0)];
        let mut events = Vec::new();

        let result =
            resolve_collisions(&mut bullets, &mut enemies, &mut player, &tuning, &mut events);
        assert_eq!(result.score_delta, 10);
        assert_eq!(result.kills, 1);
        assert!(bullets.is_empty());
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 3);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_bullet_consumed_once_first_match_wins() {
        let tuning = Tuning::default();
        let mut player = player_at(800.0, 400.0);
        // Both enemies overlap the bullet; enemy 3 is closer but listed second
        let mut bullets = vec![bullet(1, 100.0, 100.0)];
        let mut enemies = vec![enemy(2, 115.0, 100.0), enemy(3, 101.0, 100.0)];
        let mut events = Vec::new();

        let result =
            resolve_collisions(&mut bullets, &mut enemies, &mut player, &tuning, &mut events);
        assert_eq!(result.kills, 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 3);
    }

    #[test]
    fn test_two_bullets_same_enemy() {
        let tuning = Tuning::default();
        let mut player = player_at(800.0, 400.0);
        let mut bullets = vec![bullet(1, 100.0, 100.0), bullet(2, 102.0, 100.0)];
        let mut enemies = vec![enemy(3, 105.0, 100.0)];
        let mut events = Vec::new();

        let result =
            resolve_collisions(&mut bullets, &mut enemies, &mut player, &tuning, &mut events);
        assert_eq!(result.kills, 1);
        assert!(enemies.is_empty());
        // Second bullet found nothing left to hit and survives
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].id, 2);
    }

    #[test]
    fn test_enemy_contact_damages_player() {
        let tuning = Tuning::default();
        let mut player = player_at(480.0, 270.0);
        // Distance 10, radii sum 34
        let mut enemies = vec![enemy(1, 490.0, 270.0)];
        let mut bullets = Vec::new();
        let mut events = Vec::new();

        let result =
            resolve_collisions(&mut bullets, &mut enemies, &mut player, &tuning, &mut events);
        assert!(enemies.is_empty());
        assert_eq!(player.health, 88);
        assert_eq!(result.contacts, 1);
        assert_eq!(result.damage, 12);
        assert_eq!(result.score_delta, 0);
        assert_eq!(events, vec![GameEvent::PlayerHit { damage: 12, health: 88 }]);
    }

    #[test]
    fn test_multiple_contacts_stack() {
        let tuning = Tuning::default();
        let mut player = player_at(480.0, 270.0);
        let mut enemies = vec![
            enemy(1, 490.0, 270.0),
            enemy(2, 470.0, 270.0),
            enemy(3, 480.0, 290.0),
        ];
        let mut events = Vec::new();

        resolve_collisions(&mut Vec::new(), &mut enemies, &mut player, &tuning, &mut events);
        assert_eq!(player.health, 100 - 36);
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_shot_enemy_does_not_hurt_player() {
        let tuning = Tuning::default();
        let mut player = player_at(480.0, 270.0);
        let mut bullets = vec![bullet(1, 490.0, 270.0)];
        let mut enemies = vec![enemy(2, 495.0, 270.0)];
        let mut events = Vec::new();

        let result =
            resolve_collisions(&mut bullets, &mut enemies, &mut player, &tuning, &mut events);
        assert_eq!(result.kills, 1);
        assert_eq!(result.contacts, 0);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_compact_preserves_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        compact(&mut items, &[false, true, false, true, false]);
        assert_eq!(items, vec![1, 3, 5]);
    }
}
