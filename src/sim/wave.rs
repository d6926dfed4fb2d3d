//! Wave escalation, spawn cadence and the terminal condition

use super::spawn::spawn_enemy;
use super::state::{GameEvent, GamePhase, GameState};

/// Count the spawn timer down and spawn one enemy when it runs out.
///
/// The reload interval uses the wave in effect at the start of the tick.
/// Returns true if an enemy was spawned.
pub fn update_spawn_timer(state: &mut GameState, dt: f32) -> bool {
    state.spawn_timer -= dt;
    let interval = state.tuning.spawn_interval(state.wave);
    if state.spawn_timer <= 0.0 {
        spawn_enemy(state);
        state.spawn_timer = interval;
        true
    } else {
        false
    }
}

/// Ratchet the wave up by at most one step when the score implies a higher
/// wave. The wave never goes down.
pub fn advance_wave(state: &mut GameState) -> bool {
    if state.tuning.wave_for_score(state.score) > state.wave {
        state.wave += 1;
        state.events.push(GameEvent::WaveAdvanced { wave: state.wave });
        log::info!(
            "Wave {} (score {}, spawn interval {:.2}s)",
            state.wave,
            state.score,
            state.tuning.spawn_interval(state.wave)
        );
        true
    } else {
        false
    }
}

/// Enter `GameOver` once the player's health is gone
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || state.player.is_alive() {
        return false;
    }
    state.player.health = 0;
    state.phase = GamePhase::GameOver;
    state.best_score = state.best_score.max(state.score);
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!(
        "Game over: score {}, wave {}, best {}",
        state.score,
        state.wave,
        state.best_score
    );
    true
}

/// Leave `GameOver` and start a fresh run. Ignored while playing.
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    state.reset();
    state.events.push(GameEvent::Restarted);
    log::info!("Restarted (seed {})", state.seed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_spawns_immediately() {
        let mut state = GameState::new(1);
        assert!(update_spawn_timer(&mut state, 1.0 / 60.0));
        assert_eq!(state.enemies.len(), 1);
        assert!((state.spawn_timer - 1.12).abs() < 1e-5);

        // Not again until the interval elapses
        assert!(!update_spawn_timer(&mut state, 0.5));
        assert_eq!(state.enemies.len(), 1);
        assert!(update_spawn_timer(&mut state, 0.7));
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_wave_ratchets_one_step() {
        let mut state = GameState::new(1);
        state.score = 100;
        assert!(advance_wave(&mut state));
        assert_eq!(state.wave, 2);
        assert!((state.tuning.spawn_interval(state.wave) - 1.04).abs() < 1e-5);
        assert!(!advance_wave(&mut state));

        // A big jump only climbs one wave per call
        state.score = 450;
        assert!(advance_wave(&mut state));
        assert_eq!(state.wave, 3);
    }

    #[test]
    fn test_wave_never_decreases() {
        let mut state = GameState::new(1);
        state.wave = 4;
        state.score = 0;
        assert!(!advance_wave(&mut state));
        assert_eq!(state.wave, 4);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut state = GameState::new(1);
        assert!(!restart(&mut state));

        state.player.health = 0;
        state.score = 70;
        assert!(check_game_over(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 70);
        assert!(!check_game_over(&mut state));

        assert!(restart(&mut state));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.score, 0);
        assert_eq!(state.events.last(), Some(&GameEvent::Restarted));
    }
}
