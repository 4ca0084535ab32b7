//! Probabilistic and score-gated entity spawning
//!
//! All randomness draws from the state-owned seeded RNG, so spawn
//! sequences replay exactly for a given seed.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, FirePattern, GameEvent, GameState, PowerUp, PowerUpKind};
use crate::consts::*;
use crate::hsl_to_rgba;

/// Roll the per-frame enemy spawn. Skipped entirely while the boss holds
/// the field.
pub(crate) fn spawn_enemy(state: &mut GameState) {
    if state.boss.active {
        return;
    }
    if state.rng.random::<f32>() >= state.difficulty.enemy_spawn_rate {
        return;
    }

    let side = ENEMY_MIN_SIZE + state.rng.random::<f32>() * (ENEMY_MAX_SIZE - ENEMY_MIN_SIZE);
    let x = state.rng.random::<f32>() * (PLAYFIELD_WIDTH - side);
    let hue = state.rng.random::<f32>() * 360.0;
    state.enemies.push(Enemy {
        pos: Vec2::new(x, -side),
        size: Vec2::splat(side),
        color: hsl_to_rgba(hue, 0.5, 0.5),
        speed: state.difficulty.enemy_speed,
        health: 1,
    });
}

/// Maybe drop an item centered on a death location. `forced` skips the 20%
/// gate; boss kills always drop.
pub(crate) fn drop_power_up(state: &mut GameState, at: Vec2, forced: bool) {
    if !forced && state.rng.random::<f32>() >= POWER_UP_DROP_CHANCE {
        return;
    }
    let kind = if state.rng.random::<f32>() < POWER_UP_POWER_CHANCE {
        PowerUpKind::Power
    } else {
        PowerUpKind::Life
    };
    state.power_ups.push(PowerUp {
        pos: at - Vec2::splat(POWER_UP_SIZE / 2.0),
        size: Vec2::splat(POWER_UP_SIZE),
        speed: POWER_UP_FALL_SPEED,
        kind,
    });
}

/// Arm the boss once the score crosses the current threshold. Each
/// threshold triggers at most one spawn; defeat clears the flag and raises
/// the threshold, re-arming the gate.
pub(crate) fn check_boss_spawn(state: &mut GameState) {
    if state.boss_spawned || state.score < state.boss_spawn_score {
        return;
    }

    let boss = &mut state.boss;
    boss.active = true;
    boss.health = boss.max_health;
    boss.pos = Vec2::new(PLAYFIELD_WIDTH / 2.0 - boss.size.x / 2.0, -boss.size.y);
    boss.last_shot_ms = None;
    boss.pattern = FirePattern::Spread;
    boss.pattern_ticks = 0;
    state.boss_spawned = true;
    state.events.push(GameEvent::BossSpawned);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_enemy_spawn_while_boss_active() {
        let mut state = GameState::new(3);
        state.boss.active = true;
        state.difficulty.enemy_spawn_rate = 1.0;
        for _ in 0..100 {
            spawn_enemy(&mut state);
        }
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn spawned_enemy_fits_the_playfield() {
        let mut state = GameState::new(3);
        state.difficulty.enemy_spawn_rate = 1.0;
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        assert_eq!(state.enemies.len(), 200);
        for enemy in &state.enemies {
            assert!(enemy.size.x >= ENEMY_MIN_SIZE && enemy.size.x < ENEMY_MAX_SIZE);
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x + enemy.size.x <= PLAYFIELD_WIDTH);
            assert_eq!(enemy.pos.y, -enemy.size.y);
            assert_eq!(enemy.health, 1);
            assert_eq!(enemy.speed, state.difficulty.enemy_speed);
        }
    }

    #[test]
    fn spawn_rate_zero_spawns_nothing() {
        let mut state = GameState::new(3);
        state.difficulty.enemy_spawn_rate = 0.0;
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn forced_drop_always_spawns() {
        let mut state = GameState::new(3);
        for _ in 0..50 {
            drop_power_up(&mut state, Vec2::new(100.0, 100.0), true);
        }
        assert_eq!(state.power_ups.len(), 50);
        // Items spawn centered on the death point
        let item = &state.power_ups[0];
        assert_eq!(item.rect().center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn unforced_drop_rate_is_roughly_one_in_five() {
        let mut state = GameState::new(3);
        for _ in 0..1000 {
            drop_power_up(&mut state, Vec2::new(100.0, 100.0), false);
        }
        let dropped = state.power_ups.len();
        assert!((100..350).contains(&dropped), "dropped {dropped}");
    }

    #[test]
    fn drop_kind_split_favors_power() {
        let mut state = GameState::new(3);
        for _ in 0..1000 {
            drop_power_up(&mut state, Vec2::ZERO, true);
        }
        let power = state
            .power_ups
            .iter()
            .filter(|p| p.kind == PowerUpKind::Power)
            .count();
        assert!((600..800).contains(&power), "power drops {power}");
    }

    #[test]
    fn boss_spawns_once_per_threshold() {
        let mut state = GameState::new(3);
        state.score = BOSS_SPAWN_SCORE;
        check_boss_spawn(&mut state);
        assert!(state.boss.active);
        assert!(state.boss_spawned);
        assert_eq!(state.boss.health, state.boss.max_health);
        assert_eq!(state.boss.pos.y, -state.boss.size.y);
        assert_eq!(state.events, vec![GameEvent::BossSpawned]);

        // Same threshold never double-fires, even after the boss is gone
        state.boss.active = false;
        check_boss_spawn(&mut state);
        assert!(!state.boss.active);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn boss_does_not_spawn_below_threshold() {
        let mut state = GameState::new(3);
        state.score = BOSS_SPAWN_SCORE - 1;
        check_boss_spawn(&mut state);
        assert!(!state.boss.active);
        assert!(!state.boss_spawned);
    }
}
