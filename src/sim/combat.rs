//! Collision-driven combat resolution
//!
//! Each pass advances one entity pool and resolves its collisions.
//! Removal during iteration uses index loops with `swap_remove` rather
//! than splicing under a reverse scan.

use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Advance player bullets and resolve hits on the boss and enemies. A
/// bullet is consumed by its first hit and resolves at most one enemy per
/// frame.
pub(crate) fn update_player_bullets(state: &mut GameState) {
    let mut i = 0;
    while i < state.player.bullets.len() {
        state.player.bullets[i].pos.y -= state.player.bullets[i].speed;
        let bullet = state.player.bullets[i];

        // Fully above the top edge
        if bullet.pos.y + bullet.size.y < 0.0 {
            state.player.bullets.swap_remove(i);
            continue;
        }

        if state.boss.active && bullet.rect().overlaps(&state.boss.rect()) {
            state.player.bullets.swap_remove(i);
            hit_boss(state, bullet.damage);
            continue;
        }

        if let Some(j) = state
            .enemies
            .iter()
            .position(|e| bullet.rect().overlaps(&e.rect()))
        {
            state.enemies[j].health -= bullet.damage;
            if state.enemies[j].health <= 0 {
                let at = state.enemies[j].rect().center();
                state.events.push(GameEvent::EnemyDestroyed { at });
                spawn::drop_power_up(state, at, false);
                state.score += ENEMY_SCORE;
                state.enemies.swap_remove(j);
            }
            state.player.bullets.swap_remove(i);
            continue;
        }

        i += 1;
    }
}

/// Apply bullet damage to the boss. A kill pays out score, forces an item
/// drop at the boss center, and re-arms the spawn gate at the next
/// threshold.
fn hit_boss(state: &mut GameState, damage: i32) {
    state.boss.health -= damage;
    if state.boss.health > 0 {
        return;
    }

    state.boss.active = false;
    let at = state.boss.rect().center();
    state.boss_defeated = true;
    state.score += BOSS_SCORE;
    state.events.push(GameEvent::BossDefeated { at });
    spawn::drop_power_up(state, at, true);
    state.boss_spawn_score += BOSS_SPAWN_SCORE_STEP;
    state.boss_spawned = false;
}

/// Advance enemies. Slipping past the bottom edge costs a life; ramming
/// the player costs a life and the enemy.
pub(crate) fn update_enemies(state: &mut GameState) {
    let mut i = 0;
    while i < state.enemies.len() {
        state.enemies[i].pos.y += state.enemies[i].speed;

        if state.enemies[i].pos.y > PLAYFIELD_HEIGHT {
            state.enemies.swap_remove(i);
            state.events.push(GameEvent::EnemyEscaped);
            lose_life(state);
            if state.game_over() {
                return;
            }
            continue;
        }

        if state.enemies[i].rect().overlaps(&state.player.rect()) {
            state.enemies.swap_remove(i);
            state.events.push(GameEvent::PlayerHit);
            lose_life(state);
            if state.game_over() {
                return;
            }
            continue;
        }

        i += 1;
    }
}

/// Advance falling items and apply pickups.
pub(crate) fn update_power_ups(state: &mut GameState) {
    let mut i = 0;
    while i < state.power_ups.len() {
        state.power_ups[i].pos.y += state.power_ups[i].speed;

        if state.power_ups[i].pos.y > PLAYFIELD_HEIGHT {
            state.power_ups.swap_remove(i);
            continue;
        }

        if state.power_ups[i].rect().overlaps(&state.player.rect()) {
            let kind = state.power_ups[i].kind;
            state.power_ups.swap_remove(i);
            collect_power_up(state, kind);
            continue;
        }

        i += 1;
    }
}

fn collect_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Power => {
            state.player.power_level = (state.player.power_level + 1).min(POWER_LEVEL_MAX);
            state.player.power_timer_ms = POWER_UP_DURATION_MS;
        }
        PowerUpKind::Life => state.lives += 1,
    }
    state.events.push(GameEvent::PowerUpCollected { kind });
}

/// Advance boss bullets. These stay in flight even while the boss is
/// inactive, so a dying boss's last volley still lands.
pub(crate) fn update_boss_bullets(state: &mut GameState) {
    let mut i = 0;
    while i < state.boss.bullets.len() {
        let bullet = &mut state.boss.bullets[i];
        bullet.pos += bullet.vel;
        let rect = bullet.rect();

        let off_field = rect.pos.y > PLAYFIELD_HEIGHT
            || rect.pos.y + rect.size.y < 0.0
            || rect.pos.x + rect.size.x < 0.0
            || rect.pos.x > PLAYFIELD_WIDTH;
        if off_field {
            state.boss.bullets.swap_remove(i);
            continue;
        }

        if rect.overlaps(&state.player.rect()) {
            state.boss.bullets.swap_remove(i);
            state.events.push(GameEvent::PlayerHit);
            lose_life(state);
            if state.game_over() {
                return;
            }
            continue;
        }

        i += 1;
    }
}

/// Decrement lives; the transition to zero flips the phase exactly once
/// and surfaces the final score.
fn lose_life(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    }
}
