//! Boss movement and bullet patterns
//!
//! A two-state machine: descend onto the field, then strafe on a sine of
//! elapsed time while cycling through three bullet patterns.

use std::f32::consts::TAU;

use glam::Vec2;

use super::state::{BossBullet, FirePattern, GameState};
use crate::consts::*;

/// Advance the boss one frame. No-op while inactive.
pub(crate) fn update(state: &mut GameState) {
    if !state.boss.active {
        return;
    }

    // Entering: straight descent, no firing until engaged
    if state.boss.pos.y < BOSS_ENGAGE_Y {
        state.boss.pos.y += BOSS_ENTER_SPEED;
        return;
    }

    let sway = ((state.time_ms / 1000.0) as f32).sin() * state.boss.speed;
    state.boss.pos.x = (state.boss.pos.x + sway).clamp(0.0, PLAYFIELD_WIDTH - state.boss.size.x);

    fire_check(state);
}

/// One firing check: emit the current pattern if the cooldown allows, and
/// advance the pattern cycle either way.
fn fire_check(state: &mut GameState) {
    let now = state.time_ms;
    let can_fire = match state.boss.last_shot_ms {
        Some(last) => now - last > state.boss.shoot_delay_ms,
        None => true,
    };
    if can_fire {
        emit_pattern(state);
        state.boss.last_shot_ms = Some(now);
    }

    state.boss.pattern_ticks += 1;
    if state.boss.pattern_ticks >= BOSS_PATTERN_TICKS {
        state.boss.pattern = state.boss.pattern.next();
        state.boss.pattern_ticks = 0;
    }
}

fn emit_pattern(state: &mut GameState) {
    let boss = &mut state.boss;
    let center = boss.rect().center();
    let muzzle_y = boss.pos.y + boss.size.y;

    match boss.pattern {
        FirePattern::Spread => {
            let side = 10.0;
            for i in -1i32..=1 {
                boss.bullets.push(BossBullet {
                    pos: Vec2::new(center.x + i as f32 * 30.0 - side / 2.0, muzzle_y),
                    size: Vec2::splat(side),
                    color: BOSS_SPREAD_COLOR,
                    vel: Vec2::new(i as f32, 5.0),
                });
            }
        }
        FirePattern::Fan => {
            let side = 8.0;
            for i in -2i32..=2 {
                boss.bullets.push(BossBullet {
                    pos: Vec2::new(center.x - side / 2.0, muzzle_y),
                    size: Vec2::splat(side),
                    color: BOSS_FAN_COLOR,
                    vel: Vec2::new(i as f32 * 2.0, 4.0),
                });
            }
        }
        FirePattern::Radial => {
            let side = 6.0;
            for k in 0..8 {
                let angle = TAU / 8.0 * k as f32;
                boss.bullets.push(BossBullet {
                    pos: center - Vec2::splat(side / 2.0),
                    size: Vec2::splat(side),
                    color: BOSS_RADIAL_COLOR,
                    vel: Vec2::new(angle.cos(), angle.sin()) * 3.0,
                });
            }
        }
    }
}
