//! Player controller: movement, shooting cadence, power-up timer

use glam::Vec2;

use super::state::{GameEvent, GameState, Player, PlayerBullet};
use super::tick::TickInput;
use crate::consts::*;

/// Apply one frame of steering, firing, and power-timer bookkeeping.
pub(crate) fn update(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    steer(&mut state.player, input);
    if input.fire {
        try_shoot(state);
    }
    run_power_timer(&mut state.player, dt_ms);
}

/// Held directions and raw pointer deltas each contribute one speed-step
/// per axis; the result is clamped to the playfield.
fn steer(player: &mut Player, input: &TickInput) {
    let mut step = Vec2::ZERO;
    if input.left {
        step.x -= player.speed;
    }
    if input.right {
        step.x += player.speed;
    }
    if input.up {
        step.y -= player.speed;
    }
    if input.down {
        step.y += player.speed;
    }

    if input.pointer_delta.x > POINTER_DEADZONE {
        step.x += player.speed;
    } else if input.pointer_delta.x < -POINTER_DEADZONE {
        step.x -= player.speed;
    }
    if input.pointer_delta.y > POINTER_DEADZONE {
        step.y += player.speed;
    } else if input.pointer_delta.y < -POINTER_DEADZONE {
        step.y -= player.speed;
    }

    let max = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) - player.size;
    player.pos = (player.pos + step).clamp(Vec2::ZERO, max);
}

/// Emit 1-3 bullets depending on power level, honoring the shot cooldown.
fn try_shoot(state: &mut GameState) {
    let now = state.time_ms;
    let player = &mut state.player;
    if let Some(last) = player.last_shot_ms
        && now - last <= player.shoot_delay_ms
    {
        return;
    }

    let center_x = player.pos.x + player.size.x / 2.0;
    let quarter_x = player.pos.x + player.size.x / 4.0;
    let three_quarter_x = player.pos.x + player.size.x * 3.0 / 4.0;
    let y = player.pos.y;

    match player.power_level {
        1 => {
            player
                .bullets
                .push(PlayerBullet::standard(Vec2::new(center_x - 2.5, y)));
        }
        2 => {
            player
                .bullets
                .push(PlayerBullet::standard(Vec2::new(quarter_x - 2.5, y)));
            player
                .bullets
                .push(PlayerBullet::standard(Vec2::new(three_quarter_x - 2.5, y)));
        }
        // Level 3: a heavy center shot flanked by two standard bullets
        _ => {
            player
                .bullets
                .push(PlayerBullet::heavy(Vec2::new(center_x - 2.5, y)));
            player
                .bullets
                .push(PlayerBullet::standard(Vec2::new(quarter_x - 2.5, y + 10.0)));
            player.bullets.push(PlayerBullet::standard(Vec2::new(
                three_quarter_x - 2.5,
                y + 10.0,
            )));
        }
    }

    player.last_shot_ms = Some(now);
    state.events.push(GameEvent::ShotFired);
}

/// Count down the power-up window; expiry drops back to level 1.
fn run_power_timer(player: &mut Player, dt_ms: f64) {
    if player.power_level > 1 && player.power_timer_ms > 0.0 {
        player.power_timer_ms -= dt_ms as f32;
        if player.power_timer_ms <= 0.0 {
            player.power_timer_ms = 0.0;
            player.power_level = 1;
        }
    }
}
