//! Frame drawing
//!
//! The core issues draw calls through [`Canvas`]; the embedder supplies
//! the actual surface (a GPU pipeline, a terminal, a test recorder).
//! Nothing drawn is ever read back.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Boss, GameState, PowerUpKind};

/// Draw-call surface the embedder implements. Calls are fire-and-forget.
pub trait Canvas {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    fn text(&mut self, pos: Vec2, text: &str, color: [f32; 4]);
}

/// Issue one full frame: ship, bullets, enemies, items, boss with its HP
/// bar, boss bullets, and the power-level overlay.
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas) {
    let player = &state.player;
    canvas.fill_rect(player.pos, player.size, player.color);

    for bullet in &player.bullets {
        canvas.fill_rect(bullet.pos, bullet.size, bullet.color);
    }

    for enemy in &state.enemies {
        canvas.fill_rect(enemy.pos, enemy.size, enemy.color);
    }

    for item in &state.power_ups {
        let color = match item.kind {
            PowerUpKind::Power => POWER_UP_POWER_COLOR,
            PowerUpKind::Life => POWER_UP_LIFE_COLOR,
        };
        canvas.fill_circle(item.rect().center(), item.size.x / 2.0, color);
    }

    if state.boss.active {
        canvas.fill_rect(state.boss.pos, state.boss.size, BOSS_COLOR);
        draw_boss_health_bar(&state.boss, canvas);
    }
    for bullet in &state.boss.bullets {
        canvas.fill_circle(bullet.rect().center(), bullet.size.x / 2.0, bullet.color);
    }

    draw_power_overlay(state, canvas);
}

/// HP bar floats just above the boss: dark backing, green fill scaled by
/// remaining health.
fn draw_boss_health_bar(boss: &Boss, canvas: &mut dyn Canvas) {
    let bar_size = Vec2::new(boss.size.x, 10.0);
    let bar_pos = Vec2::new(boss.pos.x, boss.pos.y - bar_size.y - 5.0);
    let ratio = boss.health.max(0) as f32 / boss.max_health as f32;

    canvas.fill_rect(bar_pos, bar_size, HP_BAR_BACK_COLOR);
    canvas.fill_rect(
        bar_pos,
        Vec2::new(bar_size.x * ratio, bar_size.y),
        HP_BAR_FILL_COLOR,
    );
}

fn draw_power_overlay(state: &GameState, canvas: &mut dyn Canvas) {
    let player = &state.player;
    canvas.text(
        Vec2::new(10.0, 20.0),
        &format!("Power: {}", player.power_level),
        OVERLAY_TEXT_COLOR,
    );
    if player.power_timer_ms > 0.0 {
        let seconds = (player.power_timer_ms / 1000.0).ceil();
        canvas.text(
            Vec2::new(10.0, 40.0),
            &format!("Time: {seconds}s"),
            OVERLAY_TEXT_COLOR,
        );
    }
}
