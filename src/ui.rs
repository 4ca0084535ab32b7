//! HUD value push
//!
//! The core pushes score/lives snapshots to the display each frame; the
//! display never calls back. The one inbound operation, the reset
//! trigger, goes straight to `GameState::reset`.

use serde::Serialize;

use crate::sim::GameState;

/// One frame's worth of HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u32,
    pub power_level: u8,
    /// Whole seconds left on the power-up, if one is running
    pub power_seconds_left: Option<u32>,
    /// (current, max) while the boss is on the field
    pub boss_health: Option<(i32, i32)>,
    pub game_over: bool,
    /// Set once the run has ended
    pub final_score: Option<u32>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let game_over = state.game_over();
        Self {
            score: state.score,
            lives: state.lives,
            power_level: state.player.power_level,
            power_seconds_left: (state.player.power_timer_ms > 0.0)
                .then(|| (state.player.power_timer_ms / 1000.0).ceil() as u32),
            boss_health: state
                .boss
                .active
                .then(|| (state.boss.health, state.boss.max_health)),
            game_over,
            final_score: game_over.then_some(state.score),
        }
    }
}

/// Display collaborator the embedder implements
pub trait HudSink {
    fn present(&mut self, hud: &HudSnapshot);
}
