//! Per-frame simulation step
//!
//! Orchestrates the component passes in a fixed order and applies the
//! score-driven difficulty ratchet. Rendering, audio, and input capture
//! stay outside; the embedder feeds a [`TickInput`] and drains
//! `state.events` after each call.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::{boss, combat, player, spawn};

/// Input state for a single tick. The embedder owns the event source; the
/// core only ever reads these.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Raw pointer/touch movement since the previous frame
    pub pointer_delta: Vec2,
}

/// Advance the game by one frame.
///
/// `dt` is the wall-clock time since the previous frame, in seconds.
/// Entity movement is per-frame while shot cooldowns and the power-up
/// timer consume `dt`, so firing cadence survives variable frame rates.
/// A game-over mid-pass halts the remainder of the frame; once the phase
/// is `GameOver` the call is a no-op until `GameState::reset`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let dt_ms = f64::from(dt) * 1000.0;
    state.time_ms += dt_ms;

    player::update(state, input, dt_ms);
    combat::update_player_bullets(state);

    spawn::spawn_enemy(state);
    spawn::check_boss_spawn(state);

    combat::update_enemies(state);
    if state.game_over() {
        return;
    }

    combat::update_power_ups(state);

    boss::update(state);
    combat::update_boss_bullets(state);
    if state.game_over() {
        return;
    }

    apply_difficulty(state);
}

/// One-way difficulty ratchet, keyed only on the current score.
fn apply_difficulty(state: &mut GameState) {
    let d = &mut state.difficulty;
    if state.score > 100 {
        d.enemy_spawn_rate = 0.03;
    }
    if state.score > 300 {
        d.enemy_spawn_rate = 0.04;
    }
    if state.score > 500 {
        d.enemy_spawn_rate = 0.05;
        d.enemy_speed = 4.0;
    }
    if state.score > 1000 {
        d.enemy_spawn_rate = 0.06;
        d.enemy_speed = 5.0;
    }
}
