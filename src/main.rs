//! Nova Strike headless entry point
//!
//! Drives the deterministic core with a scripted autopilot so the whole
//! loop (input -> tick -> events -> audio/HUD collaborators) runs without
//! a window. A real frontend supplies its own `Canvas`, `AudioBackend`,
//! and `HudSink` implementations and feeds live input instead.
//!
//! Usage: `nova-strike [seed]`. Environment:
//! - `NOVA_STRIKE_SETTINGS`: path to a JSON settings file
//! - `NOVA_STRIKE_DUMP`: path for an end-of-run JSON state dump

use std::path::{Path, PathBuf};

use nova_strike::Settings;
use nova_strike::audio::{AudioManager, NullBackend};
use nova_strike::consts::{PLAYFIELD_WIDTH, SIM_DT};
use nova_strike::sim::{GameEvent, GameState, TickInput, tick};
use nova_strike::ui::{HudSink, HudSnapshot};

/// HUD sink that prints through the logger
struct LogHud;

impl HudSink for LogHud {
    fn present(&mut self, hud: &HudSnapshot) {
        let boss = hud
            .boss_health
            .map(|(hp, max)| format!("  boss {hp}/{max}"))
            .unwrap_or_default();
        log::info!(
            "score {:>5}  lives {}  power {}{boss}",
            hud.score,
            hud.lives,
            hud.power_level
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("Nova Strike (headless) starting...");

    let settings = match std::env::var_os("NOVA_STRIKE_SETTINGS") {
        Some(path) => Settings::load_from(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2026);
    log::info!("running demo with seed {seed}");

    let mut state = GameState::new(seed);
    let mut audio = AudioManager::new(NullBackend);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);
    let mut hud = LogHud;

    // Two simulated minutes, or until the autopilot runs out of lives
    let max_frames = 2 * 60 * 60;
    for frame in 0..max_frames {
        let input = autopilot(&state, frame);
        tick(&mut state, &input, SIM_DT);

        let events = std::mem::take(&mut state.events);
        audio.handle_events(&events);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            log::info!("game over on frame {frame}");
            break;
        }

        if settings.show_hud && frame % 60 == 0 {
            hud.present(&HudSnapshot::from_state(&state));
        }
    }

    hud.present(&HudSnapshot::from_state(&state));
    println!(
        "seed {seed} finished: score {}, lives {}, game over: {}",
        state.score,
        state.lives,
        state.game_over()
    );

    if let Some(path) = std::env::var_os("NOVA_STRIKE_DUMP") {
        dump_state(&state, &PathBuf::from(path));
    }
}

/// Sweep the ship across the field with the trigger held.
fn autopilot(state: &GameState, frame: u32) -> TickInput {
    let sweep_right = (frame / 120) % 2 == 0;
    TickInput {
        left: !sweep_right && state.player.pos.x > 0.0,
        right: sweep_right && state.player.pos.x + state.player.size.x < PLAYFIELD_WIDTH,
        fire: true,
        ..TickInput::default()
    }
}

/// Best-effort end-of-run state dump for debugging; failures only log.
fn dump_state(state: &GameState, path: &Path) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => match std::fs::write(path, json) {
            Ok(()) => log::info!("state dump written to {}", path.display()),
            Err(err) => log::warn!("could not write state dump to {}: {err}", path.display()),
        },
        Err(err) => log::warn!("could not serialize state: {err}"),
    }
}
