//! Nova Strike - a vertical arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, game state)
//! - `render`: Draw-call seam the embedder's surface implements
//! - `audio`: Fire-and-forget sound cue dispatch
//! - `ui`: HUD value push
//! - `settings`: Player preferences

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one display refresh at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions, origin top-left, +y down
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SHOOT_DELAY_MS: f64 = 300.0;
    /// Pointer/touch deltas below this magnitude are ignored
    pub const POINTER_DEADZONE: f32 = 10.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Enemy defaults
    pub const ENEMY_MIN_SIZE: f32 = 30.0;
    pub const ENEMY_MAX_SIZE: f32 = 50.0;
    pub const BASE_ENEMY_SPAWN_RATE: f32 = 0.02;
    pub const BASE_ENEMY_SPEED: f32 = 3.0;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const POWER_UP_FALL_SPEED: f32 = 2.0;
    pub const POWER_UP_DURATION_MS: f32 = 10_000.0;
    pub const POWER_LEVEL_MAX: u8 = 3;
    /// Chance that a destroyed enemy drops an item
    pub const POWER_UP_DROP_CHANCE: f32 = 0.2;
    /// Of dropped items, chance the item is a weapon upgrade (rest are 1-ups)
    pub const POWER_UP_POWER_CHANCE: f32 = 0.7;

    /// Boss defaults
    pub const BOSS_WIDTH: f32 = 150.0;
    pub const BOSS_HEIGHT: f32 = 100.0;
    pub const BOSS_MAX_HEALTH: i32 = 100;
    pub const BOSS_SPEED: f32 = 2.0;
    pub const BOSS_SHOOT_DELAY_MS: f64 = 1000.0;
    /// Score that arms the first boss encounter
    pub const BOSS_SPAWN_SCORE: u32 = 500;
    /// Threshold advance after each boss defeat
    pub const BOSS_SPAWN_SCORE_STEP: u32 = 500;
    /// Descent stops and the boss engages at this y
    pub const BOSS_ENGAGE_Y: f32 = 50.0;
    pub const BOSS_ENTER_SPEED: f32 = 1.0;
    /// Firing checks per bullet pattern before cycling to the next
    pub const BOSS_PATTERN_TICKS: u32 = 100;

    /// Scoring
    pub const ENEMY_SCORE: u32 = 10;
    pub const BOSS_SCORE: u32 = 200;

    /// Entity colors (straight-alpha RGBA)
    pub const PLAYER_COLOR: [f32; 4] = [0.0, 0.75, 1.0, 1.0];
    pub const BULLET_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const HEAVY_BULLET_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BOSS_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BOSS_SPREAD_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BOSS_FAN_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const BOSS_RADIAL_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const POWER_UP_POWER_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const POWER_UP_LIFE_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const HP_BAR_BACK_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const HP_BAR_FILL_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const OVERLAY_TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Convert an HSL color (hue in degrees, saturation/lightness in [0, 1])
/// to straight-alpha RGBA.
#[inline]
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        let red = hsl_to_rgba(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-5 && red[1].abs() < 1e-5);

        let green = hsl_to_rgba(120.0, 1.0, 0.5);
        assert!((green[1] - 1.0).abs() < 1e-5 && green[0].abs() < 1e-5);
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(hsl_to_rgba(0.0, 0.5, 0.5), hsl_to_rgba(360.0, 0.5, 0.5));
    }
}
