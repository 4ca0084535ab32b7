//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame stepping driven by the embedder's scheduler
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod boss;
pub mod collision;
pub mod combat;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use state::{
    Boss, BossBullet, Difficulty, Enemy, FirePattern, GameEvent, GamePhase, GameState, Player,
    PlayerBullet, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
