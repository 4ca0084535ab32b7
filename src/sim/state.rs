//! Game state and core simulation types
//!
//! Everything that must survive a save/restore or a determinism replay
//! lives here. Per-frame transients (the event outbox) are skipped during
//! serialization.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Things that happened during a tick, for the audio/HUD collaborators.
///
/// The embedder drains these each frame; they are never serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed { at: Vec2 },
    /// An enemy slipped past the bottom edge. Costs a life, no explosion.
    EnemyEscaped,
    PlayerHit,
    PowerUpCollected { kind: PowerUpKind },
    BossSpawned,
    BossDefeated { at: Vec2 },
    GameOver { final_score: u32 },
}

/// Power-up item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Raises the firing pattern one level (max 3) for ten seconds
    Power,
    /// Adds one life
    Life,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-frame displacement while a direction is held
    pub speed: f32,
    pub color: [f32; 4],
    pub bullets: Vec<PlayerBullet>,
    /// Time of the last emitted shot; `None` until the first shot, so the
    /// first trigger pull always fires
    pub last_shot_ms: Option<f64>,
    /// Minimum wall-clock interval between shots
    pub shoot_delay_ms: f64,
    /// Firing pattern level, always in 1..=3
    pub power_level: u8,
    /// Remaining power-up duration, floors at zero
    pub power_timer_ms: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                PLAYFIELD_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                PLAYFIELD_HEIGHT - 70.0,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
            color: PLAYER_COLOR,
            bullets: Vec::new(),
            last_shot_ms: None,
            shoot_delay_ms: PLAYER_SHOOT_DELAY_MS,
            power_level: 1,
            power_timer_ms: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A bullet fired by the player, travelling straight up
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    /// Upward displacement per frame
    pub speed: f32,
    pub damage: i32,
}

impl PlayerBullet {
    /// The workhorse shot: 5x15, speed 7, damage 1
    pub fn standard(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(5.0, 15.0),
            color: BULLET_COLOR,
            speed: 7.0,
            damage: 1,
        }
    }

    /// Level-3 center shot: longer, faster, double damage
    pub fn heavy(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(5.0, 20.0),
            color: HEAVY_BULLET_COLOR,
            speed: 9.0,
            damage: 2,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    /// Downward displacement per frame, fixed at spawn time
    pub speed: f32,
    pub health: i32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A falling pickup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Boss bullet-emission shapes, cycled over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePattern {
    /// Three bullets in a narrow forward spread
    Spread,
    /// Five bullets in a wider forward fan
    Fan,
    /// Eight bullets evenly distributed over a full circle
    Radial,
}

impl FirePattern {
    pub fn next(self) -> Self {
        match self {
            FirePattern::Spread => FirePattern::Fan,
            FirePattern::Fan => FirePattern::Radial,
            FirePattern::Radial => FirePattern::Spread,
        }
    }
}

/// A boss bullet with independent x/y velocity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossBullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    /// Displacement per frame
    pub vel: Vec2,
}

impl BossBullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The boss. Exactly one lives in [`GameState`]; `active` gates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub active: bool,
    /// Horizontal strafe amplitude while engaged
    pub speed: f32,
    pub shoot_delay_ms: f64,
    pub last_shot_ms: Option<f64>,
    pub bullets: Vec<BossBullet>,
    pub pattern: FirePattern,
    /// Firing checks since the last pattern change
    pub pattern_ticks: u32,
}

impl Boss {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0 - BOSS_WIDTH / 2.0, -BOSS_HEIGHT),
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            active: false,
            speed: BOSS_SPEED,
            shoot_delay_ms: BOSS_SHOOT_DELAY_MS,
            last_shot_ms: None,
            bullets: Vec::new(),
            pattern: FirePattern::Spread,
            pattern_ticks: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

/// Score-scaled difficulty parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Per-frame probability of an enemy spawn
    pub enemy_spawn_rate: f32,
    /// Speed given to newly spawned enemies
    pub enemy_speed: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            enemy_spawn_rate: BASE_ENEMY_SPAWN_RATE,
            enemy_speed: BASE_ENEMY_SPEED,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; advances with the simulation so replays stay exact
    pub rng: Pcg32,
    /// Cumulative elapsed time fed from the embedder's monotonic clock.
    /// Shot cooldowns and the power-up timer measure against this, not
    /// against frame counts.
    pub time_ms: f64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub boss: Boss,
    pub difficulty: Difficulty,
    /// Score that arms the next boss encounter
    pub boss_spawn_score: u32,
    /// Set when the boss activates for the current threshold, cleared on
    /// defeat so the next threshold can trigger a fresh spawn
    pub boss_spawned: bool,
    /// Set once any boss has been defeated this run
    pub boss_defeated: bool,
    /// Per-tick event outbox for the audio/HUD collaborators
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ms: 0.0,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            player: Player::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            boss: Boss::new(),
            difficulty: Difficulty::default(),
            boss_spawn_score: BOSS_SPAWN_SCORE,
            boss_spawned: false,
            boss_defeated: false,
            events: Vec::new(),
        }
    }

    /// Reinitialize every field from the stored seed. The external reset
    /// trigger calls this with no other arguments.
    pub fn reset(&mut self) {
        *self = GameState::new(self.seed);
    }

    /// True once the run has ended
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_initial_conditions() {
        let state = GameState::new(7);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.power_level, 1);
        assert!(!state.boss.active);
        assert!(!state.boss_spawned);
        assert!(state.enemies.is_empty());
        assert!(state.player.bullets.is_empty());
        assert_eq!(state.boss_spawn_score, BOSS_SPAWN_SCORE);
    }

    #[test]
    fn reset_restores_initial_conditions() {
        let mut state = GameState::new(7);
        state.score = 1234;
        state.lives = 1;
        state.phase = GamePhase::GameOver;
        state.boss.active = true;
        state.boss_spawn_score = 1500;
        state.player.power_level = 3;

        state.reset();

        assert_eq!(state.seed, 7);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.boss.active);
        assert_eq!(state.boss_spawn_score, BOSS_SPAWN_SCORE);
        assert_eq!(state.player.power_level, 1);
    }

    #[test]
    fn pattern_cycle_order() {
        assert_eq!(FirePattern::Spread.next(), FirePattern::Fan);
        assert_eq!(FirePattern::Fan.next(), FirePattern::Radial);
        assert_eq!(FirePattern::Radial.next(), FirePattern::Spread);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = GameState::new(99);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.lives, state.lives);
        assert_eq!(back.player.pos, state.player.pos);
    }
}
