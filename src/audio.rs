//! Sound cue dispatch
//!
//! The simulation never talks to an audio device. It emits [`GameEvent`]s,
//! and this module maps them onto named cues for whatever backend the
//! embedder supplies. Playback is fire-and-forget: a failed or missing
//! backend logs and is otherwise ignored, it must never stall a frame.

use crate::sim::GameEvent;

/// Named sound cues the game requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Explosion,
    PowerUp,
    BossEntrance,
}

/// Playback backend the embedder implements. `None` means the cue could
/// not be played; callers ignore it beyond a log line.
pub trait AudioBackend {
    fn play(&mut self, cue: SoundCue, volume: f32) -> Option<()>;
}

/// A backend that discards every cue (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play(&mut self, _cue: SoundCue, _volume: f32) -> Option<()> {
        Some(())
    }
}

/// Volume and mute plumbing around a backend
pub struct AudioManager<B> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Request a cue. Failures never propagate.
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if self.backend.play(cue, vol).is_none() {
            log::debug!("audio backend dropped cue {cue:?}");
        }
    }

    /// Map one frame's drained events onto cues.
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ShotFired => self.play(SoundCue::Shoot),
                GameEvent::EnemyDestroyed { .. }
                | GameEvent::PlayerHit
                | GameEvent::BossDefeated { .. } => self.play(SoundCue::Explosion),
                GameEvent::PowerUpCollected { .. } => self.play(SoundCue::PowerUp),
                GameEvent::BossSpawned => self.play(SoundCue::BossEntrance),
                GameEvent::EnemyEscaped | GameEvent::GameOver { .. } => {}
            }
        }
    }
}
