//! Shot sound playback.
//!
//! Fire-and-forget: the simulation emits `ShotFired` events and the driver
//! loop calls [`ShotAudio::play`] once per event. A missing or unloadable
//! asset degrades to silence rather than failing startup.

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};
use macroquad::logging::warn;

/// Default shot sample path, relative to the executable (or web root).
pub const SHOT_SOUND_PATH: &str = "assets/shoot.wav";

pub struct ShotAudio {
    sound: Option<Sound>,
    volume: f32,
}

impl ShotAudio {
    pub async fn load(path: &str, volume: f32) -> Self {
        let sound = match load_sound(path).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                warn!("Shot sound unavailable ({}): {}", path, e);
                None
            }
        };
        Self { sound, volume }
    }

    /// Rewind and play. Rapid fire restarts the sample every tick the fire
    /// key is held instead of layering copies.
    pub fn play(&self) {
        if let Some(sound) = &self.sound {
            stop_sound(sound);
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }
}
