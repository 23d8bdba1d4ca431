//! Player preferences
//!
//! Held in memory for the page's lifetime. Reduced motion gates every
//! effect that moves or makes noise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    // === Visual Effects ===
    /// Screen shake when the wheel gets interrupted
    pub screen_shake: bool,
    /// Confetti after every spin
    pub confetti: bool,

    // === Audio ===
    /// Interrupt tones
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Accessibility ===
    /// Shorter spins, no shake, no confetti, no tones
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            confetti: true,
            sound: true,
            master_volume: 0.8,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective confetti (respects reduced_motion)
    pub fn effective_confetti(&self) -> bool {
        self.confetti && !self.reduced_motion
    }

    /// Effective sound (respects reduced_motion)
    pub fn effective_sound(&self) -> bool {
        self.sound && !self.reduced_motion
    }

    /// Volume to synthesize at, 0.0 when sound is off
    pub fn effective_volume(&self) -> f32 {
        if self.effective_sound() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Defaults seeded from the browser's `prefers-reduced-motion` query
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let reduced = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        if reduced {
            log::info!("prefers-reduced-motion is set");
        }
        Self {
            reduced_motion: reduced,
            ..Self::default()
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::default()
    }
}
