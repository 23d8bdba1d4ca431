//! Mascot mood state
//!
//! The mascot shows a mood for a while, then drifts back to neutral. Only the
//! latest mood request counts: a newer mood replaces both the face and the
//! pending revert.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Smug,
    Laugh,
    Clap,
    SideEye,
}

#[derive(Debug, Clone, Default)]
pub struct Mascot {
    mood: Mood,
    /// Timestamp (ms) at which the mood reverts to neutral
    revert_at: Option<f64>,
}

impl Mascot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Set a mood at `now_ms`. A non-positive duration keeps it until replaced.
    pub fn set_mood(&mut self, mood: Mood, duration_ms: f64, now_ms: f64) {
        self.mood = mood;
        self.revert_at = if duration_ms > 0.0 && mood != Mood::Neutral {
            Some(now_ms + duration_ms)
        } else {
            None
        };
    }

    /// Apply a pending revert. Returns true if the mood changed.
    pub fn update(&mut self, now_ms: f64) -> bool {
        match self.revert_at {
            Some(at) if now_ms >= at => {
                self.mood = Mood::Neutral;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}
