//! Ease-out curves and the composite spin curve
//!
//! Every curve maps [0, 1] onto [0, 1], is non-decreasing, and hits both
//! endpoints exactly. Inputs outside [0, 1] are clamped.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

#[inline]
fn ease_out_pow(t: f64, power: i32) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(power)
}

/// Fast start, gentle stop
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    ease_out_pow(t, 3)
}

#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    ease_out_pow(t, 4)
}

#[inline]
pub fn ease_out_quint(t: f64) -> f64 {
    ease_out_pow(t, 5)
}

#[inline]
pub fn ease_out_septic(t: f64) -> f64 {
    ease_out_pow(t, 7)
}

/// Exponential ease-out, rescaled so it reaches exactly 1 at t = 1
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return 1.0;
    }
    let floor = 2f64.powi(-10);
    (1.0 - 2f64.powf(-10.0 * t)) / (1.0 - floor)
}

/// Overall rotation curve for a spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EaseCurve {
    /// Cubic cruise, quartic settle, exponential crawl
    ThreePhase {
        /// Progress where the cruise phase ends
        cruise_end: f64,
        /// Progress where the settle phase ends
        settle_end: f64,
        /// Share of the rotation covered while cruising
        cruise_share: f64,
        /// Share of the rotation covered while settling
        settle_share: f64,
    },
    /// Cubic until `split`, then a septic tail
    TwoPhase { split: f64, split_share: f64 },
}

impl Default for EaseCurve {
    fn default() -> Self {
        EaseCurve::ThreePhase {
            cruise_end: 0.7,
            settle_end: 0.88,
            cruise_share: 0.7,
            settle_share: 0.15,
        }
    }
}

impl EaseCurve {
    /// The simpler curve some wheels used: cubic to 80%, septic to the end
    pub fn two_phase() -> Self {
        EaseCurve::TwoPhase {
            split: 0.8,
            split_share: 0.8,
        }
    }

    /// Fraction of the full rotation completed at `progress`
    pub fn apply(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        if p >= 1.0 {
            return 1.0;
        }

        match *self {
            EaseCurve::ThreePhase {
                cruise_end,
                settle_end,
                cruise_share,
                settle_share,
            } => {
                if p < cruise_end {
                    ease_out_cubic(p / cruise_end) * cruise_share
                } else if p < settle_end {
                    let t = (p - cruise_end) / (settle_end - cruise_end);
                    cruise_share + ease_out_quart(t) * settle_share
                } else {
                    let t = (p - settle_end) / (1.0 - settle_end);
                    let crawl_share = 1.0 - cruise_share - settle_share;
                    cruise_share + settle_share + ease_out_expo(t) * crawl_share
                }
            }
            EaseCurve::TwoPhase { split, split_share } => {
                if p < split {
                    ease_out_cubic(p / split) * split_share
                } else {
                    let t = (p - split) / (1.0 - split);
                    split_share + ease_out_septic(t) * (1.0 - split_share)
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let ok = match *self {
            EaseCurve::ThreePhase {
                cruise_end,
                settle_end,
                cruise_share,
                settle_share,
            } => {
                0.0 < cruise_end
                    && cruise_end < settle_end
                    && settle_end < 1.0
                    && cruise_share > 0.0
                    && settle_share > 0.0
                    && cruise_share + settle_share < 1.0
            }
            EaseCurve::TwoPhase { split, split_share } => {
                0.0 < split && split < 1.0 && 0.0 < split_share && split_share < 1.0
            }
        };

        if ok {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidTuning(format!(
                "ease curve phases out of range: {:?}",
                self
            )))
        }
    }
}
