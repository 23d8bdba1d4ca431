//! Data-driven spin tuning
//!
//! Every magic number of the spin lives here so a wheel can be retuned from
//! JSON without touching the engine.

use serde::{Deserialize, Serialize};

use crate::consts::{ALIGN_TOLERANCE, POINTER_UP};
use crate::error::ConfigurationError;
use crate::sim::easing::EaseCurve;

/// Spin constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpinTuning {
    /// Where the physical pointer sits, in wheel drawing coordinates
    pub pointer_angle: f64,
    /// Near-miss offset before the decoy boundary, as a fraction of one segment
    pub near_miss_fraction: f64,
    /// Progress at which the interrupt event fires
    pub event_trigger_fraction: f64,
    /// Progress after which the target is pulled hard toward the terminal angle
    pub final_approach_start: f64,
    /// Full turns per spin
    pub spins: u32,
    pub reduced_motion_spins: u32,
    /// Spin duration in milliseconds
    pub duration_ms: f64,
    pub reduced_motion_duration_ms: f64,
    /// Overall rotation easing
    pub curve: EaseCurve,
    /// Allowed drift between the terminal center and the pointer after a spin
    pub align_tolerance: f64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            pointer_angle: POINTER_UP,
            near_miss_fraction: 0.15,
            event_trigger_fraction: 0.82,
            final_approach_start: 0.88,
            spins: 5,
            reduced_motion_spins: 2,
            duration_ms: 5000.0,
            reduced_motion_duration_ms: 2000.0,
            curve: EaseCurve::default(),
            align_tolerance: ALIGN_TOLERANCE,
        }
    }
}

impl SpinTuning {
    /// Parse tuning from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, crate::WheelError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Full turns for the given motion mode
    pub fn spins_for(&self, reduced_motion: bool) -> u32 {
        if reduced_motion {
            self.reduced_motion_spins
        } else {
            self.spins
        }
    }

    /// Duration for the given motion mode
    pub fn duration_for(&self, reduced_motion: bool) -> f64 {
        if reduced_motion {
            self.reduced_motion_duration_ms
        } else {
            self.duration_ms
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |msg: &str| Err(ConfigurationError::InvalidTuning(msg.to_string()));

        if !self.pointer_angle.is_finite() {
            return invalid("pointer angle must be finite");
        }
        if !(0.0..1.0).contains(&self.near_miss_fraction) {
            return invalid("near-miss fraction must be in [0, 1)");
        }
        if !(self.event_trigger_fraction > 0.0 && self.event_trigger_fraction < 1.0) {
            return invalid("event trigger fraction must be in (0, 1)");
        }
        if !(self.final_approach_start > 0.0 && self.final_approach_start < 1.0) {
            return invalid("final approach start must be in (0, 1)");
        }
        if !(self.duration_ms > 0.0 && self.reduced_motion_duration_ms > 0.0) {
            return invalid("durations must be positive");
        }
        if !(self.align_tolerance > 0.0) {
            return invalid("alignment tolerance must be positive");
        }
        self.curve.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = SpinTuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.spins_for(false), 5);
        assert_eq!(tuning.spins_for(true), 2);
        assert_eq!(tuning.duration_for(false), 5000.0);
        assert_eq!(tuning.duration_for(true), 2000.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = SpinTuning::from_json(r#"{"eventTriggerFraction":0.75,"spins":7}"#).unwrap();
        assert_eq!(tuning.event_trigger_fraction, 0.75);
        assert_eq!(tuning.spins, 7);
        assert_eq!(tuning.near_miss_fraction, 0.15);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let tuning = SpinTuning {
            event_trigger_fraction: 1.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = SpinTuning {
            duration_ms: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        assert!(SpinTuning::from_json(r#"{"nearMissFraction":1.5}"#).is_err());
    }
}
