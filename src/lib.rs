//! Luck Wheel - a prize wheel that always lands on "good luck"
//!
//! Core modules:
//! - `sim`: Deterministic spin engine (segments, easing, trajectory, outcome)
//! - `sinks`: Render/FX/mascot/result contracts the engine drives
//! - `tuning`: Data-driven spin constants
//! - `settings`: Player preferences (reduced motion, sound)
//! - `mascot`, `confetti`: Effect state machines used by the browser stage
//! - `renderer`: Palette/layout helpers and the Canvas2D stage (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod confetti;
pub mod error;
pub mod mascot;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sinks;
pub mod tuning;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ConfigurationError, WheelError};
pub use settings::Settings;
pub use tuning::SpinTuning;

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Game configuration constants
pub mod consts {
    /// Pointer angle in canvas space: y points down, so 3π/2 is straight up
    pub const POINTER_UP: f64 = 3.0 * std::f64::consts::FRAC_PI_2;

    /// Maximum drift tolerated between the terminal segment and the pointer
    pub const ALIGN_TOLERANCE: f64 = 1e-4;

    /// Event overlay visibility after the interrupt fires
    pub const EVENT_OVERLAY_MS: f64 = 1000.0;
    /// Screen shake on interrupt
    pub const EVENT_SHAKE_MS: f64 = 500.0;
    pub const EVENT_SHAKE_INTENSITY: f32 = 5.0;
    /// Mascot laughs this long after the interrupt
    pub const EVENT_MASCOT_MS: f64 = 2000.0;

    /// Toast lifetime after a completed spin
    pub const TOAST_MS: f64 = 2000.0;

    /// Embedded default wheel data
    pub const DEFAULT_WHEEL_JSON: &str = include_str!("../assets/wheel_prizes.json");
    /// Embedded default roast/toast tables
    pub const DEFAULT_BANTER_JSON: &str = include_str!("../assets/roasts.json");
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Signed minimal rotation taking `from` onto `to`, in (-π, π]
#[inline]
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let diff = normalize_angle(to - from);
    if diff > PI { diff - TAU } else { diff }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!(normalize_angle(-1e-18) < TAU);
    }

    #[test]
    fn test_shortest_delta_wraps() {
        // 350° to 10° is +20°, not -340°
        let d = shortest_delta(350f64.to_radians(), 10f64.to_radians());
        assert!((d - 20f64.to_radians()).abs() < 1e-9);

        let d = shortest_delta(10f64.to_radians(), 350f64.to_radians());
        assert!((d + 20f64.to_radians()).abs() < 1e-9);

        // Exactly opposite resolves to +π
        assert!((shortest_delta(0.0, PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(a in -1.0e6f64..1.0e6) {
            let n = normalize_angle(a);
            prop_assert!((0.0..TAU).contains(&n));
        }

        #[test]
        fn prop_shortest_delta_lands_on_target(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
            let d = shortest_delta(a, b);
            prop_assert!(d > -PI && d <= PI);
            let landed = normalize_angle(a + d);
            let target = normalize_angle(b);
            // Compare on the circle so 0 and 2π-ε count as equal
            prop_assert!(shortest_delta(landed, target).abs() < 1e-9);
        }
    }
}
