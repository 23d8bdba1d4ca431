//! Deterministic wheel logic
//!
//! Everything here is pure given a seed and a sequence of frame timestamps:
//! - Seeded RNG only (decoy, event, roast and toast picks)
//! - Trajectory is a function of spin progress
//! - No rendering or platform dependencies; output goes through `sinks`

pub mod easing;
pub mod outcome;
pub mod segment;
pub mod spin;

pub use easing::EaseCurve;
pub use outcome::{Banter, OutcomePresenter, Presentation, RoastTable, SpinOutcome, roast_category};
pub use segment::{EventKey, Segment, SegmentKind, SpinEvent, Tier, WheelData, WheelModel};
pub use spin::{FrameStatus, SpinEngine, SpinPlan, WheelState};
