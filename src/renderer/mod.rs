//! Wheel rendering
//!
//! `palette` holds the pure color/layout math. The Canvas2D stage that
//! implements the engine's sinks only exists on wasm32.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
mod glyphs;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasStage;
pub use palette::{SegmentStyle, WheelLayout, segment_style};
