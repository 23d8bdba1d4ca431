//! Colors and layout for the wheel
//!
//! Pure helpers shared by the canvas stage; nothing here touches the DOM.

use glam::DVec2;

use crate::polar_to_cartesian;
use crate::sim::segment::{Segment, Tier};

/// Largest wheel canvas edge in CSS pixels
pub const MAX_WHEEL_SIZE: f64 = 500.0;
/// Gap between the wheel rim and the canvas edge
pub const RIM_MARGIN: f64 = 10.0;
/// Label center distance as a fraction of the radius
pub const LABEL_RADIUS: f64 = 0.7;
/// Wrap width for labels as a fraction of the radius
pub const LABEL_WIDTH: f64 = 0.4;
/// Vertical advance between wrapped label lines
pub const LABEL_LINE_HEIGHT: f64 = 19.0;

pub const GOLD: &str = "#d4af37";
pub const BRIGHT_GOLD: &str = "#f4d03f";
pub const INK: &str = "#1a1a2e";
pub const SLATE: &str = "#34495e";
pub const PAPER: &str = "#f5f5f5";
/// Mascot body
pub const MASCOT_TEAL: &str = "#4ecdc4";

/// How one segment is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub text_fill: &'static str,
    pub text_stroke: &'static str,
    /// Text outline width in pixels (x10 to stay `Eq`)
    pub text_outline_tenths: u8,
}

impl SegmentStyle {
    pub fn text_outline_width(&self) -> f64 {
        self.text_outline_tenths as f64 / 10.0
    }
}

pub fn segment_style(segment: &Segment) -> SegmentStyle {
    if segment.is_good_luck() {
        return SegmentStyle {
            fill: GOLD,
            stroke: "rgba(212, 175, 55, 0.6)",
            text_fill: INK,
            text_stroke: BRIGHT_GOLD,
            text_outline_tenths: 10,
        };
    }
    match segment.tier {
        Tier::Big => SegmentStyle {
            fill: BRIGHT_GOLD,
            stroke: "rgba(244, 208, 63, 0.4)",
            text_fill: INK,
            text_stroke: GOLD,
            text_outline_tenths: 5,
        },
        Tier::Mid => SegmentStyle {
            fill: SLATE,
            stroke: "rgba(212, 175, 55, 0.3)",
            text_fill: PAPER,
            text_stroke: "rgba(245, 245, 245, 0.3)",
            text_outline_tenths: 5,
        },
        Tier::Low => SegmentStyle {
            fill: INK,
            stroke: "rgba(212, 175, 55, 0.2)",
            text_fill: PAPER,
            text_stroke: "rgba(245, 245, 245, 0.3)",
            text_outline_tenths: 5,
        },
    }
}

/// Brighten a `#rrggbb` color by `percent` of full scale, clamping each channel.
///
/// Returns `None` for anything that isn't a six-digit hex color.
pub fn lighten_color(hex: &str, percent: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let num = u32::from_str_radix(digits, 16).ok()?;
    let amt = (2.55 * percent).round() as i64;

    let channel = |shift: u32| ((((num >> shift) & 0xff) as i64 + amt).clamp(0, 255)) as u32;
    let (r, g, b) = (channel(16), channel(8), channel(0));
    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Greedy word wrap. `measure` returns the rendered width of a string.
pub fn wrap_label(label: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in label.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Label font size for a wheel of `radius`
pub fn label_font_px(radius: f64) -> f64 {
    (radius / 11.0).max(13.0)
}

/// Wheel geometry inside a square canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub size: f64,
    pub center: DVec2,
    pub radius: f64,
}

impl WheelLayout {
    /// Fit the wheel into a container `container_width` wide
    pub fn fit(container_width: f64) -> Self {
        let size = container_width.clamp(2.0 * RIM_MARGIN + 1.0, MAX_WHEEL_SIZE);
        Self {
            size,
            center: DVec2::splat(size / 2.0),
            radius: size / 2.0 - RIM_MARGIN,
        }
    }

    /// Where the label of a wedge spanning `[start, end)` is drawn
    pub fn label_anchor(&self, start: f64, end: f64) -> DVec2 {
        let mid = (start + end) / 2.0;
        self.center + polar_to_cartesian(self.radius * LABEL_RADIUS, mid)
    }
}
