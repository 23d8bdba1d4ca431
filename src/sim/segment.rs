//! Wheel segments, interrupt events, and the loaded wheel model
//!
//! Segment `i` covers the wedge `[i·w, (i+1)·w)` with `w = 2π / count`,
//! measured in canvas drawing coordinates (angle 0 on +x, growing clockwise
//! on screen because canvas y points down).

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{ConfigurationError, WheelError};
use crate::normalize_angle;

/// Reward tier of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Big,
    Mid,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Big => "big",
            Tier::Mid => "mid",
            Tier::Low => "low",
        }
    }

    /// Tiers worth faking a near-miss on
    pub fn is_decoy_worthy(&self) -> bool {
        matches!(self, Tier::Big | Tier::Mid)
    }
}

/// Whether a segment is a regular prize or the rigged terminal segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    #[default]
    Normal,
    #[serde(rename = "goodluck")]
    GoodLuck,
}

/// One wedge of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub tier: Tier,
    #[serde(rename = "type", default)]
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(label: impl Into<String>, tier: Tier, kind: SegmentKind) -> Self {
        Self {
            label: label.into(),
            tier,
            kind,
        }
    }

    pub fn is_good_luck(&self) -> bool {
        self.kind == SegmentKind::GoodLuck
    }
}

/// Cosmetic interruption keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKey {
    MysteryHand,
    CatPaw,
    Magnet,
    Wind,
    Mosquito,
    AiGlitch,
    Spring,
    Butterfly,
}

impl EventKey {
    pub const ALL: [EventKey; 8] = [
        EventKey::MysteryHand,
        EventKey::CatPaw,
        EventKey::Magnet,
        EventKey::Wind,
        EventKey::Mosquito,
        EventKey::AiGlitch,
        EventKey::Spring,
        EventKey::Butterfly,
    ];

    /// Key as used in roast category names
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKey::MysteryHand => "mystery_hand",
            EventKey::CatPaw => "cat_paw",
            EventKey::Magnet => "magnet",
            EventKey::Wind => "wind",
            EventKey::Mosquito => "mosquito",
            EventKey::AiGlitch => "ai_glitch",
            EventKey::Spring => "spring",
            EventKey::Butterfly => "butterfly",
        }
    }
}

/// An interrupt event as listed in the wheel data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinEvent {
    pub key: EventKey,
    /// Display name (optional in data)
    #[serde(default)]
    pub name: String,
}

impl SpinEvent {
    pub fn new(key: EventKey) -> Self {
        Self {
            key,
            name: String::new(),
        }
    }
}

/// Raw wheel data as shipped in the JSON data file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelData {
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub events: Vec<SpinEvent>,
    pub good_luck_label: String,
}

impl WheelData {
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated wheel: segments, events, and the resolved terminal index
#[derive(Debug, Clone)]
pub struct WheelModel {
    segments: Vec<Segment>,
    events: Vec<SpinEvent>,
    good_luck_label: String,
    good_luck_index: usize,
    pointer_angle: f64,
}

impl WheelModel {
    /// Validate segments and resolve the terminal segment once
    pub fn load(
        segments: Vec<Segment>,
        events: Vec<SpinEvent>,
        good_luck_label: impl Into<String>,
        pointer_angle: f64,
    ) -> Result<Self, ConfigurationError> {
        if segments.is_empty() {
            return Err(ConfigurationError::NoSegments);
        }

        let mut terminals = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_good_luck())
            .map(|(i, _)| i);
        let good_luck_index = terminals.next().ok_or(ConfigurationError::NoTerminalSegment)?;
        let extra = terminals.count();
        if extra > 0 {
            return Err(ConfigurationError::MultipleTerminalSegments { count: extra + 1 });
        }

        let model = Self {
            segments,
            events,
            good_luck_label: good_luck_label.into(),
            good_luck_index,
            pointer_angle: normalize_angle(pointer_angle),
        };

        log::info!(
            "Wheel loaded: {} segments, {} events, good luck at index {} ({})",
            model.segments.len(),
            model.events.len(),
            model.good_luck_index,
            model.segments[good_luck_index].label
        );

        Ok(model)
    }

    pub fn from_data(data: WheelData, pointer_angle: f64) -> Result<Self, ConfigurationError> {
        Self::load(data.segments, data.events, data.good_luck_label, pointer_angle)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn events(&self) -> &[SpinEvent] {
        &self.events
    }

    pub fn good_luck_index(&self) -> usize {
        self.good_luck_index
    }

    pub fn good_luck_segment(&self) -> &Segment {
        &self.segments[self.good_luck_index]
    }

    /// Label shown as the "final prize" (may differ from the wedge text)
    pub fn good_luck_label(&self) -> &str {
        &self.good_luck_label
    }

    pub fn pointer_angle(&self) -> f64 {
        self.pointer_angle
    }

    /// Angular width of one wedge
    pub fn segment_width(&self) -> f64 {
        TAU / self.segments.len() as f64
    }

    /// Center of wedge `index` in unrotated wheel coordinates
    pub fn segment_center_angle(&self, index: usize) -> f64 {
        let w = self.segment_width();
        index as f64 * w + w / 2.0
    }

    /// Wheel rotation that puts the center of `index` under the pointer
    pub fn angle_to_align(&self, index: usize) -> f64 {
        normalize_angle(self.pointer_angle - self.segment_center_angle(index))
    }

    /// Index of the wedge under the pointer at wheel rotation `angle`
    pub fn segment_at_pointer(&self, angle: f64) -> usize {
        let local = normalize_angle(self.pointer_angle - angle);
        let index = (local / self.segment_width()).floor() as usize;
        index.min(self.segments.len() - 1)
    }

    /// Segments allowed to play the near-miss decoy
    pub fn decoy_candidates(&self) -> Vec<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.tier.is_decoy_worthy() && !s.is_good_luck())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_decoy_candidate(&self, index: usize) -> bool {
        self.segments
            .get(index)
            .is_some_and(|s| s.tier.is_decoy_worthy() && !s.is_good_luck())
    }
}
