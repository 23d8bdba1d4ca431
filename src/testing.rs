//! Test fixtures shared across module tests

use crate::consts::POINTER_UP;
use crate::mascot::Mood;
use crate::sim::outcome::{Banter, Presentation, RoastTable};
use crate::sim::segment::{EventKey, Segment, SegmentKind, SpinEvent, Tier, WheelModel};
use crate::sinks::{FxSink, MascotSink, RenderSink, ResultSink, Tone};

#[derive(Debug, Clone, PartialEq)]
pub enum StageCall {
    Wheel(f64),
    Glyph(EventKey),
    Shake,
    Tone(Tone),
    Confetti,
    Toast(String),
    Mood(Mood),
    Result(Presentation),
    HideResult,
    SpinEnabled(bool),
}

/// Stage that records every call in order
#[derive(Debug, Default)]
pub struct RecordingStage {
    pub calls: Vec<StageCall>,
}

impl RecordingStage {
    pub fn count(&self, pred: impl Fn(&StageCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn glyphs(&self) -> usize {
        self.count(|c| matches!(c, StageCall::Glyph(_)))
    }

    pub fn frames(&self) -> usize {
        self.count(|c| matches!(c, StageCall::Wheel(_)))
    }
}

impl RenderSink for RecordingStage {
    fn draw_wheel(&mut self, angle: f64) {
        self.calls.push(StageCall::Wheel(angle));
    }

    fn draw_event_glyph(&mut self, event: EventKey, _visible_ms: f64) {
        self.calls.push(StageCall::Glyph(event));
    }
}

impl FxSink for RecordingStage {
    fn shake(&mut self, _duration_ms: f64, _intensity: f32) {
        self.calls.push(StageCall::Shake);
    }

    fn play_tone(&mut self, tone: Tone) {
        self.calls.push(StageCall::Tone(tone));
    }

    fn fire_confetti(&mut self) {
        self.calls.push(StageCall::Confetti);
    }

    fn show_toast(&mut self, text: &str, _duration_ms: f64) {
        self.calls.push(StageCall::Toast(text.to_string()));
    }
}

impl MascotSink for RecordingStage {
    fn set_mood(&mut self, mood: Mood, _duration_ms: f64) {
        self.calls.push(StageCall::Mood(mood));
    }
}

impl ResultSink for RecordingStage {
    fn show_result(&mut self, presentation: &Presentation) {
        self.calls.push(StageCall::Result(presentation.clone()));
    }

    fn hide_result(&mut self) {
        self.calls.push(StageCall::HideResult);
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.calls.push(StageCall::SpinEnabled(enabled));
    }
}

/// Eight segments with the good-luck wedge at index 3
pub fn eight_segments() -> Vec<Segment> {
    vec![
        Segment::new("Cash 50,000", Tier::Big, SegmentKind::Normal),
        Segment::new("Keychain", Tier::Low, SegmentKind::Normal),
        Segment::new("Gift card", Tier::Mid, SegmentKind::Normal),
        Segment::new("Good luck", Tier::Low, SegmentKind::GoodLuck),
        Segment::new("Sticker", Tier::Low, SegmentKind::Normal),
        Segment::new("New phone", Tier::Big, SegmentKind::Normal),
        Segment::new("Coffee", Tier::Mid, SegmentKind::Normal),
        Segment::new("Pencil", Tier::Low, SegmentKind::Normal),
    ]
}

pub fn all_events() -> Vec<SpinEvent> {
    EventKey::ALL.iter().copied().map(SpinEvent::new).collect()
}

pub fn eight_segment_wheel() -> WheelModel {
    WheelModel::load(eight_segments(), all_events(), "Good luck!", POINTER_UP)
        .expect("fixture wheel is valid")
}

/// Banter with only a general roast and one tier-specific line
pub fn small_banter() -> Banter {
    let mut roasts = RoastTable::new();
    roasts.insert("general", vec!["general roast".to_string()]);
    roasts.insert("big_wind", vec!["big wind roast".to_string()]);
    roasts.insert("big_general", vec!["big roast".to_string()]);
    Banter {
        toasts: vec!["so close".to_string()],
        roasts,
    }
}
