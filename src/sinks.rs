//! Collaborator contracts driven by the spin engine
//!
//! All calls are fire-and-forget. Implementations swallow their own failures
//! (missing elements, unavailable audio) so a spin always completes.

use crate::mascot::Mood;
use crate::sim::outcome::Presentation;
use crate::sim::segment::EventKey;

/// Oscillator shape for tone bursts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A short synthesized tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: f64,
    pub waveform: Waveform,
    /// Start offset from the moment the tone is requested
    pub delay_ms: f64,
}

impl Tone {
    pub fn new(freq_hz: f32, duration_ms: f64, waveform: Waveform) -> Self {
        Self {
            freq_hz,
            duration_ms,
            waveform,
            delay_ms: 0.0,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

pub trait RenderSink {
    /// Redraw the wheel at rotation `angle` (may be un-normalized)
    fn draw_wheel(&mut self, angle: f64);
    /// Show the interrupt glyph for `visible_ms`
    fn draw_event_glyph(&mut self, event: EventKey, visible_ms: f64);
}

pub trait FxSink {
    fn shake(&mut self, duration_ms: f64, intensity: f32);
    fn play_tone(&mut self, tone: Tone);
    fn fire_confetti(&mut self);
    fn show_toast(&mut self, text: &str, duration_ms: f64);
}

pub trait MascotSink {
    /// Switch mood; reverts to neutral after `duration_ms`
    fn set_mood(&mut self, mood: Mood, duration_ms: f64);
}

pub trait ResultSink {
    fn show_result(&mut self, presentation: &Presentation);
    fn hide_result(&mut self);
    fn set_spin_enabled(&mut self, enabled: bool);
}

/// Everything the engine talks to
pub trait Stage: RenderSink + FxSink + MascotSink + ResultSink {}

impl<T: RenderSink + FxSink + MascotSink + ResultSink> Stage for T {}

/// Headless stage that narrates every call through `log`
#[derive(Debug, Default)]
pub struct LogStage {
    /// Frames drawn since creation
    pub frames: u64,
    pub last_angle: f64,
}

impl RenderSink for LogStage {
    fn draw_wheel(&mut self, angle: f64) {
        self.frames += 1;
        self.last_angle = angle;
        log::trace!("draw_wheel angle={:.4}", angle);
    }

    fn draw_event_glyph(&mut self, event: EventKey, visible_ms: f64) {
        log::info!("Event glyph: {} ({} ms)", event.as_str(), visible_ms);
    }
}

impl FxSink for LogStage {
    fn shake(&mut self, duration_ms: f64, intensity: f32) {
        log::debug!("Shake {} ms at {}", duration_ms, intensity);
    }

    fn play_tone(&mut self, tone: Tone) {
        log::debug!(
            "Tone {} Hz {:?} for {} ms (+{} ms)",
            tone.freq_hz,
            tone.waveform,
            tone.duration_ms,
            tone.delay_ms
        );
    }

    fn fire_confetti(&mut self) {
        log::debug!("Confetti!");
    }

    fn show_toast(&mut self, text: &str, duration_ms: f64) {
        log::info!("Toast ({} ms): {}", duration_ms, text);
    }
}

impl MascotSink for LogStage {
    fn set_mood(&mut self, mood: Mood, duration_ms: f64) {
        log::debug!("Mascot {:?} for {} ms", mood, duration_ms);
    }
}

impl ResultSink for LogStage {
    fn show_result(&mut self, presentation: &Presentation) {
        log::info!("Almost won: {}", presentation.near_label);
        log::info!("Actually won: {}", presentation.final_label);
        log::info!("{}", presentation.roast);
    }

    fn hide_result(&mut self) {}

    fn set_spin_enabled(&mut self, enabled: bool) {
        log::debug!("Spin button enabled: {}", enabled);
    }
}
