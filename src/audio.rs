//! Tone synthesis using the Web Audio API
//!
//! Every tone is a single oscillator with a short decay, no audio files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sinks::{Tone, Waveform};

/// Peak gain of a tone before master volume
const TONE_GAIN: f32 = 0.3;
/// Floor of the exponential decay (can't ramp to zero)
const DECAY_FLOOR: f32 = 0.01;

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

pub struct ToneSynth {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for ToneSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSynth {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - tones disabled");
        }
        Self { ctx, volume: 0.8 }
    }

    /// Set volume (0.0 - 1.0); 0.0 silences
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Schedule a tone. Failures are ignored.
    pub fn play(&self, tone: Tone) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, tone.freq_hz, oscillator_type(tone.waveform))
        else {
            return;
        };

        let t = ctx.current_time() + tone.delay_ms / 1000.0;
        let end = t + tone.duration_ms / 1000.0;

        gain.gain().set_value_at_time(self.volume * TONE_GAIN, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(DECAY_FLOOR, end)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(end).ok();
    }

    /// Create an oscillator wired through a gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
