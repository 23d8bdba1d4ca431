//! Spin engine: the rigged wheel's animation state machine
//!
//! `Idle -> Spinning -> Idle`. A spin looks like a multi-turn fair spin that
//! nearly stops on a decoy prize, gets "interrupted", and then creeps onto
//! the good-luck segment. The trajectory is a pure function of progress
//! (`SpinPlan`); the engine only latches time, fires the interrupt once, and
//! talks to the stage.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f64::consts::TAU;

use super::easing::{EaseCurve, ease_out_cubic, ease_out_expo, ease_out_quint};
use super::outcome::{Banter, OutcomePresenter, Presentation, SpinOutcome};
use super::segment::{EventKey, SpinEvent, WheelData, WheelModel};
use crate::consts::*;
use crate::error::{ConfigurationError, WheelError};
use crate::mascot::Mood;
use crate::sinks::{Stage, Tone, Waveform};
use crate::tuning::SpinTuning;
use crate::{normalize_angle, shortest_delta};

/// Trajectory of one spin
///
/// `decoy_offset` and `terminal_offset` are rotations measured from
/// `start_angle`, so the final eased frame lands on the terminal alignment
/// (mod 2π) whatever orientation the wheel started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub decoy_index: usize,
    pub start_angle: f64,
    pub decoy_offset: f64,
    pub terminal_offset: f64,
    pub total_spins: u32,
    pub duration_ms: f64,
    pub event_trigger_fraction: f64,
    pub final_approach_start: f64,
    pub curve: EaseCurve,
}

impl SpinPlan {
    pub fn new(
        model: &WheelModel,
        tuning: &SpinTuning,
        start_angle: f64,
        decoy_index: usize,
        reduced_motion: bool,
    ) -> Self {
        let w = model.segment_width();
        let terminal_angle = model.angle_to_align(model.good_luck_index());
        // Stop just short of the decoy's boundary rather than on its center
        let decoy_angle =
            normalize_angle(model.angle_to_align(decoy_index) - w * tuning.near_miss_fraction);

        Self {
            decoy_index,
            start_angle,
            decoy_offset: normalize_angle(decoy_angle - start_angle),
            terminal_offset: normalize_angle(terminal_angle - start_angle),
            total_spins: tuning.spins_for(reduced_motion),
            duration_ms: tuning.duration_for(reduced_motion),
            event_trigger_fraction: tuning.event_trigger_fraction,
            final_approach_start: tuning.final_approach_start,
            curve: tuning.curve,
        }
    }

    /// Progress in [0, 1] after `elapsed_ms`
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Offset added on top of the full turns. `diverted` is the interrupt latch.
    pub fn target_blend(&self, progress: f64, diverted: bool) -> f64 {
        let trigger = self.event_trigger_fraction;

        let mut target = if !diverted {
            self.decoy_offset * ease_out_cubic(progress / trigger)
        } else {
            let t = (progress - trigger) / (1.0 - trigger);
            let swing = shortest_delta(self.decoy_offset, self.terminal_offset);
            self.decoy_offset + swing * ease_out_quint(t)
        };

        if progress > self.final_approach_start {
            let t = (progress - self.final_approach_start) / (1.0 - self.final_approach_start);
            target += shortest_delta(target, self.terminal_offset) * ease_out_expo(t);
        }

        target
    }

    /// Un-normalized wheel rotation at `progress`
    pub fn angle_at(&self, progress: f64, diverted: bool) -> f64 {
        let turns = self.total_spins as f64 * TAU * self.curve.apply(progress);
        self.start_angle + turns + self.target_blend(progress, diverted)
    }
}

/// Snapshot of the wheel for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelState {
    /// Un-normalized during flight; normalize before drawing
    pub current_angle: f64,
    pub is_spinning: bool,
}

/// What a frame did
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStatus {
    /// No spin in flight
    Idle,
    Spinning { progress: f64 },
    /// The spin finished on this frame
    Completed(SpinOutcome),
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    plan: SpinPlan,
    event: Option<SpinEvent>,
    /// Timestamp of the first frame
    started_at: Option<f64>,
    /// One-shot interrupt latch
    diverted: bool,
}

pub struct SpinEngine<S: Stage> {
    model: WheelModel,
    tuning: SpinTuning,
    presenter: OutcomePresenter,
    stage: S,
    rng: Pcg32,
    current_angle: f64,
    reduced_motion: bool,
    active: Option<ActiveSpin>,
    last_presentation: Option<Presentation>,
}

impl<S: Stage> SpinEngine<S> {
    /// Build an engine resting on the good-luck segment
    pub fn new(
        model: WheelModel,
        tuning: SpinTuning,
        banter: Banter,
        stage: S,
        seed: u64,
    ) -> Result<Self, WheelError> {
        tuning.validate()?;
        if shortest_delta(model.pointer_angle(), tuning.pointer_angle).abs() > tuning.align_tolerance
        {
            return Err(ConfigurationError::InvalidTuning(
                "pointer angle differs from the wheel model".to_string(),
            )
            .into());
        }
        let presenter = OutcomePresenter::new(banter, model.good_luck_label())?;

        let mut engine = Self {
            model,
            tuning,
            presenter,
            stage,
            rng: Pcg32::seed_from_u64(seed),
            current_angle: 0.0,
            reduced_motion: false,
            active: None,
            last_presentation: None,
        };
        engine.force_align(engine.model.good_luck_index());
        engine.stage.draw_wheel(engine.current_angle);
        Ok(engine)
    }

    /// Build from raw wheel data, using the tuning's pointer angle
    pub fn from_data(
        data: WheelData,
        tuning: SpinTuning,
        banter: Banter,
        stage: S,
        seed: u64,
    ) -> Result<Self, WheelError> {
        let model = WheelModel::from_data(data, tuning.pointer_angle)?;
        Self::new(model, tuning, banter, stage, seed)
    }

    pub fn model(&self) -> &WheelModel {
        &self.model
    }

    pub fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn wheel_state(&self) -> WheelState {
        WheelState {
            current_angle: self.current_angle,
            is_spinning: self.is_spinning(),
        }
    }

    /// Plan of the spin in flight
    pub fn plan(&self) -> Option<&SpinPlan> {
        self.active.as_ref().map(|a| &a.plan)
    }

    pub fn last_presentation(&self) -> Option<&Presentation> {
        self.last_presentation.as_ref()
    }

    /// Read at the start of each spin
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Reposition the wheel. Ignored while spinning.
    pub fn set_angle(&mut self, angle: f64) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.current_angle = angle;
        self.stage.draw_wheel(angle);
        true
    }

    /// Start a spin with a random decoy and event.
    ///
    /// Returns `Ok(false)` without side effects if a spin is already running.
    pub fn spin(&mut self) -> Result<bool, WheelError> {
        if self.is_spinning() {
            log::debug!("Spin ignored: wheel already spinning");
            return Ok(false);
        }

        let decoy_index = *self
            .model
            .decoy_candidates()
            .choose(&mut self.rng)
            .ok_or(WheelError::NoDecoyAvailable)?;
        let event = match self.model.events().len() {
            0 => None,
            n => Some(self.model.events()[self.rng.random_range(0..n)].clone()),
        };

        self.begin(decoy_index, event);
        Ok(true)
    }

    /// Start a spin with a chosen decoy and event
    pub fn spin_with(
        &mut self,
        decoy_index: usize,
        event: Option<SpinEvent>,
    ) -> Result<bool, WheelError> {
        if self.is_spinning() {
            return Ok(false);
        }
        if !self.model.is_decoy_candidate(decoy_index) {
            return Err(WheelError::IneligibleDecoy(decoy_index));
        }
        self.begin(decoy_index, event);
        Ok(true)
    }

    fn begin(&mut self, decoy_index: usize, event: Option<SpinEvent>) {
        let plan = SpinPlan::new(
            &self.model,
            &self.tuning,
            self.current_angle,
            decoy_index,
            self.reduced_motion,
        );
        log::debug!(
            "Spin planned: decoy {} ({}), event {:?}, {} turns over {} ms",
            decoy_index,
            self.model.segments()[decoy_index].label,
            event.as_ref().map(|e| e.key.as_str()),
            plan.total_spins,
            plan.duration_ms
        );

        // Guard is set before the first frame is ever scheduled
        self.active = Some(ActiveSpin {
            plan,
            event,
            started_at: None,
            diverted: false,
        });
        self.stage.set_spin_enabled(false);
        self.stage.hide_result();
    }

    /// Advance the spin to timestamp `now_ms` (e.g. a requestAnimationFrame time)
    pub fn frame(&mut self, now_ms: f64) -> FrameStatus {
        let Some(active) = self.active.as_mut() else {
            return FrameStatus::Idle;
        };

        let started_at = *active.started_at.get_or_insert(now_ms);
        let progress = active.plan.progress_at(now_ms - started_at);

        let fire = !active.diverted && progress >= active.plan.event_trigger_fraction;
        if fire {
            active.diverted = true;
        }
        let interrupt = if fire {
            active.event.as_ref().map(|e| e.key)
        } else {
            None
        };

        self.current_angle = active.plan.angle_at(progress, active.diverted);

        if let Some(key) = interrupt {
            self.trigger_event(key);
        }
        self.stage.draw_wheel(self.current_angle);

        if progress < 1.0 {
            FrameStatus::Spinning { progress }
        } else {
            self.complete()
        }
    }

    fn trigger_event(&mut self, key: EventKey) {
        log::debug!("Interrupt fired: {}", key.as_str());
        self.stage.draw_event_glyph(key, EVENT_OVERLAY_MS);
        self.stage.shake(EVENT_SHAKE_MS, EVENT_SHAKE_INTENSITY);
        self.stage
            .play_tone(Tone::new(300.0, 150.0, Waveform::Sawtooth));
        self.stage
            .play_tone(Tone::new(200.0, 100.0, Waveform::Sawtooth).delayed(150.0));
        self.stage.set_mood(Mood::Laugh, EVENT_MASCOT_MS);
    }

    fn complete(&mut self) -> FrameStatus {
        let Some(active) = self.active.take() else {
            return FrameStatus::Idle;
        };

        self.force_align(self.model.good_luck_index());
        self.stage.draw_wheel(self.current_angle);

        let outcome = SpinOutcome {
            decoy: self.model.segments()[active.plan.decoy_index].clone(),
            event: active.event,
            terminal: self.model.good_luck_segment().clone(),
        };
        let presentation = self
            .presenter
            .present(&outcome, &mut self.stage, &mut self.rng);
        self.last_presentation = Some(presentation);

        FrameStatus::Completed(outcome)
    }

    /// Snap the wheel so segment `index` sits exactly under the pointer.
    ///
    /// Idempotent. During a spin the next frame overwrites it.
    pub fn force_align(&mut self, index: usize) -> f64 {
        let pointer = self.model.pointer_angle();
        let center = self.model.segment_center_angle(index);

        self.current_angle = self.model.angle_to_align(index);

        let drawn = normalize_angle(center + self.current_angle);
        let drift = shortest_delta(drawn, pointer);
        if drift.abs() > self.tuning.align_tolerance {
            log::warn!("Alignment drift of {:.6} rad corrected", drift);
            self.current_angle = normalize_angle(self.current_angle + drift);
        }
        self.current_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::segment::{Segment, SegmentKind, Tier};
    use crate::testing::{RecordingStage, StageCall, eight_segment_wheel, small_banter};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn engine(seed: u64) -> SpinEngine<RecordingStage> {
        SpinEngine::new(
            eight_segment_wheel(),
            SpinTuning::default(),
            small_banter(),
            RecordingStage::default(),
            seed,
        )
        .unwrap()
    }

    /// Step frames from t = 0 until the spin completes
    fn run_to_completion(engine: &mut SpinEngine<RecordingStage>, step_ms: f64) -> SpinOutcome {
        let mut t = 0.0;
        for _ in 0..100_000 {
            match engine.frame(t) {
                FrameStatus::Completed(outcome) => return outcome,
                FrameStatus::Spinning { .. } => t += step_ms,
                FrameStatus::Idle => panic!("engine went idle before completing"),
            }
        }
        panic!("spin never completed");
    }

    fn terminal_drift(engine: &SpinEngine<RecordingStage>) -> f64 {
        let model = engine.model();
        let center = model.segment_center_angle(model.good_luck_index());
        let drawn = normalize_angle(center + engine.current_angle());
        shortest_delta(drawn, model.pointer_angle())
    }

    #[test]
    fn test_new_rests_on_good_luck() {
        let engine = engine(1);
        assert!(terminal_drift(&engine).abs() < 1e-9);
        assert!(!engine.is_spinning());
        assert_eq!(engine.stage().frames(), 1);
    }

    #[test]
    fn test_spin_completes_on_terminal() {
        let mut engine = engine(42);
        assert!(engine.spin().unwrap());
        let outcome = run_to_completion(&mut engine, 16.0);

        assert!(!engine.is_spinning());
        assert!(terminal_drift(&engine).abs() <= 1e-4);
        assert!(outcome.terminal.is_good_luck());
        assert!(engine.last_presentation().is_some());
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut engine = engine(7);
        assert!(engine.spin().unwrap());
        engine.frame(0.0);
        engine.frame(100.0);

        let plan = *engine.plan().unwrap();
        let angle = engine.current_angle();
        let calls = engine.stage().calls.len();

        assert!(!engine.spin().unwrap());
        assert!(!engine.spin_with(5, None).unwrap());

        assert_eq!(*engine.plan().unwrap(), plan);
        assert_eq!(engine.current_angle(), angle);
        assert_eq!(engine.stage().calls.len(), calls);
    }

    #[test]
    fn test_guard_set_before_first_frame() {
        let mut engine = engine(7);
        assert!(engine.spin().unwrap());
        // No frame has run yet, the wheel is already locked
        assert!(engine.is_spinning());
        assert!(engine.wheel_state().is_spinning);
        assert!(!engine.spin().unwrap());
    }

    #[test]
    fn test_interrupt_fires_once_at_trigger() {
        let mut engine = engine(3);
        engine.spin_with(5, Some(SpinEvent::new(EventKey::Wind))).unwrap();
        let trigger = engine.tuning().event_trigger_fraction;

        let mut t = 0.0;
        let mut fired_at = None;
        loop {
            let before = engine.stage().glyphs();
            let status = engine.frame(t);
            let after = engine.stage().glyphs();
            let progress = match &status {
                FrameStatus::Spinning { progress } => *progress,
                FrameStatus::Completed(_) => 1.0,
                FrameStatus::Idle => unreachable!(),
            };

            if after > before {
                assert!(fired_at.is_none(), "interrupt fired twice");
                fired_at = Some(progress);
            }
            if progress < trigger {
                assert_eq!(after, 0);
            } else {
                assert_eq!(after, 1);
            }
            if matches!(status, FrameStatus::Completed(_)) {
                break;
            }
            t += 50.0;
        }

        let fired_at = fired_at.expect("interrupt never fired");
        assert!(fired_at >= trigger && fired_at < trigger + 0.01);
    }

    #[test]
    fn test_interrupt_cue() {
        let mut engine = engine(3);
        engine.spin_with(5, Some(SpinEvent::new(EventKey::Magnet))).unwrap();
        run_to_completion(&mut engine, 20.0);

        let calls = &engine.stage().calls;
        assert!(calls.contains(&StageCall::Glyph(EventKey::Magnet)));
        assert_eq!(engine.stage().count(|c| matches!(c, StageCall::Shake)), 1);
        assert_eq!(engine.stage().count(|c| matches!(c, StageCall::Tone(_))), 2);
        assert!(calls.contains(&StageCall::Mood(Mood::Laugh)));
        assert!(calls.contains(&StageCall::Tone(
            Tone::new(200.0, 100.0, Waveform::Sawtooth).delayed(150.0)
        )));
    }

    #[test]
    fn test_latch_resets_next_spin() {
        let mut engine = engine(11);
        engine.spin().unwrap();
        run_to_completion(&mut engine, 25.0);
        engine.spin().unwrap();
        run_to_completion(&mut engine, 25.0);
        assert_eq!(engine.stage().glyphs(), 2);
    }

    #[test]
    fn test_decoy_never_terminal_or_low() {
        for seed in 0..200 {
            let mut engine = engine(seed);
            engine.spin().unwrap();
            let plan = *engine.plan().unwrap();
            let decoy = &engine.model().segments()[plan.decoy_index];
            assert!(!decoy.is_good_luck());
            assert!(matches!(decoy.tier, Tier::Big | Tier::Mid));
        }
    }

    #[test]
    fn test_no_decoy_available() {
        let model = WheelModel::load(
            vec![
                Segment::new("Good luck", Tier::Low, SegmentKind::GoodLuck),
                Segment::new("Pen", Tier::Low, SegmentKind::Normal),
            ],
            Vec::new(),
            "Good luck",
            POINTER_UP,
        )
        .unwrap();
        let mut engine = SpinEngine::new(
            model,
            SpinTuning::default(),
            small_banter(),
            RecordingStage::default(),
            0,
        )
        .unwrap();

        assert!(matches!(engine.spin(), Err(WheelError::NoDecoyAvailable)));
        assert!(!engine.is_spinning());
        assert_eq!(engine.frame(0.0), FrameStatus::Idle);
    }

    #[test]
    fn test_ineligible_decoy_rejected() {
        let mut engine = engine(0);
        // Index 3 is the good-luck segment, index 1 is low tier
        assert!(matches!(engine.spin_with(3, None), Err(WheelError::IneligibleDecoy(3))));
        assert!(matches!(engine.spin_with(1, None), Err(WheelError::IneligibleDecoy(1))));
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_idle_frame_draws_nothing() {
        let mut engine = engine(0);
        let calls = engine.stage().calls.len();
        assert_eq!(engine.frame(123.0), FrameStatus::Idle);
        assert_eq!(engine.stage().calls.len(), calls);
    }

    #[test]
    fn test_scenario_eight_segments_wind() {
        let mut engine = engine(2024);
        assert_eq!(engine.model().pointer_angle(), 3.0 * PI / 2.0);
        engine.set_angle(0.0);
        engine
            .spin_with(5, Some(SpinEvent::new(EventKey::Wind)))
            .unwrap();
        let outcome = run_to_completion(&mut engine, 16.0);

        assert_eq!(engine.model().segment_at_pointer(engine.current_angle()), 3);
        assert!(terminal_drift(&engine).abs() <= 1e-4);
        assert_eq!(outcome.decoy.label, "New phone");
        assert_eq!(outcome.event.as_ref().map(|e| e.key), Some(EventKey::Wind));

        let shown = engine.last_presentation().unwrap();
        assert_eq!(shown.category, "big_wind");
        assert_eq!(shown.roast, "big wind roast");
        assert_eq!(shown.final_label, "Good luck!");
    }

    #[test]
    fn test_scenario_plan_from_zero() {
        let model = eight_segment_wheel();
        let tuning = SpinTuning::default();
        let plan = SpinPlan::new(&model, &tuning, 0.0, 5, false);
        let w = TAU / 8.0;

        // Starting at 0, offsets equal the absolute alignment angles
        let terminal = normalize_angle(3.0 * PI / 2.0 - 3.5 * w);
        let decoy = normalize_angle(3.0 * PI / 2.0 - 5.5 * w - 0.15 * w);
        assert!((plan.terminal_offset - terminal).abs() < 1e-12);
        assert!((plan.decoy_offset - decoy).abs() < 1e-12);
        assert_eq!(plan.total_spins, 5);
        assert_eq!(plan.duration_ms, 5000.0);
    }

    #[test]
    fn test_no_visible_jump() {
        let mut engine = engine(5);
        engine.set_angle(1.234);
        engine.spin().unwrap();

        let mut t = 0.0;
        let mut last = engine.current_angle();
        loop {
            let status = engine.frame(t);
            let angle = engine.current_angle();
            let step = shortest_delta(last, angle).abs();
            assert!(step < 0.1, "jump of {} rad at t={}", step, t);
            last = angle;
            if matches!(status, FrameStatus::Completed(_)) {
                break;
            }
            t += 1.0;
        }
    }

    #[test]
    fn test_last_eased_frame_matches_snap() {
        let model = eight_segment_wheel();
        let tuning = SpinTuning::default();
        let plan = SpinPlan::new(&model, &tuning, 4.0, 0, false);
        let eased_end = plan.angle_at(1.0, true);
        let aligned = model.angle_to_align(model.good_luck_index());
        assert!(shortest_delta(eased_end, aligned).abs() < 1e-6);
    }

    #[test]
    fn test_reduced_motion_shortens_spin() {
        let mut engine = engine(8);
        engine.set_reduced_motion(true);
        engine.spin().unwrap();
        assert_eq!(engine.plan().unwrap().total_spins, 2);

        assert!(matches!(engine.frame(0.0), FrameStatus::Spinning { .. }));
        assert!(matches!(engine.frame(1999.0), FrameStatus::Spinning { .. }));
        assert!(matches!(engine.frame(2000.0), FrameStatus::Completed(_)));
    }

    #[test]
    fn test_spin_trigger_toggled() {
        let mut engine = engine(4);
        engine.spin().unwrap();
        let calls = &engine.stage().calls;
        assert!(calls.contains(&StageCall::SpinEnabled(false)));
        assert!(calls.contains(&StageCall::HideResult));

        run_to_completion(&mut engine, 16.0);
        assert_eq!(
            engine.stage().calls.last(),
            Some(&StageCall::SpinEnabled(true))
        );
    }

    #[test]
    fn test_no_events_means_no_interrupt() {
        let model = WheelModel::load(
            crate::testing::eight_segments(),
            Vec::new(),
            "Good luck!",
            POINTER_UP,
        )
        .unwrap();
        let mut engine = SpinEngine::new(
            model,
            SpinTuning::default(),
            small_banter(),
            RecordingStage::default(),
            99,
        )
        .unwrap();
        engine.spin_with(0, None).unwrap();
        let outcome = run_to_completion(&mut engine, 16.0);

        assert!(outcome.event.is_none());
        assert_eq!(engine.stage().glyphs(), 0);
        assert!(terminal_drift(&engine).abs() <= 1e-4);
        assert_eq!(engine.last_presentation().unwrap().category, "big_general");
    }

    #[test]
    fn test_force_align_idempotent() {
        let mut engine = engine(0);
        let first = engine.force_align(5);
        let second = engine.force_align(5);
        assert_eq!(first, second);
        assert_eq!(engine.model().segment_at_pointer(first), 5);
    }

    #[test]
    fn test_pointer_mismatch_rejected() {
        let tuning = SpinTuning {
            pointer_angle: 0.0,
            ..Default::default()
        };
        let result = SpinEngine::new(
            eight_segment_wheel(),
            tuning,
            small_banter(),
            RecordingStage::default(),
            0,
        );
        assert!(matches!(result, Err(WheelError::Configuration(_))));
    }

    #[test]
    fn test_two_phase_curve_also_terminates() {
        let tuning = SpinTuning {
            curve: EaseCurve::two_phase(),
            ..Default::default()
        };
        let mut engine = SpinEngine::new(
            eight_segment_wheel(),
            tuning,
            small_banter(),
            RecordingStage::default(),
            12,
        )
        .unwrap();
        engine.spin().unwrap();
        run_to_completion(&mut engine, 16.0);
        assert!(terminal_drift(&engine).abs() <= 1e-4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_always_terminal(seed in any::<u64>(), start in -100.0f64..100.0, reduced in any::<bool>()) {
            let mut engine = engine(seed);
            engine.set_angle(start);
            engine.set_reduced_motion(reduced);
            engine.spin().unwrap();
            let outcome = run_to_completion(&mut engine, 16.0);

            prop_assert!(terminal_drift(&engine).abs() <= 1e-4);
            prop_assert!(outcome.terminal.is_good_luck());
            prop_assert!(outcome.decoy.tier.is_decoy_worthy());
            prop_assert!(!engine.is_spinning());
        }
    }
}
