//! Canvas2D + DOM stage for the browser
//!
//! Implements every sink the spin engine drives. Timed effects (overlay,
//! shake, toast, delayed result, mascot revert, confetti) are advanced from
//! the animation loop through [`CanvasStage::tick`] rather than timers.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement,
};

use super::glyphs;
use super::palette::{
    self, BRIGHT_GOLD, GOLD, LABEL_LINE_HEIGHT, LABEL_WIDTH, WheelLayout, label_font_px,
    lighten_color, segment_style, wrap_label,
};
use crate::audio::ToneSynth;
use crate::confetti::{ConfettiField, PALETTE};
use crate::mascot::{Mascot, Mood};
use crate::normalize_angle;
use crate::settings::Settings;
use crate::sim::outcome::Presentation;
use crate::sim::segment::{EventKey, Segment};
use crate::sinks::{FxSink, MascotSink, RenderSink, ResultSink, Tone};

/// Delay between the wheel stopping and the result box sliding in
const RESULT_DELAY_MS: f64 = 300.0;
/// Mascot canvas edge
const MASCOT_SIZE: u32 = 100;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn canvas_by_id(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

struct Overlay {
    element: Element,
    ctx: CanvasRenderingContext2d,
    size: f64,
}

pub struct CanvasStage {
    document: Document,
    segments: Vec<Segment>,
    settings: Settings,

    wheel: CanvasRenderingContext2d,
    layout: WheelLayout,
    overlay: Option<Overlay>,

    mascot: Mascot,
    mascot_ctx: Option<CanvasRenderingContext2d>,

    confetti: ConfettiField,
    confetti_canvas: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
    rng: Pcg32,

    synth: ToneSynth,

    /// Latest animation timestamp
    now_ms: f64,
    overlay_until: Option<f64>,
    shake_until: Option<f64>,
    toast_until: Option<f64>,
    result_at: Option<f64>,
}

impl CanvasStage {
    /// Bind to `#wheelCanvas` and friends. Only the wheel canvas is required.
    pub fn new(document: Document, segments: Vec<Segment>, settings: Settings, seed: u64) -> Option<Self> {
        let canvas = canvas_by_id(&document, "wheelCanvas")?;
        let container_width = canvas
            .parent_element()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok())
            .map(|p| p.offset_width() as f64)
            .unwrap_or(palette::MAX_WHEEL_SIZE);

        let layout = WheelLayout::fit(container_width);
        canvas.set_width(layout.size as u32);
        canvas.set_height(layout.size as u32);
        let wheel = context_2d(&canvas)?;
        wheel.set_image_smoothing_enabled(true);

        let overlay = Self::bind_overlay(&document, layout.size);
        if overlay.is_none() {
            log::warn!("No event overlay found - interrupt glyphs disabled");
        }

        let mascot_ctx = Self::create_mascot(&document);
        if mascot_ctx.is_none() {
            log::warn!("No mascot container found - mascot disabled");
        }

        let mut synth = ToneSynth::new();
        synth.set_volume(settings.effective_volume());

        let stage = Self {
            document,
            segments,
            settings,
            wheel,
            layout,
            overlay,
            mascot: Mascot::new(),
            mascot_ctx,
            confetti: ConfettiField::new(),
            confetti_canvas: None,
            rng: Pcg32::seed_from_u64(seed),
            synth,
            now_ms: 0.0,
            overlay_until: None,
            shake_until: None,
            toast_until: None,
            result_at: None,
        };
        stage.redraw_mascot();
        Some(stage)
    }

    fn bind_overlay(document: &Document, size: f64) -> Option<Overlay> {
        let element = document.query_selector(".event-overlay").ok()??;
        let canvas = canvas_by_id(document, "eventCanvas")?;
        canvas.set_width(size as u32);
        canvas.set_height(size as u32);
        Some(Overlay {
            element,
            ctx: context_2d(&canvas)?,
            size,
        })
    }

    fn create_mascot(document: &Document) -> Option<CanvasRenderingContext2d> {
        let container = document.get_element_by_id("mascotContainer")?;
        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_id("mascotCanvas");
        canvas.set_width(MASCOT_SIZE);
        canvas.set_height(MASCOT_SIZE);
        container.append_child(&canvas).ok()?;

        // Desktop only
        let wide = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .is_some_and(|w| w > 768.0);
        if wide {
            let _ = container.class_list().add_1("visible");
        }
        context_2d(&canvas)
    }

    /// Full-viewport canvas for confetti, created on first burst
    fn confetti_surface(&mut self) -> Option<(f64, f64)> {
        if self.confetti_canvas.is_none() {
            let window = web_sys::window()?;
            let canvas: HtmlCanvasElement =
                self.document.create_element("canvas").ok()?.dyn_into().ok()?;
            let _ = canvas.set_attribute(
                "style",
                "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:9999",
            );
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            self.document.body()?.append_child(&canvas).ok()?;
            let ctx = context_2d(&canvas)?;
            self.confetti_canvas = Some((canvas, ctx));
        }
        let (canvas, _) = self.confetti_canvas.as_ref()?;
        Some((canvas.width() as f64, canvas.height() as f64))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.settings.reduced_motion = reduced;
        self.synth.set_volume(self.settings.effective_volume());
    }

    /// Browsers only start audio after a user gesture
    pub fn resume_audio(&self) {
        self.synth.resume();
    }

    /// Show a load failure in place of the result box
    pub fn show_error(&mut self, message: &str) {
        set_text(&self.document, "nearPrize", "");
        set_text(&self.document, "finalPrize", message);
        set_text(&self.document, "roastMessage", "");
        self.show_class("resultBox", "show", true);
        self.set_spin_enabled(false);
    }

    fn show_class(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if on {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    }

    fn set_body_shake(&self, on: bool) {
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            let _ = if on {
                classes.add_1("shake")
            } else {
                classes.remove_1("shake")
            };
        }
    }

    /// Advance timed effects to `now_ms`
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let due = |deadline: Option<f64>| deadline.is_some_and(|t| now_ms >= t);

        if due(self.overlay_until) {
            self.overlay_until = None;
            if let Some(overlay) = &self.overlay {
                let _ = overlay.element.class_list().remove_1("active");
            }
        }
        if due(self.shake_until) {
            self.shake_until = None;
            self.set_body_shake(false);
        }
        if due(self.toast_until) {
            self.toast_until = None;
            self.show_class("toast", "show", false);
        }
        if due(self.result_at) {
            self.result_at = None;
            self.show_class("resultBox", "show", true);
        }
        if self.mascot.update(now_ms) {
            self.redraw_mascot();
        }

        self.step_confetti();
    }

    fn step_confetti(&mut self) {
        let Some((canvas, ctx)) = &self.confetti_canvas else {
            return;
        };
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        ctx.clear_rect(0.0, 0.0, w, h);
        if self.confetti.is_empty() {
            return;
        }

        self.confetti.step(h);
        for p in &self.confetti.particles {
            ctx.save();
            ctx.set_global_alpha(p.life);
            ctx.translate(p.pos.x, p.pos.y).ok();
            ctx.rotate(p.rotation.to_radians()).ok();
            ctx.set_fill_style_str(PALETTE[p.color % PALETTE.len()]);
            ctx.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
            ctx.restore();
        }
    }

    fn redraw_mascot(&self) {
        if let Some(ctx) = &self.mascot_ctx {
            glyphs::draw_mascot(ctx, self.mascot.mood());
        }
    }

    fn draw_segment(&self, index: usize, segment: &Segment, rotation: f64, width: f64) {
        let ctx = &self.wheel;
        let WheelLayout { center, radius, .. } = self.layout;
        let start = index as f64 * width + rotation;
        let end = start + width;
        let style = segment_style(segment);

        // Soft radial sheen from the hub outward
        let fill = ctx
            .create_radial_gradient(center.x, center.y, radius * 0.3, center.x, center.y, radius)
            .ok()
            .zip(lighten_color(style.fill, 20.0));

        ctx.begin_path();
        ctx.move_to(center.x, center.y);
        ctx.arc(center.x, center.y, radius, start, end).ok();
        ctx.close_path();
        match fill {
            Some((gradient, light)) => {
                gradient.add_color_stop(0.0, &light).ok();
                gradient.add_color_stop(1.0, style.fill).ok();
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
            None => ctx.set_fill_style_str(style.fill),
        }
        ctx.fill();
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(2.5);
        ctx.stroke();

        let anchor = self.layout.label_anchor(start, end);
        ctx.save();
        ctx.translate(anchor.x, anchor.y).ok();
        ctx.rotate((start + end) / 2.0 + TAU / 4.0).ok();
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(style.text_fill);
        ctx.set_stroke_style_str(style.text_stroke);
        ctx.set_line_width(style.text_outline_width());
        ctx.set_font(&format!("bold {}px 'Segoe UI', sans-serif", label_font_px(radius)));

        let measure = |s: &str| ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0);
        for (i, line) in wrap_label(&segment.label, radius * LABEL_WIDTH, measure)
            .iter()
            .enumerate()
        {
            let y = i as f64 * LABEL_LINE_HEIGHT;
            ctx.stroke_text(line, 0.0, y).ok();
            ctx.fill_text(line, 0.0, y).ok();
        }
        ctx.restore();
    }

    fn draw_rim(&self) {
        let ctx = &self.wheel;
        let WheelLayout { center, radius, .. } = self.layout;

        let gradient = ctx.create_linear_gradient(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        gradient.add_color_stop(0.0, GOLD).ok();
        gradient.add_color_stop(0.5, BRIGHT_GOLD).ok();
        gradient.add_color_stop(1.0, GOLD).ok();

        ctx.begin_path();
        ctx.arc(center.x, center.y, radius, 0.0, TAU).ok();
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(5.0);
        ctx.stroke();
    }
}

impl RenderSink for CanvasStage {
    fn draw_wheel(&mut self, angle: f64) {
        if self.segments.is_empty() {
            return;
        }
        let size = self.layout.size;
        self.wheel.clear_rect(0.0, 0.0, size, size);

        let rotation = normalize_angle(angle);
        let width = TAU / self.segments.len() as f64;
        for (i, segment) in self.segments.iter().enumerate() {
            self.draw_segment(i, segment, rotation, width);
        }
        self.draw_rim();
    }

    fn draw_event_glyph(&mut self, event: EventKey, visible_ms: f64) {
        let Some(overlay) = &self.overlay else { return };
        overlay.ctx.clear_rect(0.0, 0.0, overlay.size, overlay.size);
        glyphs::draw_event(&overlay.ctx, event, overlay.size / 2.0, overlay.size / 2.0);
        let _ = overlay.element.class_list().add_1("active");
        self.overlay_until = Some(self.now_ms + visible_ms);
    }
}

impl FxSink for CanvasStage {
    fn shake(&mut self, duration_ms: f64, intensity: f32) {
        if !self.settings.effective_screen_shake() {
            return;
        }
        if let Some(body) = self.document.body() {
            let _ = body
                .style()
                .set_property("--shake-intensity", &format!("{}px", intensity));
        }
        self.set_body_shake(true);
        self.shake_until = Some(self.now_ms + duration_ms);
    }

    fn play_tone(&mut self, tone: Tone) {
        if self.settings.effective_sound() {
            self.synth.play(tone);
        }
    }

    fn fire_confetti(&mut self) {
        if !self.settings.effective_confetti() {
            return;
        }
        match self.confetti_surface() {
            Some((width, _)) => self.confetti.burst(width, &mut self.rng),
            None => log::warn!("Confetti canvas unavailable"),
        }
    }

    fn show_toast(&mut self, text: &str, duration_ms: f64) {
        let toast = match self.document.get_element_by_id("toast") {
            Some(el) => Some(el),
            None => self.document.create_element("div").ok().and_then(|el| {
                el.set_id("toast");
                el.set_class_name("toast");
                self.document.body()?.append_child(&el).ok()?;
                Some(el)
            }),
        };
        let Some(toast) = toast else { return };
        toast.set_text_content(Some(text));
        let _ = toast.class_list().add_1("show");
        self.toast_until = Some(self.now_ms + duration_ms);
    }
}

impl MascotSink for CanvasStage {
    fn set_mood(&mut self, mood: Mood, duration_ms: f64) {
        self.mascot.set_mood(mood, duration_ms, self.now_ms);
        self.redraw_mascot();
    }
}

impl ResultSink for CanvasStage {
    fn show_result(&mut self, presentation: &Presentation) {
        set_text(
            &self.document,
            "nearPrize",
            &format!("Almost won: {}", presentation.near_label),
        );
        set_text(
            &self.document,
            "finalPrize",
            &format!("But you got: {}", presentation.final_label),
        );
        set_text(&self.document, "roastMessage", &presentation.roast);
        self.result_at = Some(self.now_ms + RESULT_DELAY_MS);
    }

    fn hide_result(&mut self) {
        self.result_at = None;
        self.show_class("resultBox", "show", false);
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        let button = self
            .document
            .get_element_by_id("spinBtn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        match button {
            Some(button) => {
                button.set_disabled(!enabled);
                if enabled {
                    let _ = button.focus();
                }
            }
            None => log::warn!("Spin button #spinBtn not found"),
        }
    }
}
