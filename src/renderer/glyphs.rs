//! Interrupt glyphs and mascot faces, drawn with Canvas2D paths
//!
//! Every drawing call here is best-effort: a failed path op just leaves the
//! glyph incomplete.

use std::f64::consts::{PI, TAU};
use web_sys::CanvasRenderingContext2d;

use crate::mascot::Mood;
use crate::sim::segment::EventKey;

use super::palette::MASCOT_TEAL;

/// Draw the glyph for `event` centered on (x, y)
pub fn draw_event(ctx: &CanvasRenderingContext2d, event: EventKey, x: f64, y: f64) {
    match event {
        EventKey::MysteryHand => mystery_hand(ctx, x, y),
        EventKey::CatPaw => cat_paw(ctx, x, y),
        EventKey::Magnet => magnet(ctx, x, y),
        EventKey::Wind => wind(ctx, x, y),
        EventKey::Mosquito => mosquito(ctx, x, y),
        EventKey::AiGlitch => ai_glitch(ctx, x, y),
        EventKey::Spring => spring(ctx, x, y),
        EventKey::Butterfly => butterfly(ctx, x, y),
    }
}

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.arc(x, y, r, 0.0, TAU).ok();
}

fn mystery_hand(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_stroke_style_str("#333");
    ctx.set_line_width(4.0);
    ctx.begin_path();
    // Palm
    circle(ctx, x - 20.0, y, 15.0);
    // Fingers
    for (dx, dy) in [(-10.0, -10.0), (-5.0, -5.0), (0.0, 0.0)] {
        ctx.move_to(x + dx, y + dy);
        ctx.line_to(x + dx + 5.0, y + dy - 10.0);
    }
    ctx.stroke();
}

fn cat_paw(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_fill_style_str("#ff6b6b");
    ctx.begin_path();
    circle(ctx, x, y, 20.0);
    ctx.fill();
    // Toe beans
    for i in -1..=1 {
        ctx.begin_path();
        circle(ctx, x + i as f64 * 12.0, y - 15.0, 8.0);
        ctx.fill();
    }
}

fn magnet(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_fill_style_str("#4ecdc4");
    ctx.fill_rect(x - 15.0, y - 30.0, 30.0, 20.0);
    for pole in [-15.0, 15.0] {
        ctx.begin_path();
        ctx.arc(x + pole, y - 30.0, 10.0, PI, 0.0).ok();
        ctx.fill();
    }
}

fn wind(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_stroke_style_str("#95e1d3");
    ctx.set_line_width(3.0);
    for i in 0..5 {
        let dx = i as f64 * 10.0;
        ctx.begin_path();
        ctx.move_to(x - 30.0 + dx, y - 20.0);
        ctx.quadratic_curve_to(x - 25.0 + dx, y - 30.0, x - 20.0 + dx, y - 20.0);
        ctx.stroke();
    }
}

fn mosquito(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_fill_style_str("#333");
    ctx.begin_path();
    ctx.ellipse(x, y, 8.0, 4.0, 0.0, 0.0, TAU).ok();
    ctx.fill();

    ctx.set_stroke_style_str("#666");
    ctx.set_line_width(1.0);
    for wing in [-5.0, 5.0] {
        ctx.begin_path();
        circle(ctx, x + wing, y - 3.0, 5.0);
        ctx.stroke();
    }
}

fn ai_glitch(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_font("bold 20px monospace");
    ctx.set_fill_style_str("#ff00ff");
    ctx.fill_text("AI", x - 15.0, y - 10.0).ok();
    // Offset copy for the glitch
    ctx.set_fill_style_str("#00ffff");
    ctx.fill_text("AI", x - 14.0, y - 9.0).ok();
}

fn spring(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_stroke_style_str("#ffe66d");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for i in 0..5 {
        let i = i as f64;
        ctx.move_to(x, y - i * 8.0);
        ctx.line_to(x + 10.0, y - (i + 0.5) * 8.0);
        ctx.line_to(x, y - (i + 1.0) * 8.0);
    }
    ctx.stroke();
}

fn butterfly(ctx: &CanvasRenderingContext2d, x: f64, y: f64) {
    ctx.set_fill_style_str("#ff6b6b");
    for (dx, tilt) in [(-10.0, -0.3), (10.0, 0.3)] {
        ctx.begin_path();
        ctx.ellipse(x + dx, y, 12.0, 8.0, tilt, 0.0, TAU).ok();
        ctx.fill();
    }
    ctx.set_fill_style_str("#333");
    ctx.begin_path();
    ctx.ellipse(x, y, 3.0, 15.0, 0.0, 0.0, TAU).ok();
    ctx.fill();
}

/// Draw the mascot (body plus face) into a 100x100 canvas
pub fn draw_mascot(ctx: &CanvasRenderingContext2d, mood: Mood) {
    let (x, y) = (50.0, 50.0);
    ctx.clear_rect(0.0, 0.0, 100.0, 100.0);

    ctx.set_fill_style_str(MASCOT_TEAL);
    ctx.begin_path();
    circle(ctx, x, y, 30.0);
    ctx.fill();

    ctx.set_fill_style_str("#333");
    ctx.set_stroke_style_str("#333");
    ctx.set_line_width(2.0);

    match mood {
        Mood::Neutral => {
            ctx.begin_path();
            circle(ctx, x - 8.0, y - 5.0, 3.0);
            circle(ctx, x + 8.0, y - 5.0, 3.0);
            ctx.fill();

            ctx.begin_path();
            ctx.arc(x, y + 5.0, 5.0, 0.0, PI).ok();
            ctx.stroke();
        }
        Mood::Smug => {
            // Squinted eyes
            ctx.begin_path();
            ctx.move_to(x - 12.0, y - 5.0);
            ctx.line_to(x - 4.0, y - 5.0);
            ctx.move_to(x + 4.0, y - 5.0);
            ctx.line_to(x + 12.0, y - 5.0);
            ctx.stroke();

            ctx.begin_path();
            ctx.arc(x, y + 8.0, 6.0, 0.2, PI - 0.2).ok();
            ctx.stroke();
        }
        Mood::Laugh => {
            ctx.begin_path();
            circle(ctx, x - 8.0, y - 5.0, 4.0);
            circle(ctx, x + 8.0, y - 5.0, 4.0);
            ctx.fill();

            ctx.set_fill_style_str("#fff");
            ctx.begin_path();
            ctx.ellipse(x, y + 10.0, 8.0, 6.0, 0.0, 0.0, TAU).ok();
            ctx.fill();
            ctx.stroke();
        }
        Mood::Clap => {
            ctx.begin_path();
            ctx.arc(x - 8.0, y - 5.0, 3.0, 0.0, PI).ok();
            ctx.arc(x + 8.0, y - 5.0, 3.0, 0.0, PI).ok();
            ctx.stroke();

            ctx.begin_path();
            ctx.arc(x, y + 8.0, 7.0, 0.3, PI - 0.3).ok();
            ctx.stroke();
        }
        Mood::SideEye => {
            ctx.begin_path();
            circle(ctx, x - 8.0, y - 5.0, 3.0);
            ctx.fill();
            ctx.begin_path();
            circle(ctx, x + 8.0, y - 3.0, 3.0);
            ctx.fill();

            // Glint on the eye looking away
            ctx.set_fill_style_str("#fff");
            ctx.begin_path();
            circle(ctx, x + 10.0, y - 3.0, 1.5);
            ctx.fill();

            ctx.begin_path();
            ctx.move_to(x - 3.0, y + 8.0);
            ctx.line_to(x + 8.0, y + 8.0);
            ctx.stroke();
        }
    }
}
