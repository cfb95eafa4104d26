//! A café terrace at night: lit windows, round tables and a starry strip of sky.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::{GradientStop, Rect, Surface};
use glam::DVec2;
use std::f64::consts::TAU;

pub const STROKES: usize = 3000;

const SKY_TOP: Rgb = Rgb::from_u32(0x0a1a3f);
const SKY_MID: Rgb = Rgb::from_u32(0x1a237e);
const STARLIGHT: Rgba = Rgba {
    rgb: Rgb::new(255, 255, 200),
    alpha: 0.8,
};
const BUILDING: Rgb = Rgb::from_u32(0x4E3B31);
const LAMPLIGHT: Rgb = Rgb::from_u32(0xFFF59D);
const TERRACE: Rgb = Rgb::from_u32(0x8D6E63);
const CHAIR: Rgb = Rgb::from_u32(0xD7CCC8);

const STAR_COUNT: usize = 50;
const WINDOW_COUNT: usize = 5;
const TABLE_COUNT: usize = 3;
const CHAIRS_PER_TABLE: usize = 3;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    surface.vertical_gradient_background(&[
        GradientStop::new(0.0, SKY_TOP),
        GradientStop::new(0.5, SKY_MID),
    ]);

    for _ in 0..STAR_COUNT {
        let center = DVec2::new(ctx.rng.next_f64() * w, ctx.rng.next_f64() * h * 0.4);
        surface.fill_circle(center, ctx.rng.next_range(1.0, 3.0), STARLIGHT);
    }

    surface.fill_rect(
        Rect::new(w * 0.1, h * 0.4, w * 0.8, h * 0.6),
        Rgba::opaque(BUILDING),
    );
    for i in 0..WINDOW_COUNT {
        let x = w * 0.2 + i as f64 * w * 0.15;
        surface.fill_rect(
            Rect::new(x, h * 0.5, w * 0.1, h * 0.15),
            Rgba::opaque(LAMPLIGHT),
        );
    }

    surface.fill_rect(
        Rect::new(w * 0.2, h * 0.7, w * 0.6, h * 0.3),
        Rgba::opaque(TERRACE),
    );

    for i in 0..TABLE_COUNT {
        let table = DVec2::new(w * 0.3 + i as f64 * w * 0.2, h * 0.8);
        surface.fill_circle(table, w * 0.05, Rgba::opaque(LAMPLIGHT));
        for j in 0..CHAIRS_PER_TABLE {
            let angle = j as f64 * TAU / CHAIRS_PER_TABLE as f64;
            let chair = table + DVec2::from_angle(angle) * (w * 0.08);
            surface.fill_circle(chair, w * 0.02, Rgba::opaque(CHAIR));
        }
    }

    ctx.brush_strokes(surface, STROKES);
}
