//! A quiet half-length portrait: dark hair framing a pale face, a faint smile.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::{Ellipse, Surface};
use glam::DVec2;
use std::f64::consts::PI;

pub const STROKES: usize = 2000;

const BACKGROUND: Rgb = Rgb::from_u32(0x795548);
const SKIN: Rgb = Rgb::from_u32(0xE0C9A6);
const HAIR: Rgb = Rgb::from_u32(0x3E2723);
const ROBE: Rgb = Rgb::from_u32(0x5D4037);

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    let cx = w / 2.0;
    surface.fill_background(Rgba::opaque(BACKGROUND));

    let face = Ellipse::upright(DVec2::new(cx, h * 0.4), w * 0.15, h * 0.2);
    // The face goes down twice: once as a base, then again over the hair.
    surface.fill_ellipse(face, Rgba::opaque(SKIN));
    surface.fill_ellipse(
        Ellipse::upright(DVec2::new(cx, h * 0.35), w * 0.2, h * 0.25),
        Rgba::opaque(HAIR),
    );
    surface.fill_ellipse(face, Rgba::opaque(SKIN));

    for dx in [-w * 0.05, w * 0.05] {
        surface.fill_ellipse(
            Ellipse::upright(DVec2::new(cx + dx, h * 0.35), w * 0.02, h * 0.01),
            Rgba::opaque(HAIR),
        );
    }

    surface.stroke_arc(
        DVec2::new(cx, h * 0.45),
        w * 0.05,
        0.1,
        PI - 0.1,
        2.0,
        Rgba::opaque(HAIR),
    );

    surface.fill_polygon(
        &[
            DVec2::new(cx - w * 0.2, h * 0.6),
            DVec2::new(cx + w * 0.2, h * 0.6),
            DVec2::new(cx + w * 0.3, h),
            DVec2::new(cx - w * 0.3, h),
        ],
        Rgba::opaque(ROBE),
    );

    ctx.brush_strokes(surface, STROKES);
}
