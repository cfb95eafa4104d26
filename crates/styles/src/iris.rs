//! A field of irises under a violet sky.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::{Ellipse, GradientStop, Surface};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_4, TAU};

pub const STROKES: usize = 3000;

const SKY_TOP: Rgb = Rgb::from_u32(0x5E35B1);
const SKY_BOTTOM: Rgb = Rgb::from_u32(0x3949AB);
const STEM: Rgb = Rgb::from_u32(0x0B6623);
const LEAF: Rgb = Rgb::from_u32(0x0B8A20);
const PETAL: Rgb = Rgb::from_u32(0x4B0082);
const HEART: Rgb = Rgb::from_u32(0xFFF5EE);

const IRIS_COUNT: usize = 15;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    surface.vertical_gradient_background(&[
        GradientStop::new(0.0, SKY_TOP),
        GradientStop::new(1.0, SKY_BOTTOM),
    ]);

    for _ in 0..IRIS_COUNT {
        let at = DVec2::new(ctx.rng.next_f64() * w, h * 0.3 + ctx.rng.next_f64() * h * 0.6);
        draw_iris(surface, at, ctx.rng.next_range(40.0, 70.0));
    }

    ctx.brush_strokes(surface, STROKES);
}

/// Stem, leaf, three petals and a pale heart, all scaled by `size`.
pub fn draw_iris(surface: &mut dyn Surface, at: DVec2, size: f64) {
    surface.stroke_line(at, at + DVec2::new(0.0, size * 2.0), 3.0, Rgba::opaque(STEM));

    surface.fill_ellipse(
        Ellipse::new(
            at + DVec2::new(-size / 3.0, size),
            size / 4.0,
            size,
            FRAC_PI_4,
        ),
        Rgba::opaque(LEAF),
    );

    for i in 0..3 {
        let angle = f64::from(i) * TAU / 3.0;
        let petal = at + DVec2::from_angle(angle) * (size / 3.0);
        surface.fill_ellipse(
            Ellipse::new(petal, size / 2.0, size / 4.0, angle),
            Rgba::opaque(PETAL),
        );
    }

    surface.fill_circle(at, size / 6.0, Rgba::opaque(HEART));
}
