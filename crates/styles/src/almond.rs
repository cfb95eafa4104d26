//! Blossoming almond branches against a soft green sky.

use crate::branch::{draw_branch, draw_flower};
use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::Surface;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

pub const STROKES: usize = 2000;

const BACKGROUND: Rgb = Rgb::from_u32(0x81C784);
const SCATTERED_FLOWERS: usize = 100;
const TRUNK_WIDTH: f64 = 10.0;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    surface.fill_background(Rgba::opaque(BACKGROUND));

    let stats = draw_branch(
        surface,
        ctx.rng,
        DVec2::new(w / 2.0, h),
        -FRAC_PI_2,
        h * 0.4,
        TRUNK_WIDTH,
    );
    log::debug!(
        "almond tree: {} segments, {} blossoms, depth {}",
        stats.segments,
        stats.flowers,
        stats.max_depth
    );

    for _ in 0..SCATTERED_FLOWERS {
        let center = DVec2::new(ctx.rng.next_f64() * w, ctx.rng.next_f64() * h * 0.7);
        draw_flower(surface, center, ctx.rng.next_range(5.0, 15.0));
    }

    ctx.brush_strokes(surface, STROKES);
}
