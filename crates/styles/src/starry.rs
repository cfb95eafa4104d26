//! Night sky over a sleeping village: glowing stars, spiral nebulae, houses
//! with lit windows and cypress silhouettes.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::geometry;
use canvas_gallery_core::surface::{GradientStop, Rect, Surface};
use glam::DVec2;
use std::f64::consts::TAU;

pub const STROKES: usize = 3000;

const SKY_TOP: Rgb = Rgb::from_u32(0x0a1a3f);
const SKY_BOTTOM: Rgb = Rgb::from_u32(0x1a237e);
const STARLIGHT: Rgb = Rgb::new(255, 255, 200);
const VILLAGE: Rgb = Rgb::from_u32(0x000011);
const HOUSE: Rgb = Rgb::from_u32(0x111111);
const WINDOW: Rgba = Rgba {
    rgb: Rgb::new(255, 255, 150),
    alpha: 0.5,
};
const CYPRESS: Rgb = Rgb::from_u32(0x00aa33);

const STAR_COUNT: usize = 100;
const NEBULA_COUNT: usize = 5;
const RINGS_PER_NEBULA: usize = 20;
const HOUSE_COUNT: usize = 10;
const CYPRESS_COUNT: usize = 3;
/// Fraction of the height where the village band starts.
const HORIZON: f64 = 0.7;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    surface.vertical_gradient_background(&[
        GradientStop::new(0.0, SKY_TOP),
        GradientStop::new(1.0, SKY_BOTTOM),
    ]);

    for _ in 0..STAR_COUNT {
        let center = DVec2::new(ctx.rng.next_f64() * w, ctx.rng.next_f64() * h * HORIZON);
        let radius = ctx.rng.next_range(1.0, 4.0);
        surface.radial_gradient_fill(
            center,
            radius * 3.0,
            &[
                GradientStop::new(0.0, STARLIGHT.with_alpha(0.8)),
                GradientStop::new(1.0, STARLIGHT.with_alpha(0.0)),
            ],
        );
        surface.fill_circle(center, radius, STARLIGHT.with_alpha(0.8));
    }

    for _ in 0..NEBULA_COUNT {
        let center = DVec2::new(ctx.rng.next_f64() * w, ctx.rng.next_f64() * h * 0.5);
        let radius_x = ctx.rng.next_range(50.0, 150.0);
        let radius_y = ctx.rng.next_range(50.0, 150.0);
        draw_nebula(surface, center, radius_x, radius_y);
    }

    surface.fill_rect(
        Rect::new(0.0, h * HORIZON, w, h * (1.0 - HORIZON)),
        Rgba::opaque(VILLAGE),
    );

    let ground = h * HORIZON;
    for i in 0..HOUSE_COUNT {
        let x = i as f64 * (w / HOUSE_COUNT as f64) + ctx.rng.next_f64() * 20.0;
        let house_w = ctx.rng.next_range(20.0, 50.0);
        let house_h = ctx.rng.next_range(20.0, 50.0);
        surface.fill_rect(
            Rect::new(x, ground - house_h, house_w, house_h),
            Rgba::opaque(HOUSE),
        );
        if ctx.rng.chance(0.5) {
            surface.fill_rect(
                Rect::new(
                    x + house_w * 0.3,
                    ground - house_h * 0.6,
                    house_w * 0.4,
                    house_h * 0.3,
                ),
                WINDOW,
            );
        }
    }

    for _ in 0..CYPRESS_COUNT {
        let x = ctx.rng.next_f64() * w;
        let tree_h = 100.0 + ctx.rng.next_f64() * 50.0;
        surface.fill_polygon(
            &[
                DVec2::new(x, ground),
                DVec2::new(x + 20.0, ground),
                DVec2::new(x + 10.0, ground - tree_h),
            ],
            Rgba::opaque(CYPRESS),
        );
    }

    ctx.brush_strokes(surface, STROKES);
}

/// Concentric inward spirals, each ring 5px tighter than the last.
fn draw_nebula(surface: &mut dyn Surface, center: DVec2, mut radius_x: f64, mut radius_y: f64) {
    let color = STARLIGHT.with_alpha(0.5);
    for _ in 0..RINGS_PER_NEBULA {
        let points = spiral(center, radius_x, radius_y);
        surface.stroke_path(&geometry::polyline(&points), 2.0, color);
        radius_x -= 5.0;
        radius_y -= 5.0;
        if radius_x <= 0.0 || radius_y <= 0.0 {
            break;
        }
    }
}

/// Samples a two-turn spiral whose radius decays linearly to zero.
fn spiral(center: DVec2, radius_x: f64, radius_y: f64) -> Vec<DVec2> {
    const STEP: f64 = 0.1;
    let turns = 2.0 * TAU;
    let samples = (turns / STEP).ceil() as usize;
    (0..samples)
        .map(|i| i as f64 * STEP)
        .map(|angle| {
            let decay = 1.0 - angle / turns;
            center + DVec2::new(angle.cos() * radius_x, angle.sin() * radius_y) * decay
        })
        .collect()
}
