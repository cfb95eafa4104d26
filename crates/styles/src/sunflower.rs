//! A vase of sunflowers on a golden ground.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::{Ellipse, PathCmd, Surface};
use glam::DVec2;
use std::f64::consts::TAU;

pub const STROKES: usize = 3000;

pub const BACKGROUND: Rgb = Rgb::from_u32(0xFDB813);
const VASE: Rgb = Rgb::from_u32(0x964B00);
const PETAL: Rgb = Rgb::from_u32(0xFFA500);
const DISC: Rgb = Rgb::from_u32(0x654321);
const SEED: Rgb = Rgb::from_u32(0x543210);

const HEAD_COUNT: usize = 7;
const PETALS_PER_HEAD: usize = 20;
const SEEDS_PER_HEAD: usize = 100;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    surface.fill_background(Rgba::opaque(BACKGROUND));
    draw_vase(surface, w, h);

    for _ in 0..HEAD_COUNT {
        let center = DVec2::new(
            w / 2.0 + (ctx.rng.next_f64() - 0.5) * w * 0.3,
            h * 0.25 + (ctx.rng.next_f64() - 0.5) * h * 0.2,
        );
        let radius = ctx.rng.next_range(30.0, 80.0);
        draw_head(surface, ctx, center, radius);
    }

    ctx.brush_strokes(surface, STROKES);
}

fn draw_vase(surface: &mut dyn Surface, w: f64, h: f64) {
    let color = Rgba::opaque(VASE);
    let cx = w / 2.0;
    surface.fill_ellipse(
        Ellipse::upright(DVec2::new(cx, h * 0.8), w * 0.2, h * 0.05),
        color,
    );
    let body = [
        PathCmd::MoveTo(DVec2::new(cx - w * 0.15, h * 0.8)),
        PathCmd::CubicTo {
            ctrl1: DVec2::new(cx - w * 0.2, h * 0.6),
            ctrl2: DVec2::new(cx - w * 0.1, h * 0.4),
            to: DVec2::new(cx - w * 0.1, h * 0.3),
        },
        PathCmd::LineTo(DVec2::new(cx + w * 0.1, h * 0.3)),
        PathCmd::CubicTo {
            ctrl1: DVec2::new(cx + w * 0.1, h * 0.4),
            ctrl2: DVec2::new(cx + w * 0.2, h * 0.6),
            to: DVec2::new(cx + w * 0.15, h * 0.8),
        },
        PathCmd::Close,
    ];
    surface.fill_path(&body, color);
}

/// Petal ring, seed disc and speckled seeds of one flower head.
fn draw_head(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>, center: DVec2, radius: f64) {
    let petal_length = radius * 0.8;
    let half_width = TAU / PETALS_PER_HEAD as f64 / 2.0;
    for j in 0..PETALS_PER_HEAD {
        let angle = j as f64 * TAU / PETALS_PER_HEAD as f64;
        let petal = [
            center + DVec2::from_angle(angle - half_width) * radius,
            center + DVec2::from_angle(angle) * (radius + petal_length),
            center + DVec2::from_angle(angle + half_width) * radius,
        ];
        surface.fill_polygon(&petal, Rgba::opaque(PETAL));
    }

    surface.fill_circle(center, radius * 0.7, Rgba::opaque(DISC));

    for _ in 0..SEEDS_PER_HEAD {
        let angle = ctx.rng.next_angle();
        let dist = ctx.rng.next_f64() * radius * 0.6;
        let size = ctx.rng.next_range(2.0, 6.0);
        surface.fill_circle(
            center + DVec2::from_angle(angle) * dist,
            size,
            Rgba::opaque(SEED),
        );
    }
}
