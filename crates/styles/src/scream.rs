//! A wailing figure on a bridge beneath a burning sky.

use crate::PaintContext;
use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::surface::{Ellipse, GradientStop, PathCmd, Surface};
use glam::DVec2;
use std::f64::consts::FRAC_PI_4;

pub const STROKES: usize = 3000;

const SKY: [(f64, Rgb); 3] = [
    (0.0, Rgb::from_u32(0xFF5722)),
    (0.5, Rgb::from_u32(0xE64A19)),
    (1.0, Rgb::from_u32(0xBF360C)),
];
const BRIDGE: Rgb = Rgb::from_u32(0x3E2723);
const FIGURE: Rgb = Rgb::from_u32(0x455A64);
const FACE: Rgb = Rgb::from_u32(0xECEFF1);

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    let (w, h) = (surface.width(), surface.height());
    let cx = w / 2.0;
    let stops = SKY.map(|(position, color)| GradientStop::new(position, color));
    surface.vertical_gradient_background(&stops);

    surface.fill_polygon(
        &[
            DVec2::new(0.0, h * 0.7),
            DVec2::new(w, h * 0.7),
            DVec2::new(w, h * 0.8),
            DVec2::new(0.0, h * 0.8),
        ],
        Rgba::opaque(BRIDGE),
    );

    let figure = Rgba::opaque(FIGURE);
    surface.fill_ellipse(
        Ellipse::upright(DVec2::new(cx, h * 0.4), w * 0.1, h * 0.15),
        figure,
    );
    let torso = [
        PathCmd::MoveTo(DVec2::new(cx, h * 0.55)),
        PathCmd::CubicTo {
            ctrl1: DVec2::new(cx - w * 0.1, h * 0.6),
            ctrl2: DVec2::new(cx - w * 0.1, h * 0.65),
            to: DVec2::new(cx, h * 0.7),
        },
        PathCmd::CubicTo {
            ctrl1: DVec2::new(cx + w * 0.1, h * 0.65),
            ctrl2: DVec2::new(cx + w * 0.1, h * 0.6),
            to: DVec2::new(cx, h * 0.55),
        },
        PathCmd::Close,
    ];
    surface.fill_path(&torso, figure);
    for (dx, rotation) in [(-w * 0.15, FRAC_PI_4), (w * 0.15, -FRAC_PI_4)] {
        surface.fill_ellipse(
            Ellipse::new(DVec2::new(cx + dx, h * 0.5), w * 0.05, h * 0.1, rotation),
            figure,
        );
    }

    surface.fill_ellipse(
        Ellipse::upright(DVec2::new(cx, h * 0.4), w * 0.08, h * 0.12),
        Rgba::opaque(FACE),
    );
    let black = Rgba::opaque(Rgb::BLACK);
    for dx in [-w * 0.03, w * 0.03] {
        surface.fill_ellipse(
            Ellipse::upright(DVec2::new(cx + dx, h * 0.37), w * 0.02, h * 0.02),
            black,
        );
    }
    surface.fill_ellipse(
        Ellipse::upright(DVec2::new(cx, h * 0.45), w * 0.04, h * 0.06),
        black,
    );

    ctx.brush_strokes(surface, STROKES);
}
