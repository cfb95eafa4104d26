//! Fallback style: the artwork's own color, worked over with brush strokes.

use crate::PaintContext;
use canvas_gallery_core::color::Rgba;
use canvas_gallery_core::surface::Surface;

pub const STROKES: usize = 3000;

pub fn paint(surface: &mut dyn Surface, ctx: &mut PaintContext<'_>) {
    surface.fill_background(Rgba::opaque(ctx.base));
    ctx.brush_strokes(surface, STROKES);
}
