#![deny(unsafe_code)]
//! Style generators: turn an [`ArtworkDescriptor`] into a painted [`Texture`].
//!
//! Every style is a plain function over `&mut dyn Surface` that paints a
//! background, draws its foreground repertoire and finishes with the shared
//! brush-stroke overlay. [`generator`] is the closed dispatch table from
//! [`StyleKind`] to those functions; [`generate`] wraps it with surface
//! allocation and texture conversion.

pub mod almond;
pub mod branch;
pub mod brush;
pub mod cafe;
pub mod generic;
pub mod iris;
pub mod portrait;
pub mod scream;
pub mod starry;
pub mod sunflower;

#[cfg(feature = "png")]
pub mod snapshot;

use brush::{apply_brush_strokes, BrushSettings};
use canvas_gallery_core::color::Rgb;
use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};
use canvas_gallery_core::prng::Xorshift64;
use canvas_gallery_core::raster::RasterSurface;
use canvas_gallery_core::surface::Surface;
use canvas_gallery_core::texture::Texture;

/// Keys of every style, in dispatch order.
const STYLE_NAMES: &[&str] = &[
    "starry",
    "sunflower",
    "almond",
    "iris",
    "cafe",
    "portrait",
    "scream",
    "generic",
];

/// Per-call inputs shared by all generators.
pub struct PaintContext<'a> {
    pub rng: &'a mut Xorshift64,
    /// The artwork's base color; only the brush overlay and the generic style use it.
    pub base: Rgb,
    pub brush: &'a BrushSettings,
}

impl PaintContext<'_> {
    /// Runs the brush overlay, using `style_default` strokes unless the
    /// settings override the count.
    pub fn brush_strokes(&mut self, surface: &mut dyn Surface, style_default: usize) {
        let count = self.brush.stroke_count(style_default);
        apply_brush_strokes(surface, self.rng, self.base, self.brush, count);
    }
}

/// Signature shared by every style generator.
pub type GeneratorFn = fn(&mut dyn Surface, &mut PaintContext<'_>);

/// Returns the generator for `style`.
pub fn generator(style: StyleKind) -> GeneratorFn {
    match style {
        StyleKind::Starry => starry::paint,
        StyleKind::Sunflower => sunflower::paint,
        StyleKind::Almond => almond::paint,
        StyleKind::Iris => iris::paint,
        StyleKind::Cafe => cafe::paint,
        StyleKind::Portrait => portrait::paint,
        StyleKind::Scream => scream::paint,
        StyleKind::Generic => generic::paint,
    }
}

/// Returns a slice of all recognized style keys.
pub fn list_styles() -> &'static [&'static str] {
    STYLE_NAMES
}

/// Runs the `style` generator on any surface.
pub fn paint(surface: &mut dyn Surface, style: StyleKind, ctx: &mut PaintContext<'_>) {
    generator(style)(surface, ctx);
}

/// Paints a full texture for `descriptor` with randomness drawn from `seed`.
///
/// Never fails: degenerate dimensions and allocation failures yield
/// [`Texture::empty`].
pub fn generate(descriptor: &ArtworkDescriptor, brush: &BrushSettings, seed: u64) -> Texture {
    let ArtworkDescriptor {
        color,
        style,
        width,
        height,
    } = *descriptor;

    if let Err(e) = descriptor.validate() {
        log::debug!("{e}; returning empty {style} texture");
        return Texture::empty(style, color);
    }
    let mut surface = match RasterSurface::try_new(width, height) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("{e}; returning empty {style} texture");
            return Texture::empty(style, color);
        }
    };

    let mut rng = Xorshift64::new(seed);
    let mut ctx = PaintContext {
        rng: &mut rng,
        base: color,
        brush,
    };
    paint(&mut surface, style, &mut ctx);
    log::debug!("generated {style} texture {width}x{height} for {}", color.to_hex());
    surface.into_texture(style, color)
}
