//! Pixel-backed [`Surface`] implementation on top of a raqote `DrawTarget`.
//!
//! raqote stores premultiplied ARGB in native-endian `u32`s; [`RasterSurface::into_texture`]
//! unpacks that into a straight-alpha RGBA8 [`Texture`]. All clipping is done
//! by the rasterizer, so no operation can touch memory outside the buffer.

use crate::color::{Rgb, Rgba};
use crate::descriptor::StyleKind;
use crate::error::TextureError;
use crate::geometry;
use crate::surface::{Ellipse, GradientStop, PathCmd, Rect, Surface};
use crate::texture::Texture;
use glam::DVec2;
use raqote::{
    DrawOptions, DrawTarget, Gradient, Path, PathBuilder, Point, SolidSource, Source, Spread,
    StrokeStyle,
};

/// Largest accepted side length, in pixels.
pub const MAX_SURFACE_DIMENSION: i32 = 8192;

/// A raster drawing surface exclusively owned by one generation call.
pub struct RasterSurface {
    target: DrawTarget,
    options: DrawOptions,
}

impl RasterSurface {
    /// Allocates a transparent `width` x `height` surface.
    ///
    /// Fails with `InvalidDimensions` for non-positive sides and with
    /// `SurfaceAllocation` for sides above [`MAX_SURFACE_DIMENSION`].
    pub fn try_new(width: i32, height: i32) -> Result<Self, TextureError> {
        if width <= 0 || height <= 0 {
            return Err(TextureError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(TextureError::SurfaceAllocation(format!(
                "{width}x{height} exceeds the {MAX_SURFACE_DIMENSION}px limit"
            )));
        }
        Ok(Self {
            target: DrawTarget::new(width, height),
            options: DrawOptions::new(),
        })
    }

    /// Consumes the surface and produces an owned straight-alpha RGBA8 texture.
    pub fn into_texture(self, style: StyleKind, color: Rgb) -> Texture {
        let width = self.target.width() as u32;
        let height = self.target.height() as u32;
        let rgba = self
            .target
            .get_data()
            .iter()
            .flat_map(|&px| unpremultiply(px))
            .collect();
        Texture::from_rgba(width, height, style, color, rgba)
    }

    fn fill(&mut self, path: &Path, source: &Source) {
        self.target.fill(path, source, &self.options);
    }

    fn stroke(&mut self, path: &Path, width: f64, color: Rgba) {
        let style = StrokeStyle {
            width: width.max(0.0) as f32,
            ..StrokeStyle::default()
        };
        self.target
            .stroke(path, &solid(color), &style, &self.options);
    }
}

/// Converts one premultiplied `0xAARRGGBB` pixel to straight RGBA bytes.
fn unpremultiply(px: u32) -> [u8; 4] {
    let a = (px >> 24) & 0xff;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |shift: u32| {
        let c = (px >> shift) & 0xff;
        ((c * 255 + a / 2) / a).min(255) as u8
    };
    [channel(16), channel(8), channel(0), a as u8]
}

fn solid(color: Rgba) -> Source<'static> {
    Source::Solid(SolidSource::from_unpremultiplied_argb(
        color.alpha_u8(),
        color.rgb.r,
        color.rgb.g,
        color.rgb.b,
    ))
}

fn gradient(stops: &[GradientStop]) -> Gradient {
    Gradient {
        stops: stops
            .iter()
            .map(|s| raqote::GradientStop {
                position: s.position.clamp(0.0, 1.0) as f32,
                color: raqote::Color::new(
                    s.color.alpha_u8(),
                    s.color.rgb.r,
                    s.color.rgb.g,
                    s.color.rgb.b,
                ),
            })
            .collect(),
    }
}

fn point(p: DVec2) -> Point {
    Point::new(p.x as f32, p.y as f32)
}

fn build_path(cmds: &[PathCmd]) -> Path {
    let mut pb = PathBuilder::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathCmd::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathCmd::CubicTo { ctrl1, ctrl2, to } => pb.cubic_to(
                ctrl1.x as f32,
                ctrl1.y as f32,
                ctrl2.x as f32,
                ctrl2.y as f32,
                to.x as f32,
                to.y as f32,
            ),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}

fn rect_path(rect: Rect) -> Path {
    let mut pb = PathBuilder::new();
    pb.rect(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    );
    pb.finish()
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        f64::from(self.target.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.target.height())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fill(&rect_path(rect), &solid(color));
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        let path = build_path(&[PathCmd::MoveTo(from), PathCmd::LineTo(to)]);
        self.stroke(&path, width, color);
    }

    fn fill_ellipse(&mut self, e: Ellipse, color: Rgba) {
        let path = build_path(&geometry::ellipse(e.center, e.radius_x, e.radius_y, e.rotation));
        self.fill(&path, &solid(color));
    }

    fn stroke_ellipse(&mut self, e: Ellipse, width: f64, color: Rgba) {
        let path = build_path(&geometry::ellipse(e.center, e.radius_x, e.radius_y, e.rotation));
        self.stroke(&path, width, color);
    }

    fn fill_arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, color: Rgba) {
        let mut cmds = geometry::arc(center, radius, start, end);
        cmds.push(PathCmd::Close);
        self.fill(&build_path(&cmds), &solid(color));
    }

    fn stroke_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Rgba,
    ) {
        let path = build_path(&geometry::arc(center, radius, start, end));
        self.stroke(&path, width, color);
    }

    fn fill_path(&mut self, path: &[PathCmd], color: Rgba) {
        self.fill(&build_path(path), &solid(color));
    }

    fn stroke_path(&mut self, path: &[PathCmd], width: f64, color: Rgba) {
        self.stroke(&build_path(path), width, color);
    }

    fn linear_gradient_fill(&mut self, rect: Rect, from: DVec2, to: DVec2, stops: &[GradientStop]) {
        let source =
            Source::new_linear_gradient(gradient(stops), point(from), point(to), Spread::Pad);
        self.fill(&rect_path(rect), &source);
    }

    fn radial_gradient_fill(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        let source =
            Source::new_radial_gradient(gradient(stops), point(center), radius as f32, Spread::Pad);
        let mut cmds = geometry::arc(center, radius, 0.0, std::f64::consts::TAU);
        cmds.push(PathCmd::Close);
        self.fill(&build_path(&cmds), &source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_at(t: &Texture, x: u32, y: u32) -> [u8; 4] {
        t.pixel(x, y).expect("pixel in bounds")
    }

    #[test]
    fn try_new_rejects_degenerate_sizes() {
        assert!(matches!(
            RasterSurface::try_new(0, 10),
            Err(TextureError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            RasterSurface::try_new(10, -3),
            Err(TextureError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn try_new_rejects_oversized_surfaces() {
        assert!(matches!(
            RasterSurface::try_new(MAX_SURFACE_DIMENSION + 1, 4),
            Err(TextureError::SurfaceAllocation(_))
        ));
    }

    #[test]
    fn fresh_surface_is_transparent() {
        let s = RasterSurface::try_new(4, 3).unwrap();
        let t = s.into_texture(StyleKind::Generic, Rgb::BLACK);
        assert_eq!(t.pixel_count(), 12);
        assert!(t.rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_background_covers_every_pixel() {
        let mut s = RasterSurface::try_new(16, 8).unwrap();
        let c = Rgb::from_u32(0xFDB813);
        s.fill_background(Rgba::opaque(c));
        let t = s.into_texture(StyleKind::Sunflower, c);
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(rgb_at(&t, x, y), [0xfd, 0xb8, 0x13, 255], "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn out_of_bounds_geometry_is_clipped() {
        let mut s = RasterSurface::try_new(8, 8).unwrap();
        s.fill_rect(Rect::new(-100.0, -100.0, 50.0, 50.0), Rgba::opaque(Rgb::WHITE));
        s.stroke_line(
            DVec2::new(-1e4, -1e4),
            DVec2::new(-2e4, 3e4),
            4.0,
            Rgba::opaque(Rgb::WHITE),
        );
        s.fill_circle(DVec2::new(1e5, 1e5), 10.0, Rgba::opaque(Rgb::WHITE));
        let t = s.into_texture(StyleKind::Generic, Rgb::BLACK);
        assert!(t.rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_circle_covers_center_not_corner() {
        let mut s = RasterSurface::try_new(32, 32).unwrap();
        s.fill_circle(DVec2::new(16.0, 16.0), 8.0, Rgba::opaque(Rgb::WHITE));
        let t = s.into_texture(StyleKind::Generic, Rgb::BLACK);
        assert_eq!(rgb_at(&t, 16, 16), [255, 255, 255, 255]);
        assert_eq!(rgb_at(&t, 1, 1)[3], 0);
    }

    #[test]
    fn vertical_gradient_runs_top_to_bottom() {
        let mut s = RasterSurface::try_new(4, 100).unwrap();
        s.vertical_gradient_background(&[
            GradientStop::new(0.0, Rgb::BLACK),
            GradientStop::new(1.0, Rgb::WHITE),
        ]);
        let t = s.into_texture(StyleKind::Generic, Rgb::BLACK);
        let top = rgb_at(&t, 2, 0);
        let bottom = rgb_at(&t, 2, 99);
        assert!(top[0] < 10, "top should be near black: {top:?}");
        assert!(bottom[0] > 245, "bottom should be near white: {bottom:?}");
        assert_eq!(top[3], 255);
    }

    #[test]
    fn translucent_fill_unpremultiplies_back_to_source_color() {
        let mut s = RasterSurface::try_new(4, 4).unwrap();
        s.fill_background(Rgba::new(200, 100, 50, 0.5));
        let t = s.into_texture(StyleKind::Generic, Rgb::BLACK);
        let [r, g, b, a] = rgb_at(&t, 1, 1);
        assert!((127..=128).contains(&a), "alpha {a}");
        assert!((i32::from(r) - 200).abs() <= 2, "r {r}");
        assert!((i32::from(g) - 100).abs() <= 2, "g {g}");
        assert!((i32::from(b) - 50).abs() <= 2, "b {b}");
    }

    #[test]
    fn unpremultiply_handles_extremes() {
        assert_eq!(unpremultiply(0), [0, 0, 0, 0]);
        assert_eq!(unpremultiply(0xff12_3456), [0x12, 0x34, 0x56, 0xff]);
    }
}
