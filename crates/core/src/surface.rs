//! The drawing-surface abstraction every style generator paints onto.
//!
//! The trait is object-safe so generators take `&mut dyn Surface` and can be
//! pointed at either the pixel-backed [`RasterSurface`](crate::raster::RasterSurface)
//! or the call-recording [`RecordingSurface`](crate::recording::RecordingSurface).
//!
//! Coordinates are in pixels with the origin at the top-left corner and `y`
//! growing downward. Geometry outside the surface is clipped, never an error.

use crate::color::Rgba;
use crate::geometry;
use glam::DVec2;
use std::f64::consts::TAU;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Ellipse with independent radii, rotated by `rotation` radians about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: DVec2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
}

impl Ellipse {
    pub fn new(center: DVec2, radius_x: f64, radius_y: f64, rotation: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            rotation,
        }
    }

    /// Axis-aligned ellipse.
    pub fn upright(center: DVec2, radius_x: f64, radius_y: f64) -> Self {
        Self::new(center, radius_x, radius_y, 0.0)
    }
}

/// Cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: DVec2,
    pub ctrl1: DVec2,
    pub ctrl2: DVec2,
    pub to: DVec2,
}

/// One command of a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    Close,
}

/// Color stop of a gradient. `position` is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(position: f64, color: impl Into<Rgba>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

/// A 2D drawing surface exposing the primitive operations style generators use.
///
/// Each generation call owns its surface exclusively; implementations need no
/// interior synchronization.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Rgba);

    fn stroke_ellipse(&mut self, ellipse: Ellipse, width: f64, color: Rgba);

    /// Fills the region bounded by the arc from `start` to `end` (radians,
    /// clockwise on screen) and its chord. A full turn fills a disc.
    fn fill_arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, color: Rgba);

    fn stroke_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Rgba,
    );

    /// Fills a closed outline using the non-zero winding rule.
    fn fill_path(&mut self, path: &[PathCmd], color: Rgba);

    fn stroke_path(&mut self, path: &[PathCmd], width: f64, color: Rgba);

    fn stroke_bezier(&mut self, bezier: CubicBezier, width: f64, color: Rgba) {
        let path = [
            PathCmd::MoveTo(bezier.from),
            PathCmd::CubicTo {
                ctrl1: bezier.ctrl1,
                ctrl2: bezier.ctrl2,
                to: bezier.to,
            },
        ];
        self.stroke_path(&path, width, color);
    }

    /// Fills `rect` with a linear gradient running from `from` to `to`.
    /// Colors beyond the end stops are padded.
    fn linear_gradient_fill(&mut self, rect: Rect, from: DVec2, to: DVec2, stops: &[GradientStop]);

    /// Fills the disc of `radius` around `center` with a radial gradient
    /// (position 0 at the center, 1 at the rim).
    fn radial_gradient_fill(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]);

    /// Filled disc; shorthand for a full-turn [`Surface::fill_arc`].
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.fill_arc(center, radius, 0.0, TAU, color);
    }

    /// Fills the whole surface with a flat color.
    fn fill_background(&mut self, color: Rgba) {
        let rect = Rect::new(0.0, 0.0, self.width(), self.height());
        self.fill_rect(rect, color);
    }

    /// Fills the whole surface with a top-to-bottom gradient.
    fn vertical_gradient_background(&mut self, stops: &[GradientStop]) {
        let (w, h) = (self.width(), self.height());
        self.linear_gradient_fill(
            Rect::new(0.0, 0.0, w, h),
            DVec2::ZERO,
            DVec2::new(0.0, h),
            stops,
        );
    }

    /// Fills a closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) {
        self.fill_path(&geometry::polygon(points), color);
    }
}
