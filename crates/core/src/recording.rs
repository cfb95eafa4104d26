//! A [`Surface`] that records draw calls instead of rasterizing them.
//!
//! Used by tests to assert on what a generator drew and by the CLI `inspect`
//! subcommand to summarize a style's draw repertoire.

use crate::color::Rgba;
use crate::surface::{Ellipse, GradientStop, PathCmd, Rect, Surface};
use glam::DVec2;
use serde::Serialize;
use std::collections::BTreeMap;

/// Discriminant of a [`DrawCall`], used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    FillRect,
    StrokeLine,
    FillEllipse,
    StrokeEllipse,
    FillArc,
    StrokeArc,
    FillPath,
    StrokePath,
    LinearGradient,
    RadialGradient,
}

/// One recorded surface operation with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeLine {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
    },
    FillEllipse {
        ellipse: Ellipse,
        color: Rgba,
    },
    StrokeEllipse {
        ellipse: Ellipse,
        width: f64,
        color: Rgba,
    },
    FillArc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        color: Rgba,
    },
    StrokeArc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
        color: Rgba,
    },
    FillPath {
        path: Vec<PathCmd>,
        color: Rgba,
    },
    StrokePath {
        path: Vec<PathCmd>,
        width: f64,
        color: Rgba,
    },
    LinearGradient {
        rect: Rect,
        from: DVec2,
        to: DVec2,
        stops: Vec<GradientStop>,
    },
    RadialGradient {
        center: DVec2,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl DrawCall {
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCall::FillRect { .. } => DrawKind::FillRect,
            DrawCall::StrokeLine { .. } => DrawKind::StrokeLine,
            DrawCall::FillEllipse { .. } => DrawKind::FillEllipse,
            DrawCall::StrokeEllipse { .. } => DrawKind::StrokeEllipse,
            DrawCall::FillArc { .. } => DrawKind::FillArc,
            DrawCall::StrokeArc { .. } => DrawKind::StrokeArc,
            DrawCall::FillPath { .. } => DrawKind::FillPath,
            DrawCall::StrokePath { .. } => DrawKind::StrokePath,
            DrawCall::LinearGradient { .. } => DrawKind::LinearGradient,
            DrawCall::RadialGradient { .. } => DrawKind::RadialGradient,
        }
    }
}

/// In-memory surface of a fixed logical size that keeps every call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn count(&self, kind: DrawKind) -> usize {
        self.calls.iter().filter(|c| c.kind() == kind).count()
    }

    /// Per-kind totals, ordered by kind.
    pub fn counts(&self) -> BTreeMap<DrawKind, usize> {
        let mut counts = BTreeMap::new();
        for call in &self.calls {
            *counts.entry(call.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Rgba) {
        self.calls.push(DrawCall::FillEllipse { ellipse, color });
    }

    fn stroke_ellipse(&mut self, ellipse: Ellipse, width: f64, color: Rgba) {
        self.calls.push(DrawCall::StrokeEllipse {
            ellipse,
            width,
            color,
        });
    }

    fn fill_arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, color: Rgba) {
        self.calls.push(DrawCall::FillArc {
            center,
            radius,
            start,
            end,
            color,
        });
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
        self.calls.push(DrawCall::StrokeArc {
            center,
            radius,
            start,
            end,
            width,
            color,
        });
    }

    fn fill_path(&mut self, path: &[PathCmd], color: Rgba) {
        self.calls.push(DrawCall::FillPath {
            path: path.to_vec(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &[PathCmd], width: f64, color: Rgba) {
        self.calls.push(DrawCall::StrokePath {
            path: path.to_vec(),
            width,
            color,
        });
    }

    fn linear_gradient_fill(&mut self, rect: Rect, from: DVec2, to: DVec2, stops: &[GradientStop]) {
        self.calls.push(DrawCall::LinearGradient {
            rect,
            from,
            to,
            stops: stops.to_vec(),
        });
    }

    fn radial_gradient_fill(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        self.calls.push(DrawCall::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::surface::CubicBezier;

    /// Compile-time check that `Surface` is object-safe.
    #[test]
    fn surface_is_object_safe() {
        fn _assert_object_safe(_: &dyn Surface) {}
        let s = RecordingSurface::new(10.0, 10.0);
        _assert_object_safe(&s);
    }

    #[test]
    fn records_calls_in_order() {
        let mut s = RecordingSurface::new(100.0, 50.0);
        let white = Rgba::opaque(Rgb::WHITE);
        s.fill_background(white);
        s.fill_circle(DVec2::new(5.0, 5.0), 2.0, white);
        s.stroke_line(DVec2::ZERO, DVec2::ONE, 1.0, white);

        let kinds: Vec<DrawKind> = s.calls().iter().map(DrawCall::kind).collect();
        assert_eq!(
            kinds,
            vec![DrawKind::FillRect, DrawKind::FillArc, DrawKind::StrokeLine]
        );
        assert_eq!(
            s.calls()[0],
            DrawCall::FillRect {
                rect: Rect::new(0.0, 0.0, 100.0, 50.0),
                color: white
            }
        );
    }

    #[test]
    fn default_methods_route_through_required_ones() {
        let mut s = RecordingSurface::new(10.0, 20.0);
        let c = Rgba::opaque(Rgb::BLACK);
        s.stroke_bezier(
            CubicBezier {
                from: DVec2::ZERO,
                ctrl1: DVec2::X,
                ctrl2: DVec2::Y,
                to: DVec2::ONE,
            },
            2.0,
            c,
        );
        s.fill_polygon(&[DVec2::ZERO, DVec2::X, DVec2::Y], c);
        s.vertical_gradient_background(&[GradientStop::new(0.0, Rgb::BLACK)]);
        assert_eq!(s.count(DrawKind::StrokePath), 1);
        assert_eq!(s.count(DrawKind::FillPath), 1);
        match &s.calls()[2] {
            DrawCall::LinearGradient { to, .. } => assert_eq!(*to, DVec2::new(0.0, 20.0)),
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn counts_group_by_kind() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        let c = Rgba::opaque(Rgb::WHITE);
        for _ in 0..3 {
            s.fill_ellipse(Ellipse::upright(DVec2::ZERO, 1.0, 1.0), c);
        }
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), c);
        let counts = s.counts();
        assert_eq!(counts.get(&DrawKind::FillEllipse), Some(&3));
        assert_eq!(counts.get(&DrawKind::FillRect), Some(&1));
        assert_eq!(counts.len(), 2);
        s.clear();
        assert!(s.is_empty());
    }
}
