//! Path construction helpers: polygons, polylines, and Bézier approximations
//! of elliptical arcs.
//!
//! Arcs are split into segments of at most a quarter turn, each approximated
//! by one cubic whose control arm is `4/3 * tan(θ/4)` of the radius. The
//! radial error stays below 0.03% of the radius.

use crate::surface::PathCmd;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Closed outline through `points`. Empty input yields an empty path.
pub fn polygon(points: &[DVec2]) -> Vec<PathCmd> {
    let mut path = polyline(points);
    if !path.is_empty() {
        path.push(PathCmd::Close);
    }
    path
}

/// Open outline through `points`.
pub fn polyline(points: &[DVec2]) -> Vec<PathCmd> {
    let mut iter = points.iter().copied();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut path = Vec::with_capacity(points.len());
    path.push(PathCmd::MoveTo(first));
    path.extend(iter.map(PathCmd::LineTo));
    path
}

/// Point on a rotated ellipse at parametric angle `theta`.
pub fn ellipse_point(center: DVec2, rx: f64, ry: f64, rotation: f64, theta: f64) -> DVec2 {
    let local = DVec2::new(rx * theta.cos(), ry * theta.sin());
    center + DVec2::from_angle(rotation).rotate(local)
}

/// Open path along a rotated elliptical arc from `start` to `end` (radians).
///
/// Sweeps longer than a full turn are clamped to one turn; a reversed range
/// sweeps backwards.
pub fn elliptical_arc(
    center: DVec2,
    rx: f64,
    ry: f64,
    rotation: f64,
    start: f64,
    end: f64,
) -> Vec<PathCmd> {
    let sweep = (end - start).clamp(-TAU, TAU);
    let segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let step = sweep / segments as f64;
    let arm = 4.0 / 3.0 * (step / 4.0).tan();
    let rot = DVec2::from_angle(rotation);
    // Derivative of the parametric ellipse, rotated into place.
    let tangent = |theta: f64| rot.rotate(DVec2::new(-rx * theta.sin(), ry * theta.cos()));

    let mut path = Vec::with_capacity(segments + 1);
    path.push(PathCmd::MoveTo(ellipse_point(center, rx, ry, rotation, start)));
    for i in 0..segments {
        let a0 = start + step * i as f64;
        let a1 = a0 + step;
        let p0 = ellipse_point(center, rx, ry, rotation, a0);
        let p1 = ellipse_point(center, rx, ry, rotation, a1);
        path.push(PathCmd::CubicTo {
            ctrl1: p0 + tangent(a0) * arm,
            ctrl2: p1 - tangent(a1) * arm,
            to: p1,
        });
    }
    path
}

/// Closed outline of a full rotated ellipse.
pub fn ellipse(center: DVec2, rx: f64, ry: f64, rotation: f64) -> Vec<PathCmd> {
    let mut path = elliptical_arc(center, rx, ry, rotation, 0.0, TAU);
    path.push(PathCmd::Close);
    path
}

/// Open path along a circular arc.
pub fn arc(center: DVec2, radius: f64, start: f64, end: f64) -> Vec<PathCmd> {
    elliptical_arc(center, radius, radius, 0.0, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_point(cmd: &PathCmd) -> Option<DVec2> {
        match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(p),
            PathCmd::CubicTo { to, .. } => Some(to),
            PathCmd::Close => None,
        }
    }

    #[test]
    fn polygon_closes_and_polyline_does_not() {
        let pts = [DVec2::ZERO, DVec2::X, DVec2::Y];
        let closed = polygon(&pts);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[0], PathCmd::MoveTo(DVec2::ZERO));
        assert_eq!(closed[3], PathCmd::Close);
        assert_eq!(polyline(&pts).len(), 3);
    }

    #[test]
    fn empty_points_give_empty_paths() {
        assert!(polygon(&[]).is_empty());
        assert!(polyline(&[]).is_empty());
    }

    #[test]
    fn full_ellipse_uses_four_segments_and_closes() {
        let path = ellipse(DVec2::new(10.0, 10.0), 5.0, 2.0, 0.0);
        assert_eq!(path.len(), 6);
        assert_eq!(path[5], PathCmd::Close);
        let start = end_point(&path[0]).unwrap();
        let finish = end_point(&path[4]).unwrap();
        assert!(start.distance(finish) < 1e-9, "{start} vs {finish}");
    }

    #[test]
    fn rotated_ellipse_point_respects_rotation() {
        let p = ellipse_point(DVec2::ZERO, 4.0, 1.0, FRAC_PI_2, 0.0);
        assert!(p.distance(DVec2::new(0.0, 4.0)) < 1e-9, "got {p}");
    }

    #[test]
    fn arc_endpoints_lie_on_circle() {
        let center = DVec2::new(50.0, 50.0);
        let path = arc(center, 20.0, 0.1, std::f64::consts::PI - 0.1);
        for cmd in &path {
            let p = end_point(cmd).unwrap();
            assert!((p.distance(center) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn bezier_midpoints_stay_close_to_circle() {
        let center = DVec2::ZERO;
        let path = arc(center, 100.0, 0.0, TAU);
        let mut prev = end_point(&path[0]).unwrap();
        for cmd in &path[1..] {
            if let PathCmd::CubicTo { ctrl1, ctrl2, to } = *cmd {
                // Evaluate the cubic at t = 0.5.
                let mid = (prev + 3.0 * ctrl1 + 3.0 * ctrl2 + to) / 8.0;
                assert!((mid.length() - 100.0).abs() < 0.05, "mid radius {}", mid.length());
                prev = to;
            }
        }
    }
}
