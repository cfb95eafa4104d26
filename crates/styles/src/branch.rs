//! Branching blossom trees, drawn from an explicit work-queue.
//!
//! Each branch node draws one segment and spawns one to three shorter, thinner
//! children. Nodes are processed breadth-first from a `VecDeque`, so tree size
//! is bounded by [`MAX_BRANCH_NODES`] and [`MAX_BRANCH_DEPTH`] instead of by
//! the call stack.

use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::prng::Xorshift64;
use canvas_gallery_core::surface::{Ellipse, Surface};
use glam::DVec2;
use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_4, TAU};

/// Upper bound on nodes visited by one [`draw_branch`] call.
///
/// A full-height tree on a 1024px canvas (root length ~410) visits about 26k
/// nodes and always completes well inside this. Only far longer roots reach it.
pub const MAX_BRANCH_NODES: usize = 1 << 18;
/// Nodes deeper than this are not expanded.
///
/// Lengths shrink by at least 0.9 per level, so a root of `L` terminates
/// naturally after `ln(L / 10) / ln(1 / 0.9)` levels: about 36 for L = 410.
pub const MAX_BRANCH_DEPTH: u32 = 40;

/// Branches shorter than this are terminal.
const MIN_BRANCH_LENGTH: f64 = 10.0;
/// Branches shorter than this may carry a blossom at their tip.
const BLOSSOM_LENGTH: f64 = 60.0;
const BLOSSOM_CHANCE: f64 = 0.3;
const WIDTH_DECAY: f64 = 0.7;

pub const BRANCH_COLOR: Rgb = Rgb::from_u32(0x8B4513);
const PETAL_COLOR: Rgba = Rgba {
    rgb: Rgb::WHITE,
    alpha: 0.9,
};
const PISTIL_COLOR: Rgba = Rgba {
    rgb: Rgb::new(255, 255, 150),
    alpha: 0.8,
};

/// One pending branch on the work-queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchNode {
    pub origin: DVec2,
    pub angle: f64,
    pub length: f64,
    pub width: f64,
    pub depth: u32,
}

/// What a [`draw_branch`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchStats {
    pub nodes_visited: usize,
    pub segments: usize,
    pub flowers: usize,
    pub max_depth: u32,
}

/// Grows a tree from `origin` in direction `angle` (radians, screen space).
pub fn draw_branch(
    surface: &mut dyn Surface,
    rng: &mut Xorshift64,
    origin: DVec2,
    angle: f64,
    length: f64,
    width: f64,
) -> BranchStats {
    let mut stats = BranchStats::default();
    let mut queue = VecDeque::new();
    queue.push_back(BranchNode {
        origin,
        angle,
        length,
        width,
        depth: 0,
    });

    while let Some(node) = queue.pop_front() {
        if stats.nodes_visited >= MAX_BRANCH_NODES {
            log::debug!(
                "branch node budget reached with {} nodes still queued",
                queue.len() + 1
            );
            break;
        }
        stats.nodes_visited += 1;
        stats.max_depth = stats.max_depth.max(node.depth);

        if node.length.is_nan() || node.length < MIN_BRANCH_LENGTH {
            continue;
        }

        let end = node.origin + DVec2::from_angle(node.angle) * node.length;
        surface.stroke_line(node.origin, end, node.width, Rgba::opaque(BRANCH_COLOR));
        stats.segments += 1;

        if node.length < BLOSSOM_LENGTH && rng.chance(BLOSSOM_CHANCE) {
            draw_flower(surface, end, rng.next_range(5.0, 15.0));
            stats.flowers += 1;
        }

        let children = rng.next_between(1, 3);
        for _ in 0..children {
            let child = BranchNode {
                origin: end,
                angle: node.angle + rng.next_range(-FRAC_PI_4, FRAC_PI_4),
                length: node.length * rng.next_range(0.6, 0.9),
                width: node.width * WIDTH_DECAY,
                depth: node.depth + 1,
            };
            if child.depth <= MAX_BRANCH_DEPTH {
                queue.push_back(child);
            }
        }
    }
    stats
}

/// Five-petal blossom: white petal ellipses around `center` and a pale yellow pistil.
pub fn draw_flower(surface: &mut dyn Surface, center: DVec2, radius: f64) {
    for i in 0..5 {
        let angle = f64::from(i) * TAU / 5.0;
        let petal = center + DVec2::from_angle(angle) * radius;
        surface.fill_ellipse(Ellipse::new(petal, radius, radius / 2.0, angle), PETAL_COLOR);
    }
    surface.fill_circle(center, radius / 3.0, PISTIL_COLOR);
}
