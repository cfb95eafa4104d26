//! Impressionistic brush-stroke overlay applied as the last step of every style.
//!
//! Each stroke is a short straight segment at a random position and angle,
//! colored with the artwork's base color shifted by a random brightness
//! offset. Thousands of them give the flat shapes underneath a painted texture.

use canvas_gallery_core::color::{Rgb, Rgba};
use canvas_gallery_core::params::{param_f64, param_range, param_usize};
use canvas_gallery_core::prng::Xorshift64;
use canvas_gallery_core::raster::MAX_SURFACE_DIMENSION;
use canvas_gallery_core::surface::Surface;
use glam::DVec2;
use serde_json::Value;

/// Stroke count used by the preview profile regardless of style.
pub const PREVIEW_STROKE_COUNT: usize = 1000;

/// Hard ceiling on strokes per texture, whatever the params ask for.
pub const MAX_STROKE_COUNT: usize = 100_000;

/// Longest or thickest stroke allowed. Longer strokes overflow the
/// rasterizer's fixed-point coordinates.
pub const MAX_STROKE_EXTENT: f64 = MAX_SURFACE_DIMENSION as f64;

/// Jitter beyond a full channel swing changes nothing.
const MAX_JITTER: f64 = 255.0;

fn bounded(v: f64, max: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Which stroke tuning a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushProfile {
    /// Full-size gallery texture.
    #[default]
    Full,
    /// Quick thumbnail: shorter, thinner, calmer strokes and a fixed count.
    Preview,
}

/// Tuning for [`apply_brush_strokes`].
///
/// `count` overrides the per-style stroke count when set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub count: Option<usize>,
    pub jitter: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub min_thickness: f64,
    pub max_thickness: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self::for_profile(BrushProfile::Full)
    }
}

impl BrushSettings {
    pub fn for_profile(profile: BrushProfile) -> Self {
        match profile {
            BrushProfile::Full => Self {
                count: None,
                jitter: 25.0,
                min_length: 5.0,
                max_length: 25.0,
                min_thickness: 1.0,
                max_thickness: 4.0,
            },
            BrushProfile::Preview => Self {
                count: Some(PREVIEW_STROKE_COUNT),
                jitter: 15.0,
                min_length: 5.0,
                max_length: 15.0,
                min_thickness: 1.0,
                max_thickness: 3.0,
            },
        }
    }

    /// Starts from `profile` and applies any `stroke_*` overrides in `params`.
    pub fn from_json(params: &Value, profile: BrushProfile) -> Self {
        let base = Self::for_profile(profile);
        let count = match params.get("stroke_count") {
            Some(_) => Some(param_usize(params, "stroke_count", base.count.unwrap_or(0))),
            None => base.count,
        };
        let (min_length, max_length) = param_range(
            params,
            "stroke_min_length",
            "stroke_max_length",
            (base.min_length, base.max_length),
        );
        let (min_thickness, max_thickness) = param_range(
            params,
            "stroke_min_thickness",
            "stroke_max_thickness",
            (base.min_thickness, base.max_thickness),
        );
        Self {
            count,
            jitter: param_f64(params, "stroke_jitter", base.jitter).abs(),
            min_length,
            max_length,
            min_thickness,
            max_thickness,
        }
        .clamped()
    }

    /// Pulls every field into the range the rasterizer and the loop budget
    /// accept: counts up to [`MAX_STROKE_COUNT`], lengths and thicknesses in
    /// `[0, MAX_STROKE_EXTENT]`, jitter in `[0, 255]`. Non-finite values become 0.
    pub fn clamped(self) -> Self {
        Self {
            count: self.count.map(|n| n.min(MAX_STROKE_COUNT)),
            jitter: bounded(self.jitter.abs(), MAX_JITTER),
            min_length: bounded(self.min_length, MAX_STROKE_EXTENT),
            max_length: bounded(self.max_length, MAX_STROKE_EXTENT),
            min_thickness: bounded(self.min_thickness, MAX_STROKE_EXTENT),
            max_thickness: bounded(self.max_thickness, MAX_STROKE_EXTENT),
        }
    }

    /// Effective stroke count for a style whose own default is `style_default`,
    /// never above [`MAX_STROKE_COUNT`].
    pub fn stroke_count(&self, style_default: usize) -> usize {
        self.count.unwrap_or(style_default).min(MAX_STROKE_COUNT)
    }
}

/// Draws `count` jittered strokes in `base`'s hue over the whole surface.
///
/// `settings` are [clamped](BrushSettings::clamped) first and `count` is capped
/// at [`MAX_STROKE_COUNT`], so hand-built settings cannot stall or overflow the
/// rasterizer either.
pub fn apply_brush_strokes(
    surface: &mut dyn Surface,
    rng: &mut Xorshift64,
    base: Rgb,
    settings: &BrushSettings,
    count: usize,
) {
    let settings = settings.clamped();
    let (w, h) = (surface.width(), surface.height());
    for _ in 0..count.min(MAX_STROKE_COUNT) {
        let from = DVec2::new(rng.next_f64() * w, rng.next_f64() * h);
        let length = rng.next_range(settings.min_length, settings.max_length);
        let angle = rng.next_angle();
        let thickness = rng.next_range(settings.min_thickness, settings.max_thickness);
        let delta = rng.next_range(-settings.jitter, settings.jitter).round() as i32;

        let to = from + DVec2::from_angle(angle) * length;
        let color = Rgba::opaque(base.adjust_brightness(delta));
        surface.stroke_line(from, to, thickness, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_gallery_core::recording::{DrawCall, DrawKind, RecordingSurface};
    use serde_json::json;

    fn strokes(settings: &BrushSettings, count: usize, base: Rgb) -> RecordingSurface {
        let mut surface = RecordingSurface::new(200.0, 100.0);
        let mut rng = Xorshift64::new(7);
        apply_brush_strokes(&mut surface, &mut rng, base, settings, count);
        surface
    }

    #[test]
    fn draws_exactly_count_lines() {
        let s = strokes(&BrushSettings::default(), 250, Rgb::from_u32(0x1a237e));
        assert_eq!(s.len(), 250);
        assert_eq!(s.count(DrawKind::StrokeLine), 250);
    }

    #[test]
    fn zero_count_draws_nothing() {
        let s = strokes(&BrushSettings::default(), 0, Rgb::BLACK);
        assert!(s.is_empty());
    }

    #[test]
    fn preview_profile_fixes_count() {
        let preview = BrushSettings::for_profile(BrushProfile::Preview);
        assert_eq!(preview.stroke_count(3000), PREVIEW_STROKE_COUNT);
        assert_eq!(BrushSettings::default().stroke_count(3000), 3000);
    }

    #[test]
    fn from_json_overrides_and_reorders() {
        let params = json!({
            "stroke_count": 12,
            "stroke_jitter": -40,
            "stroke_min_length": 30,
            "stroke_max_length": 10,
        });
        let s = BrushSettings::from_json(&params, BrushProfile::Full);
        assert_eq!(s.count, Some(12));
        assert_eq!(s.jitter, 40.0);
        assert_eq!((s.min_length, s.max_length), (10.0, 30.0));
        assert_eq!((s.min_thickness, s.max_thickness), (1.0, 4.0));
    }

    #[test]
    fn from_json_empty_matches_profile() {
        for profile in [BrushProfile::Full, BrushProfile::Preview] {
            assert_eq!(
                BrushSettings::from_json(&json!({}), profile),
                BrushSettings::for_profile(profile)
            );
        }
    }

    #[test]
    fn from_json_caps_extreme_values() {
        let params = json!({
            "stroke_count": 1_000_000_000_000u64,
            "stroke_jitter": 1e9,
            "stroke_min_length": 1e6,
            "stroke_max_length": 1e39,
            "stroke_min_thickness": 1e7,
            "stroke_max_thickness": 1e8,
        });
        let s = BrushSettings::from_json(&params, BrushProfile::Full);
        assert_eq!(s.count, Some(MAX_STROKE_COUNT));
        assert_eq!(s.jitter, 255.0);
        assert_eq!((s.min_length, s.max_length), (MAX_STROKE_EXTENT, MAX_STROKE_EXTENT));
        assert_eq!(
            (s.min_thickness, s.max_thickness),
            (MAX_STROKE_EXTENT, MAX_STROKE_EXTENT)
        );
        assert_eq!(s.stroke_count(3000), MAX_STROKE_COUNT);
    }

    #[test]
    fn hand_built_settings_are_clamped_when_drawn() {
        let wild = BrushSettings {
            count: None,
            jitter: f64::INFINITY,
            min_length: 1e6,
            max_length: 1e9,
            min_thickness: f64::NAN,
            max_thickness: 2.0,
        };
        let s = strokes(&wild, 20, Rgb::from_u32(0x336699));
        assert_eq!(s.len(), 20);
        for call in s.calls() {
            let DrawCall::StrokeLine { from, to, width, .. } = call else {
                panic!("unexpected call {call:?}");
            };
            assert!(from.distance(*to) <= MAX_STROKE_EXTENT + 1e-6);
            assert!((0.0..=2.0).contains(width), "thickness {width}");
        }
        let many = strokes(&BrushSettings::default(), MAX_STROKE_COUNT + 10, Rgb::BLACK);
        assert_eq!(many.len(), MAX_STROKE_COUNT);
    }

    #[test]
    fn extreme_params_still_paint_a_full_texture() {
        use crate::generate;
        use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};

        let d = ArtworkDescriptor::new(Rgb::from_u32(0x81C784), StyleKind::Generic, 32, 32);
        for extent in [1e6, 1e7, 1e9, 1e39] {
            let params = json!({
                "stroke_count": 5,
                "stroke_min_length": extent,
                "stroke_max_length": extent,
                "stroke_min_thickness": extent,
                "stroke_max_thickness": extent,
            });
            let brush = BrushSettings::from_json(&params, BrushProfile::Full);
            let texture = generate(&d, &brush, d.seed());
            assert_eq!((texture.width(), texture.height()), (32, 32));
            assert_eq!(texture.rgba().len(), 32 * 32 * 4);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strokes_respect_ranges_and_jitter(seed: u64, r: u8, g: u8, b: u8) {
                let base = Rgb::new(r, g, b);
                let settings = BrushSettings::default();
                let mut surface = RecordingSurface::new(64.0, 64.0);
                let mut rng = Xorshift64::new(seed);
                apply_brush_strokes(&mut surface, &mut rng, base, &settings, 50);

                for call in surface.calls() {
                    let DrawCall::StrokeLine { from, to, width, color } = call else {
                        return Err(TestCaseError::fail(format!("unexpected call {call:?}")));
                    };
                    prop_assert!((0.0..64.0).contains(&from.x) && (0.0..64.0).contains(&from.y));
                    let len = from.distance(*to);
                    prop_assert!(len >= 5.0 - 1e-9 && len < 25.0 + 1e-9, "length {len}");
                    prop_assert!((1.0..4.0).contains(width), "thickness {width}");
                    prop_assert_eq!(color.alpha, 1.0);
                    for (c, o) in [(color.rgb.r, r), (color.rgb.g, g), (color.rgb.b, b)] {
                        let diff = (i32::from(c) - i32::from(o)).abs();
                        prop_assert!(diff <= 25, "channel moved by {diff}");
                    }
                }
            }
        }
    }
}
