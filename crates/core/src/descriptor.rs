//! The minimal immutable input identifying which texture to produce.
//!
//! An [`ArtworkDescriptor`] captures a base color, a [`StyleKind`] and output
//! dimensions. [`ArtworkDescriptor::seed`] derives a stable PRNG seed from the
//! (color, style) pair so that the same artwork always paints the same way.

use crate::color::Rgb;
use crate::error::TextureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of generative painting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Starry,
    Sunflower,
    Almond,
    Iris,
    Cafe,
    Portrait,
    Scream,
    Generic,
}

impl StyleKind {
    pub const ALL: [StyleKind; 8] = [
        StyleKind::Starry,
        StyleKind::Sunflower,
        StyleKind::Almond,
        StyleKind::Iris,
        StyleKind::Cafe,
        StyleKind::Portrait,
        StyleKind::Scream,
        StyleKind::Generic,
    ];

    /// The catalog key for this style.
    pub fn key(self) -> &'static str {
        match self {
            StyleKind::Starry => "starry",
            StyleKind::Sunflower => "sunflower",
            StyleKind::Almond => "almond",
            StyleKind::Iris => "iris",
            StyleKind::Cafe => "cafe",
            StyleKind::Portrait => "portrait",
            StyleKind::Scream => "scream",
            StyleKind::Generic => "generic",
        }
    }

    /// Strict lookup by catalog key (case insensitive).
    pub fn parse(key: &str) -> Result<StyleKind, TextureError> {
        let trimmed = key.trim();
        StyleKind::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TextureError::UnknownStyle(key.to_string()))
    }

    /// Lenient lookup: unknown keys select the generic fallback.
    pub fn from_key(key: &str) -> StyleKind {
        StyleKind::parse(key).unwrap_or_else(|e| {
            log::debug!("{e}; using generic style");
            StyleKind::Generic
        })
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable description of one texture to synthesize.
///
/// Dimensions are signed so that degenerate catalog input can be represented;
/// generation treats any non-positive side as an empty texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtworkDescriptor {
    pub color: Rgb,
    pub style: StyleKind,
    pub width: i32,
    pub height: i32,
}

impl ArtworkDescriptor {
    pub fn new(color: Rgb, style: StyleKind, width: i32, height: i32) -> Self {
        Self {
            color,
            style,
            width,
            height,
        }
    }

    /// Builds a descriptor from raw catalog strings, applying the gray and
    /// generic fallbacks instead of failing.
    pub fn from_keys(color: &str, style: &str, width: i32, height: i32) -> Self {
        Self::new(
            Rgb::from_hex_or_gray(color),
            StyleKind::from_key(style),
            width,
            height,
        )
    }

    /// Validates that both sides are positive and that the pixel count fits
    /// in `usize`.
    pub fn validate(&self) -> Result<(), TextureError> {
        let invalid = || TextureError::InvalidDimensions {
            width: i64::from(self.width),
            height: i64::from(self.height),
        };
        if self.width <= 0 || self.height <= 0 {
            return Err(invalid());
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(invalid)?;
        Ok(())
    }

    /// Deterministic seed for this descriptor's (color, style) pair.
    ///
    /// Dimensions are deliberately excluded: the cache is keyed by
    /// (color, style), and the seed must agree with that key.
    pub fn seed(&self) -> u64 {
        seed_for(self.color, self.style)
    }
}

/// FNV-1a over the color hex and style key.
pub fn seed_for(color: Rgb, style: StyleKind) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    color
        .to_hex()
        .bytes()
        .chain(std::iter::once(b'/'))
        .chain(style.key().bytes())
        .fold(OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(PRIME)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_round_trips_through_its_key() {
        for style in StyleKind::ALL {
            assert_eq!(StyleKind::parse(style.key()).unwrap(), style);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(StyleKind::parse(" Starry ").unwrap(), StyleKind::Starry);
    }

    #[test]
    fn unknown_style_falls_back_to_generic() {
        assert!(StyleKind::parse("cubist").is_err());
        assert_eq!(StyleKind::from_key("cubist"), StyleKind::Generic);
        assert_eq!(StyleKind::from_key(""), StyleKind::Generic);
    }

    #[test]
    fn from_keys_applies_both_fallbacks() {
        let d = ArtworkDescriptor::from_keys("oops", "??", 64, 64);
        assert_eq!(d.color, crate::color::NEUTRAL_GRAY);
        assert_eq!(d.style, StyleKind::Generic);
    }

    #[test]
    fn validate_accepts_positive_dimensions() {
        let d = ArtworkDescriptor::from_keys("#1a237e", "starry", 1024, 1024);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_and_negative_sides() {
        for (w, h) in [(0, 10), (10, 0), (-1, 10), (10, -5)] {
            let d = ArtworkDescriptor::from_keys("#1a237e", "starry", w, h);
            assert!(
                matches!(d.validate(), Err(TextureError::InvalidDimensions { .. })),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn seed_depends_on_color_and_style_only() {
        let a = ArtworkDescriptor::from_keys("#1a237e", "starry", 1024, 1024);
        let b = ArtworkDescriptor::from_keys("#1A237E", "starry", 256, 256);
        let c = ArtworkDescriptor::from_keys("#1a237e", "cafe", 1024, 1024);
        let d = ArtworkDescriptor::from_keys("#1a237f", "starry", 1024, 1024);
        assert_eq!(a.seed(), b.seed());
        assert_ne!(a.seed(), c.seed());
        assert_ne!(a.seed(), d.seed());
    }

    #[test]
    fn descriptor_json_round_trip() {
        let original = ArtworkDescriptor::from_keys("#FDB813", "sunflower", 1024, 1024);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"#fdb813\""), "color should be hex: {json}");
        assert!(json.contains("\"sunflower\""), "style should be a key: {json}");
        let restored: ArtworkDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
