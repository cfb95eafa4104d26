//! 8-bit RGB color utility for texture synthesis.
//!
//! Provides [`Rgb`] (opaque, 8 bits per channel) and [`Rgba`] (an `Rgb` with a
//! fractional alpha for translucent fills), hex parsing with a neutral-gray
//! fallback, and brightness adjustment. Every arithmetic adjustment clamps
//! channels back into [0, 255].

use crate::error::TextureError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque color with 8-bit channels.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color with straight (non-premultiplied) alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// Neutral gray substituted for malformed color input.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(100, 100, 100);

/// Clamps `v` into `[lo, hi]`.
pub fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    v.max(lo).min(hi)
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `TextureError::InvalidColor` if the input is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Rgb, TextureError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TextureError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|e| TextureError::InvalidColor(format!("{hex:?}: {e}")))?;
        Ok(Rgb::from_u32(packed))
    }

    /// Parses a hex color, substituting [`NEUTRAL_GRAY`] for malformed input.
    ///
    /// Never fails: a bad color degrades the texture, it does not abort it.
    pub fn from_hex_or_gray(hex: &str) -> Rgb {
        Rgb::from_hex(hex).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to neutral gray");
            NEUTRAL_GRAY
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Adds `delta` to each channel independently, clamping to [0, 255].
    pub fn adjust_brightness(self, delta: i32) -> Rgb {
        let shift = |c: u8| clamp(i32::from(c).saturating_add(delta), 0, 255) as u8;
        Rgb {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Attaches an alpha value, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            rgb: self,
            alpha: if alpha.is_nan() {
                0.0
            } else {
                alpha.clamp(0.0, 1.0)
            },
        }
    }
}

impl Rgba {
    /// Fully opaque version of `rgb`.
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Shorthand for `Rgb::new(r, g, b).with_alpha(alpha)`.
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Rgb::new(r, g, b).with_alpha(alpha)
    }

    /// Alpha quantized to 8 bits.
    pub fn alpha_u8(self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Rgba::opaque(rgb)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
