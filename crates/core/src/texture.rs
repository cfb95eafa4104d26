//! Finished pixel buffers handed from the synthesizer to the scene.

use crate::color::Rgb;
use crate::descriptor::StyleKind;
use serde::Serialize;

/// An immutable straight-alpha RGBA8 image tagged with the descriptor it was
/// painted for.
///
/// A zero-sized texture is valid and is what generation returns for
/// degenerate dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Texture {
    width: u32,
    height: u32,
    style: StyleKind,
    color: Rgb,
    #[serde(skip)]
    rgba: Vec<u8>,
}

impl Texture {
    /// Wraps an RGBA8 buffer. A buffer whose length does not match
    /// `width * height * 4` collapses to an empty texture.
    pub fn from_rgba(width: u32, height: u32, style: StyleKind, color: Rgb, rgba: Vec<u8>) -> Self {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(rgba.len()) {
            log::warn!(
                "rgba buffer of {} bytes does not match {width}x{height}; returning empty texture",
                rgba.len()
            );
            return Self::empty(style, color);
        }
        Self {
            width,
            height,
            style,
            color,
            rgba,
        }
    }

    /// A 0x0 texture.
    pub fn empty(style: StyleKind, color: Rgb) -> Self {
        Self {
            width: 0,
            height: 0,
            style,
            color,
            rgba: Vec::new(),
        }
    }

    /// Width in pixels; 0 for an empty texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels; 0 for an empty texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The style this texture was painted in.
    pub fn style(&self) -> StyleKind {
        self.style
    }

    /// The base color of the descriptor this texture was painted for.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the texture has no pixels, as after a degenerate request.
    pub fn is_empty(&self) -> bool {
        self.rgba.is_empty()
    }

    /// Row-major RGBA8 bytes, top row first.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The `[r, g, b, a]` bytes at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// FNV-1a over the dimensions and pixel bytes. Equal hashes are how the
    /// determinism checks compare renders without keeping both buffers.
    pub fn content_hash(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.width
            .to_le_bytes()
            .into_iter()
            .chain(self.height.to_le_bytes())
            .chain(self.rgba.iter().copied())
            .fold(OFFSET, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(PRIME)
            })
    }
}
