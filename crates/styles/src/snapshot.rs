//! PNG export of a generated [`Texture`].
//!
//! Feature-gated behind `png` (default on) so that embedders who upload
//! textures straight to a GPU don't pull in the `image` crate.

use canvas_gallery_core::error::TextureError;
use canvas_gallery_core::texture::Texture;
use std::path::Path;

/// Writes `texture` as an RGBA PNG.
///
/// Returns `TextureError::InvalidDimensions` for an empty texture, since PNG
/// cannot represent a zero-sized image, or `TextureError::Io` on write failure.
pub fn write_png(texture: &Texture, path: &Path) -> Result<(), TextureError> {
    if texture.is_empty() {
        return Err(TextureError::InvalidDimensions {
            width: i64::from(texture.width()),
            height: i64::from(texture.height()),
        });
    }
    let img = image::RgbaImage::from_raw(texture.width(), texture.height(), texture.rgba().to_vec())
        .ok_or_else(|| TextureError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| TextureError::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushSettings;
    use crate::generate;
    use canvas_gallery_core::color::Rgb;
    use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};

    #[test]
    fn write_png_round_trip() {
        let d = ArtworkDescriptor::new(Rgb::from_u32(0x5E35B1), StyleKind::Iris, 24, 16);
        let brush = BrushSettings {
            count: Some(20),
            ..BrushSettings::default()
        };
        let texture = generate(&d, &brush, d.seed());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.png");

        write_png(&texture, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 16);
        assert_eq!(img.as_raw().as_slice(), texture.rgba());
    }

    #[test]
    fn empty_texture_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_png(
            &Texture::empty(StyleKind::Generic, Rgb::BLACK),
            &dir.path().join("empty.png"),
        )
        .unwrap_err();
        assert!(matches!(err, TextureError::InvalidDimensions { .. }));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let d = ArtworkDescriptor::new(Rgb::WHITE, StyleKind::Generic, 4, 4);
        let texture = generate(&d, &BrushSettings::default(), 1);
        let err = write_png(&texture, Path::new("/nonexistent-dir/out.png")).unwrap_err();
        assert!(matches!(err, TextureError::Io(_)));
    }
}
