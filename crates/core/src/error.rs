//! Error types for the canvas-gallery core.
//!
//! Texture synthesis itself never fails outward: every variant here is raised
//! only at parse and IO boundaries, or caught by the generator and turned into
//! a fallback (gray color, generic style, empty texture).

use thiserror::Error;

/// Errors produced at the edges of texture synthesis.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Width or height was zero or negative when creating a surface.
    #[error("invalid dimensions: {width}x{height} (width and height must be positive)")]
    InvalidDimensions { width: i64, height: i64 },

    /// A color string could not be parsed as six hex digits.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A style key did not name any known generator.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// The drawing surface could not be allocated.
    #[error("surface allocation failed: {0}")]
    SurfaceAllocation(String),

    /// Writing a snapshot or reading an input file failed.
    #[error("io error: {0}")]
    Io(String),

    /// The artwork catalog could not be parsed or was inconsistent.
    #[error("invalid catalog: {0}")]
    Catalog(String),

    /// The synthesis configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_includes_both_sides() {
        let err = TextureError::InvalidDimensions {
            width: 0,
            height: -4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("0x-4"), "missing dimensions in: {msg}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_input() {
        let err = TextureError::InvalidColor("#zzz".into());
        let msg = format!("{err}");
        assert!(msg.contains("#zzz"), "missing input in: {msg}");
    }

    #[test]
    fn unknown_style_includes_key() {
        let err = TextureError::UnknownStyle("cubist".into());
        let msg = format!("{err}");
        assert!(msg.contains("cubist"), "missing key in: {msg}");
    }

    #[test]
    fn surface_allocation_includes_reason() {
        let err = TextureError::SurfaceAllocation("100000x100000 exceeds limit".into());
        let msg = format!("{err}");
        assert!(msg.contains("exceeds limit"), "missing reason in: {msg}");
    }

    #[test]
    fn io_catalog_and_config_include_message() {
        assert!(TextureError::Io("disk full".into())
            .to_string()
            .contains("disk full"));
        assert!(TextureError::Catalog("missing field `color`".into())
            .to_string()
            .contains("missing field"));
        assert!(TextureError::Config("bad policy".into())
            .to_string()
            .contains("bad policy"));
    }

    #[test]
    fn texture_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextureError>();
    }

    #[test]
    fn texture_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<TextureError>();
    }
}
