//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: texture error (bad dimensions, surface allocation)
//! - 11: I/O error (PNG write, config or catalog read)
//! - 12: input error (bad color, unknown style, bad config or catalog)
//! - 13: serialization error

use canvas_gallery_core::TextureError;
use std::fmt;

pub enum CliError {
    Texture(TextureError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Texture(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Texture(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        match e {
            TextureError::Io(msg) => CliError::Io(msg),
            TextureError::InvalidColor(_)
            | TextureError::UnknownStyle(_)
            | TextureError::Catalog(_)
            | TextureError::Config(_) => CliError::Input(e.to_string()),
            other => CliError::Texture(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_error_exit_code_is_10() {
        let err = CliError::from(TextureError::InvalidDimensions {
            width: 0,
            height: 4,
        });
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("0x4"));
    }

    #[test]
    fn io_error_routes_to_11() {
        let err = CliError::from(TextureError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));

        let std_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(CliError::from(std_err).exit_code(), 11);
    }

    #[test]
    fn bad_user_input_routes_to_12() {
        for e in [
            TextureError::InvalidColor("#zz".into()),
            TextureError::UnknownStyle("cubist".into()),
            TextureError::Config("bad".into()),
            TextureError::Catalog("dup".into()),
        ] {
            assert_eq!(CliError::from(e).exit_code(), 12);
        }
        assert!(CliError::from(TextureError::UnknownStyle("cubist".into()))
            .to_string()
            .contains("cubist"));
    }

    #[test]
    fn serde_json_error_routes_to_13() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
