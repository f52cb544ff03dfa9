//! Error types shared by the rasterizer, the compositor and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bitmap-message operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The image is missing, unreadable, or cannot be decoded.
    #[error("Failed to load image '{source_name}': {source}")]
    ImageLoad {
        source_name: String,
        #[source]
        source: image::ImageError,
    },

    /// A caller-supplied value is out of range (threshold, width, message).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing the rendered art failed.
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid("threshold must be between 0 and 255, got 300");
        assert_eq!(
            err.to_string(),
            "Invalid input: threshold must be between 0 and 255, got 300"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = Error::Io {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/out.txt"));
        assert!(msg.contains("missing"));
    }
}
