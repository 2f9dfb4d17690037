//! Icon generation errors

use std::path::PathBuf;

use image::ImageFormat;
use thiserror::Error;

/// Errors that can occur while generating icons
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The image library was built without an encoder for the output format
    #[error(
        "{format:?} encoding support is not installed. \
         Please rebuild with it enabled using 'cargo build --features {feature}'"
    )]
    MissingCapability {
        format: ImageFormat,
        feature: &'static str,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GenerateError {
    pub fn missing_capability(format: ImageFormat) -> Self {
        let feature = format.extensions_str().first().copied().unwrap_or("png");
        GenerateError::MissingCapability { format, feature }
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, GenerateError::MissingCapability { .. })
    }
}
