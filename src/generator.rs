//! Icon generator - renders each icon size and writes it to disk

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::GenerateError;
use crate::icon::{render, IconSpec};

/// Pixel sizes written on every run
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Directory the icons are written to, relative to the working directory
pub const OUTPUT_DIR: &str = "icons";

pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

/// Fail unless the image library can encode `format`
pub fn check_capability(format: ImageFormat) -> Result<(), GenerateError> {
    if format.writing_enabled() {
        Ok(())
    } else {
        Err(GenerateError::missing_capability(format))
    }
}

/// Writes letter-T icons into one output directory
#[derive(Debug, Clone)]
pub struct IconGenerator {
    out_dir: PathBuf,
    format: ImageFormat,
}

impl IconGenerator {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            format: OUTPUT_FORMAT,
        }
    }

    #[cfg(test)]
    fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path the icon of `size` is written to
    pub fn path_for(&self, size: u32) -> PathBuf {
        self.out_dir.join(IconSpec::new(size).file_name())
    }

    /// Render and write one icon, replacing any existing file
    pub fn generate(&self, size: u32) -> Result<PathBuf, GenerateError> {
        let spec = IconSpec::new(size);
        let path = self.path_for(size);

        let image = render(&spec);
        image
            .save_with_format(&path, self.format)
            .map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(size, path = %path.display(), "Wrote icon");
        Ok(path)
    }

    /// Generate every size in order
    ///
    /// The encoder check runs before anything touches the filesystem, so a
    /// missing capability leaves no directory or files behind.
    pub fn run(&self, sizes: &[u32]) -> Result<Vec<PathBuf>, GenerateError> {
        check_capability(self.format)?;

        fs::create_dir_all(&self.out_dir).map_err(|source| GenerateError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let path = self.generate(size)?;
            println!("Created {}", path.display());
            written.push(path);
        }

        tracing::info!(count = written.len(), dir = %self.out_dir.display(), "Icons generated");
        Ok(written)
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new(OUTPUT_DIR)
    }
}
