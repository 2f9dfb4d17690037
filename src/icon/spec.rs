//! Icon spec - one square icon of a given pixel size

use image::Rgb;

/// Steel blue
pub const BACKGROUND: Rgb<u8> = Rgb([70, 130, 180]);

/// White
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// A single icon to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length in pixels
    pub size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn background(&self) -> Rgb<u8> {
        BACKGROUND
    }

    pub fn foreground(&self) -> Rgb<u8> {
        FOREGROUND
    }

    /// File name the icon is written under, e.g. `icon16.png`
    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}
