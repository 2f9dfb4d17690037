//! Square RGB canvas with rectangle fills

use image::{Rgb, RgbImage};

use super::Rect;

/// In-memory raster for one icon
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a `size`x`size` canvas filled with `color`
    pub fn new(size: u32, color: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, color),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Fill an inclusive rectangle, clipping anything past the edges
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || rect.x0 >= width || rect.y0 >= height {
            return;
        }
        let x_end = rect.x1.min(width - 1);
        let y_end = rect.y1.min(height - 1);

        for y in rect.y0..=y_end {
            for x in rect.x0..=x_end {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
