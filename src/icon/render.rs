//! Draw the letter T for one icon spec

use image::RgbImage;

use super::{t_glyph, Canvas, IconSpec};

/// Render `spec` to an RGB image: background fill, stem, then crossbar
pub fn render(spec: &IconSpec) -> RgbImage {
    let mut canvas = Canvas::new(spec.size, spec.background());

    for bar in t_glyph(spec.size) {
        tracing::debug!(size = spec.size, ?bar, "Filling bar");
        canvas.fill_rect(bar, spec.foreground());
    }

    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{horizontal_bar, vertical_bar, BACKGROUND, FOREGROUND};

    #[test]
    fn test_render_dimensions() {
        for size in [16, 48, 128] {
            let image = render(&IconSpec::new(size));
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_size_16_pixels() {
        let image = render(&IconSpec::new(16));

        // Corners stay background
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(15, 15), BACKGROUND);
        // Crossbar
        assert_eq!(*image.get_pixel(2, 2), FOREGROUND);
        assert_eq!(*image.get_pixel(13, 5), FOREGROUND);
        assert_eq!(*image.get_pixel(14, 2), BACKGROUND);
        assert_eq!(*image.get_pixel(1, 2), BACKGROUND);
        // Stem
        assert_eq!(*image.get_pixel(6, 14), FOREGROUND);
        assert_eq!(*image.get_pixel(9, 10), FOREGROUND);
        assert_eq!(*image.get_pixel(5, 10), BACKGROUND);
        assert_eq!(*image.get_pixel(10, 10), BACKGROUND);
        assert_eq!(*image.get_pixel(7, 15), BACKGROUND);
    }

    #[test]
    fn test_render_matches_geometry() {
        for size in [16, 48, 128] {
            let image = render(&IconSpec::new(size));
            let stem = vertical_bar(size);
            let crossbar = horizontal_bar(size);

            for (x, y, pixel) in image.enumerate_pixels() {
                let expected = if stem.contains(x, y) || crossbar.contains(x, y) {
                    FOREGROUND
                } else {
                    BACKGROUND
                };
                assert_eq!(*pixel, expected, "size {} at ({}, {})", size, x, y);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(&IconSpec::new(48));
        let second = render(&IconSpec::new(48));
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_render_tiny_sizes_do_not_panic() {
        for size in 1..8 {
            let image = render(&IconSpec::new(size));
            assert_eq!(image.dimensions(), (size, size));
        }
    }
}
