//! Bar geometry for the letter T
//!
//! Every coordinate is derived from the icon size with integer (floor)
//! division, so a given size always yields the same two rectangles.

/// Axis-aligned rectangle with inclusive corners
///
/// A fill covers `x0..=x1` by `y0..=y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether the pixel at (x, y) is covered by this rectangle
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }

    /// Whether both corners lie inside a `size`x`size` canvas
    pub fn fits_within(&self, size: u32) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < size && self.y1 < size
    }
}

/// Thickness shared by both bars, never thinner than one pixel
fn bar_thickness(size: u32) -> u32 {
    (size / 5).max(1)
}

/// The stem of the T
pub fn vertical_bar(size: u32) -> Rect {
    let width = bar_thickness(size);
    let x0 = size.saturating_sub(width) / 2;
    let y0 = size / 4;
    // Bottom is pinned to size - size/8; the nominal stem length
    // (size - size/4) does not bound the fill.
    Rect::new(x0, y0, x0 + width, size - size / 8)
}

/// The crossbar of the T
pub fn horizontal_bar(size: u32) -> Rect {
    let height = bar_thickness(size);
    let width = size - size / 3;
    let x0 = (size - width) / 2;
    let y0 = size / 8;
    Rect::new(x0, y0, x0 + width, y0 + height)
}

/// Both bars in draw order: stem first, crossbar on top
pub fn t_glyph(size: u32) -> [Rect; 2] {
    [vertical_bar(size), horizontal_bar(size)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_16_vertical_bar() {
        assert_eq!(vertical_bar(16), Rect::new(6, 4, 9, 14));
    }

    #[test]
    fn test_size_16_horizontal_bar() {
        assert_eq!(horizontal_bar(16), Rect::new(2, 2, 13, 5));
    }

    #[test]
    fn test_shipped_sizes() {
        assert_eq!(vertical_bar(48), Rect::new(19, 12, 28, 42));
        assert_eq!(horizontal_bar(48), Rect::new(8, 6, 40, 15));
        assert_eq!(vertical_bar(128), Rect::new(51, 32, 76, 112));
        assert_eq!(horizontal_bar(128), Rect::new(21, 16, 107, 41));
    }

    #[test]
    fn test_bars_fit_canvas() {
        for size in 8..=512 {
            for rect in t_glyph(size) {
                assert!(rect.fits_within(size), "size {}: {:?}", size, rect);
            }
        }
    }

    #[test]
    fn test_thickness_clamped_to_one_pixel() {
        for size in 1..5 {
            let [stem, crossbar] = t_glyph(size);
            assert_eq!(stem.x1 - stem.x0, 1);
            assert_eq!(crossbar.y1 - crossbar.y0, 1);
        }
    }

    #[test]
    fn test_glyph_draw_order() {
        let [first, second] = t_glyph(16);
        assert_eq!(first, vertical_bar(16));
        assert_eq!(second, horizontal_bar(16));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::new(2, 2, 13, 5);
        assert!(rect.contains(2, 2));
        assert!(rect.contains(13, 5));
        assert!(!rect.contains(14, 5));
        assert!(!rect.contains(13, 6));
    }
}
