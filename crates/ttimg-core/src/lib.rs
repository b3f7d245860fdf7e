//! ttimg core: the vocabulary shared by every text-to-img crate
//!
//! Text goes in, one cropped image comes out. The steps in between live in
//! separate crates, and this one holds what they pass to each other:
//!
//! - [`Color`] - parsed text and background colours
//! - [`types::ImageMode`] - whether the canvas keeps an alpha channel
//! - [`types::BitmapData`] - the pixels handed from the composer to the exporter
//! - [`TtiError`] - the error taxonomy, split into validation and internal failures

pub mod color;
pub mod error;

pub use color::{Color, NAMED_COLORS, TRANSPARENT};
pub use error::{ExportError, RenderError, Result, TtiError, ValidationError};

/// The data structures passed between pipeline steps
pub mod types {
    /// Channel layout of the canvas
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ImageMode {
        /// Opaque red, green, blue
        Rgb,
        /// Red, green, blue plus straight (non-premultiplied) alpha
        Rgba,
    }

    impl ImageMode {
        /// Bytes used by one pixel in this mode
        pub fn bytes_per_pixel(self) -> usize {
            match self {
                Self::Rgb => 3,
                Self::Rgba => 4,
            }
        }

        pub fn as_str(self) -> &'static str {
            match self {
                Self::Rgb => "RGB",
                Self::Rgba => "RGBA",
            }
        }
    }

    /// Raw pixel data, rows top to bottom, no padding between rows
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub mode: ImageMode,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// A zero-sized bitmap, what cropping yields when nothing was drawn
        pub fn empty(mode: ImageMode) -> Self {
            Self {
                width: 0,
                height: 0,
                mode,
                data: Vec::new(),
            }
        }

        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.height == 0
        }

        /// Channels of the pixel at (x, y), or None outside the bitmap
        pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let bpp = self.mode.bytes_per_pixel();
            let start = (y as usize * self.width as usize + x as usize) * bpp;
            self.data.get(start..start + bpp)
        }
    }

    /// Axis-aligned pixel rectangle, `x1`/`y1` exclusive
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rect {
        pub x0: u32,
        pub y0: u32,
        pub x1: u32,
        pub y1: u32,
    }

    impl Rect {
        pub fn width(&self) -> u32 {
            self.x1.saturating_sub(self.x0)
        }

        pub fn height(&self) -> u32 {
            self.y1.saturating_sub(self.y0)
        }

        pub fn is_empty(&self) -> bool {
            self.width() == 0 || self.height() == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn test_empty_bitmap() {
        let bitmap = BitmapData::empty(ImageMode::Rgba);
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.pixel(0, 0), None);
    }

    #[test]
    fn test_pixel_lookup() {
        let bitmap = BitmapData {
            width: 2,
            height: 1,
            mode: ImageMode::Rgb,
            data: vec![1, 2, 3, 4, 5, 6],
        };
        assert_eq!(bitmap.pixel(1, 0), Some(&[4u8, 5, 6][..]));
        assert_eq!(bitmap.pixel(2, 0), None);
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect { x0: 2, y0: 3, x1: 10, y1: 4 };
        assert_eq!(rect.width(), 8);
        assert_eq!(rect.height(), 1);
        assert!(!rect.is_empty());
        assert!(Rect { x0: 5, y0: 0, x1: 5, y1: 9 }.is_empty());
    }
}
