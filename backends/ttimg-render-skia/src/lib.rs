//! Skia composer - turns one line of text into a tightly cropped bitmap
//!
//! Font outlines come from skrifa, rasterisation from tiny-skia. The
//! composer sizes a canvas from the measured line, draws the text at the
//! top-left corner and crops to whatever pixels the text actually touched.

pub mod canvas;

pub use canvas::Canvas;

use ttimg_core::types::{BitmapData, ImageMode};
use ttimg_core::{Color, RenderError};
use ttimg_fontdb::Font;

/// Builds the final image for a line of text
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    /// Maximum canvas dimension to prevent memory exhaustion
    max_size: u32,
}

impl Composer {
    pub fn new() -> Self {
        Self { max_size: 65535 }
    }

    /// Measure, draw and crop.
    ///
    /// The canvas is exactly as wide as the measured line and as tall as the
    /// font's line box (ascent plus descender depth); cropping then removes
    /// whatever the glyphs did not cover. Text without visible pixels (for example only spaces) yields
    /// an empty 0x0 bitmap.
    pub fn compose(
        &self,
        text: &str,
        font: &Font,
        text_color: Color,
        background: Color,
        mode: ImageMode,
    ) -> Result<BitmapData, RenderError> {
        let canvas = self.draw(text, font, text_color, background, mode)?;
        let Some(canvas) = canvas else {
            return Ok(BitmapData::empty(mode));
        };

        match canvas.bounding_box() {
            Some(bbox) => {
                log::debug!(
                    "Cropping {}x{} canvas to {}x{} at ({}, {})",
                    canvas.width(),
                    canvas.height(),
                    bbox.width(),
                    bbox.height(),
                    bbox.x0,
                    bbox.y0
                );
                Ok(canvas.crop(bbox))
            },
            None => {
                log::debug!("Nothing visible was drawn for \"{}\"", text);
                Ok(BitmapData::empty(mode))
            },
        }
    }

    /// The uncropped canvas, or None when the line measures zero pixels.
    pub fn draw(
        &self,
        text: &str,
        font: &Font,
        text_color: Color,
        background: Color,
        mode: ImageMode,
    ) -> Result<Option<Canvas>, RenderError> {
        let width = font.text_width(text)?;
        let height = font.line_height()?;
        log::debug!("Measured \"{}\": canvas {}x{} ({})", text, width, height, mode.as_str());

        if width == 0 || height == 0 {
            return Ok(None);
        }
        if width > self.max_size || height > self.max_size {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let mut canvas = Canvas::new(width, height, mode, background)?;
        canvas.draw_text(0.0, 0.0, text, font, text_color)?;
        Ok(Some(canvas))
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
