// this_file: crates/ttimg-fontdb/src/font.rs

//! A font opened at one pixel size
//!
//! Stores the raw file bytes and creates a skrifa `FontRef` on demand, the
//! same way for single fonts and for faces inside a collection.

use std::fs;
use std::path::{Path, PathBuf};

use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use ttimg_core::RenderError;

use crate::FontLoadError;

/// A resolved font: source file, face and pixel size
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    pixel_size: u32,
    path: PathBuf,
}

/// One glyph placed on the line, x in pixels from the line start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub id: GlyphId,
    pub x: f32,
    pub advance: f32,
}

impl Font {
    /// Opens the first face of a font file at `pixel_size`
    pub fn from_file(path: impl AsRef<Path>, pixel_size: u32) -> Result<Self, FontLoadError> {
        Self::from_file_index(path, 0, pixel_size)
    }

    /// Opens a specific face of a font file (for TTC collections)
    pub fn from_file_index(
        path: impl AsRef<Path>,
        face_index: u32,
        pixel_size: u32,
    ) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FontLoadError::FileNotFound(path.display().to_string()));
        }
        let data = fs::read(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        Self::from_data_index(data, face_index, pixel_size, path)
    }

    /// Wraps font bytes already in memory; `path` is kept for messages only
    pub fn from_data_index(
        data: Vec<u8>,
        face_index: u32,
        pixel_size: u32,
        path: impl Into<PathBuf>,
    ) -> Result<Self, FontLoadError> {
        let path = path.into();
        FontRef::from_index(&data, face_index)
            .map_err(|_| FontLoadError::InvalidData(path.display().to_string()))?;

        Ok(Font {
            data,
            face_index,
            pixel_size,
            path,
        })
    }

    /// Creates a FontRef on-demand for parsing operations
    pub fn font_ref(&self) -> Result<FontRef<'_>, RenderError> {
        FontRef::from_index(&self.data, self.face_index).map_err(|_| RenderError::InvalidFont)
    }

    /// Nominal size in pixels (the em height)
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixel_size as f32)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Distance from the top of the line box to the baseline, in pixels
    pub fn ascent(&self) -> Result<f32, RenderError> {
        let font = self.font_ref()?;
        Ok(font.metrics(self.size(), LocationRef::default()).ascent)
    }

    /// Height of the line box: ascent plus the depth of the descender,
    /// rounded up to whole pixels.
    pub fn line_height(&self) -> Result<u32, RenderError> {
        let font = self.font_ref()?;
        let metrics = font.metrics(self.size(), LocationRef::default());
        Ok((metrics.ascent - metrics.descent).max(0.0).ceil() as u32)
    }

    /// Map characters to glyphs and place them left to right.
    ///
    /// Characters the font lacks use `.notdef`, which most fonts draw as a box.
    pub fn layout(&self, text: &str) -> Result<Vec<PlacedGlyph>, RenderError> {
        let font = self.font_ref()?;
        let charmap = font.charmap();
        let metrics = font.glyph_metrics(self.size(), LocationRef::default());

        let mut x = 0.0;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            let advance = metrics.advance_width(id).unwrap_or(0.0);
            glyphs.push(PlacedGlyph { id, x, advance });
            x += advance;
        }
        Ok(glyphs)
    }

    /// Width of `text` on one line, rounded up to whole pixels
    pub fn text_width(&self, text: &str) -> Result<u32, RenderError> {
        let width: f32 = self.layout(text)?.iter().map(|g| g.advance).sum();
        Ok(width.max(0.0).ceil() as u32)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("path", &self.path)
            .field("face_index", &self.face_index)
            .field("pixel_size", &self.pixel_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_garbage_data() {
        let result = Font::from_data_index(vec![0; 100], 0, 12, "garbage.ttf");
        assert!(matches!(result, Err(FontLoadError::InvalidData(_))));
    }

    #[test]
    fn test_font_from_missing_file() {
        let result = Font::from_file("/no/such/font.ttf", 12);
        assert!(matches!(result, Err(FontLoadError::FileNotFound(_))));
    }

    #[test]
    fn test_directory_is_not_a_font() {
        let dir = tempfile::tempdir().unwrap();
        let result = Font::from_file(dir.path(), 12);
        assert!(matches!(result, Err(FontLoadError::FileNotFound(_))));
    }
}
