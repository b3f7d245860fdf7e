//! Font discovery and loading for text-to-img
//!
//! A user names a font either the way people do ("Arial", "DejaVu Sans
//! Bold") or the way files do ("arial.ttf", "./fonts/Inter.otf"). The
//! [`FontCatalog`] answers the first kind from the installed fonts, and the
//! [`FontResolver`] falls back to treating the name as a path.

pub mod catalog;
pub mod font;

pub use catalog::{system_font_dirs, CatalogEntry, FontCatalog, FONT_DIRS_ENV};
pub use font::{Font, PlacedGlyph};

use thiserror::Error;
use ttimg_core::ValidationError;

/// Why a single font file could not be opened
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data in {0}")]
    InvalidData(String),
}

/// Parse a requested font size into whole pixels.
///
/// Anything that is not a positive integer, including text and fractions,
/// is rejected.
pub fn validate_font_size(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|&px| px > 0)
        .ok_or_else(|| ValidationError::InvalidFontSize(trimmed.to_string()))
}

/// Turns font names into opened fonts using a shared catalog
#[derive(Debug, Clone, Copy)]
pub struct FontResolver<'a> {
    catalog: &'a FontCatalog,
}

impl<'a> FontResolver<'a> {
    pub fn new(catalog: &'a FontCatalog) -> Self {
        Self { catalog }
    }

    /// Open `name` at `pixel_size`.
    ///
    /// The lower-cased name is looked up in the catalog first (full font
    /// name, then file name). If that misses or the catalogued file fails to
    /// open, `name` itself is tried as a path.
    pub fn resolve(&self, name: &str, pixel_size: u32) -> Result<Font, ValidationError> {
        let name = name.trim();
        let not_found = || ValidationError::FontNotFound(name.to_string());
        if name.is_empty() {
            return Err(not_found());
        }

        if let Some(entry) = self.catalog.lookup(&name.to_lowercase()) {
            match Font::from_file_index(&entry.path, entry.face_index, pixel_size) {
                Ok(font) => {
                    log::debug!(
                        "Resolved font \"{}\" from catalog: {} (face {})",
                        name,
                        entry.path.display(),
                        entry.face_index
                    );
                    return Ok(font);
                },
                Err(e) => log::debug!("Catalog entry for \"{}\" unusable: {}", name, e),
            }
        }

        Font::from_file(name, pixel_size)
            .map(|font| {
                log::debug!("Resolved font \"{}\" as a file path", name);
                font
            })
            .map_err(|e| {
                log::debug!("Font \"{}\" not openable: {}", name, e);
                not_found()
            })
    }
}
