//! Export module for text-to-img
//!
//! Validates where the image goes and in which format, then encodes the
//! composed bitmap with the `image` crate. The format is always chosen by
//! the file extension, so asking "can this extension be written" is
//! answered by trying it on a throwaway file (see [`probe`]).

use std::path::PathBuf;

use image::{DynamicImage, RgbImage, RgbaImage};
use ttimg_core::types::{BitmapData, ImageMode};
use ttimg_core::{ExportError, Result};

pub mod probe;
pub mod validate;

pub use validate::{
    derive_file_name, normalize_extension, select_image_mode, validate_extension,
    validate_file_name, validate_output_dir,
};

/// Convert composed pixels into an `image` buffer of the same mode.
pub fn bitmap_to_image(bitmap: &BitmapData) -> std::result::Result<DynamicImage, ExportError> {
    let expected = bitmap.width as usize * bitmap.height as usize * bitmap.mode.bytes_per_pixel();
    if bitmap.data.len() != expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer size mismatch: expected {} bytes for {}x{} {}, got {}",
            expected,
            bitmap.width,
            bitmap.height,
            bitmap.mode.as_str(),
            bitmap.data.len()
        )));
    }

    let image = match bitmap.mode {
        ImageMode::Rgb => RgbImage::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
            .map(DynamicImage::ImageRgb8),
        ImageMode::Rgba => RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
            .map(DynamicImage::ImageRgba8),
    };
    image.ok_or_else(|| {
        ExportError::EncodingFailed("Failed to create image buffer from bitmap data".into())
    })
}

/// A validated destination: folder, base name and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    file_name: String,
    extension: String,
}

impl OutputTarget {
    /// Combine already validated parts
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            extension: extension.into(),
        }
    }

    /// `{file_name}.{extension}`
    pub fn full_file_name(&self) -> String {
        format!("{}.{}", self.file_name, self.extension)
    }

    /// `{dir}/{file_name}.{extension}`
    pub fn path(&self) -> PathBuf {
        self.dir.join(self.full_file_name())
    }

    /// Encode `bitmap` and write it; returns the written path.
    pub fn write(&self, bitmap: &BitmapData) -> Result<PathBuf> {
        let image = bitmap_to_image(bitmap)?;
        let path = self.path();
        image
            .save(&path)
            .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        log::info!("Wrote {}x{} image to {}", bitmap.width, bitmap.height, path.display());
        Ok(path)
    }
}
