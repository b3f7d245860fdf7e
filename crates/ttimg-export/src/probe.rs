//! Throwaway files for asking the filesystem and the encoder questions
//!
//! Both guards delete what they created when dropped, on success and on
//! every error path alike.

use std::fs::File;
use std::io;
use std::path::Path;

use image::{ImageResult, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::{NamedTempFile, TempDir};

/// A uniquely named empty file in the system temp folder ending in `.{extension}`
pub fn scratch_file(extension: &str) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("ttimg-probe-")
        .suffix(&format!(".{}", extension))
        .tempfile()
}

/// Save a 1x1 opaque image as `extension`; Err if the encoder refuses.
pub fn probe_encode(extension: &str) -> ImageResult<()> {
    let scratch = scratch_file(extension)?;
    RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(scratch.path())
}

/// Save a 1x1 fully transparent image as `extension` and read it back.
///
/// Returns true only when the decoded file still has an alpha channel.
pub fn probe_alpha(extension: &str) -> bool {
    let result = scratch_file(extension)
        .map_err(image::ImageError::from)
        .and_then(|scratch| {
            RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])).save(scratch.path())?;
            let decoded = image::open(scratch.path())?;
            Ok(decoded.color().has_alpha())
        });

    match result {
        Ok(has_alpha) => has_alpha,
        Err(e) => {
            log::debug!("Transparent probe for .{} failed: {}", extension, e);
            false
        },
    }
}

/// Create and immediately drop a zero-byte file called exactly `name`
/// inside a fresh scratch folder.
pub fn probe_file_name(name: &str) -> io::Result<()> {
    let dir: TempDir = tempfile::Builder::new().prefix("ttimg-name-").tempdir()?;
    let path = dir.path().join(name);
    // The joined path must stay a direct child of the scratch folder
    if path.parent() != Some(dir.path()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "name leaves the scratch folder",
        ));
    }
    File::create(&path)?;
    remove_if_present(&path)
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
