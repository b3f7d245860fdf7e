// this_file: crates/ttimg-export/src/validate.rs

//! Checks on where and how the image will be written
//!
//! Each check takes the raw option string, normalises it, and either returns
//! the value to use or the [`ValidationError`] naming what was wrong.

use std::path::PathBuf;

use ttimg_core::types::ImageMode;
use ttimg_core::ValidationError;

use crate::probe;

/// Lower-case `raw`, drop surrounding whitespace and one leading dot.
///
/// What remains must be a single non-empty path component without dots.
pub fn normalize_extension(raw: &str) -> Result<String, ValidationError> {
    let lowered = raw.trim().to_lowercase();
    let extension = lowered.strip_prefix('.').unwrap_or(&lowered);
    if extension.is_empty() || extension.contains(['.', '/', '\\']) {
        return Err(ValidationError::EmptyOrInvalidExtension(raw.trim().to_string()));
    }
    Ok(extension.to_string())
}

/// Normalise an extension and make sure the encoder can write it.
pub fn validate_extension(raw: &str) -> Result<String, ValidationError> {
    let extension = normalize_extension(raw)?;
    if let Err(e) = probe::probe_encode(&extension) {
        log::debug!("Encoder rejected .{}: {}", extension, e);
        return Err(ValidationError::UnsupportedFormat(extension));
    }
    Ok(extension)
}

/// Alpha-capable canvas when the format keeps transparency, opaque otherwise
pub fn select_image_mode(extension: &str) -> ImageMode {
    let mode = if probe::probe_alpha(extension) {
        ImageMode::Rgba
    } else {
        ImageMode::Rgb
    };
    log::debug!("Image mode for .{}: {}", extension, mode.as_str());
    mode
}

/// The output folder must already exist; it is never created here.
pub fn validate_output_dir(raw: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = raw.trim();
    let dir = PathBuf::from(trimmed);
    if trimmed.is_empty() || !dir.is_dir() {
        return Err(ValidationError::DirectoryNotFound(trimmed.to_string()));
    }
    Ok(dir)
}

/// File name derived from the rendered text: spaces become underscores
pub fn derive_file_name(text: &str) -> String {
    text.replace(' ', "_")
}

/// Pick the file name (without extension).
///
/// A user-supplied name is trimmed and lower-cased. Without one, the name is
/// derived from `text`. Either way the result must be creatable as a plain
/// file: no path separators, not empty, accepted by the host filesystem.
pub fn validate_file_name(user: Option<&str>, text: &str) -> Result<String, ValidationError> {
    let name = match user {
        Some(raw) => raw.trim().to_lowercase(),
        None => derive_file_name(text),
    };
    let invalid = || ValidationError::InvalidFileName(name.clone());

    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return Err(invalid());
    }
    if let Err(e) = probe::probe_file_name(&name) {
        log::debug!("Filesystem rejected file name \"{}\": {}", name, e);
        return Err(invalid());
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_and_dot_insensitive() {
        for raw in ["PNG", "png", ".png", " .png ", ".PnG"] {
            assert_eq!(normalize_extension(raw), Ok("png".to_string()), "{raw:?}");
            assert_eq!(validate_extension(raw), Ok("png".to_string()), "{raw:?}");
        }
    }

    #[test]
    fn test_empty_extension_is_rejected() {
        for raw in ["", "   ", ".", " . ", "tar.gz", "png/x"] {
            assert!(matches!(
                normalize_extension(raw),
                Err(ValidationError::EmptyOrInvalidExtension(_))
            ));
        }
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        assert_eq!(
            validate_extension("not a valid file extension"),
            Err(ValidationError::UnsupportedFormat("not a valid file extension".into()))
        );
        assert_eq!(
            validate_extension("..png"),
            Err(ValidationError::EmptyOrInvalidExtension("..png".into()))
        );
    }

    #[test]
    fn test_image_mode_follows_alpha_support() {
        assert_eq!(select_image_mode("png"), ImageMode::Rgba);
        assert_eq!(select_image_mode("jpg"), ImageMode::Rgb);
    }

    #[test]
    fn test_output_dir() {
        let dir = std::env::temp_dir();
        let padded = format!("  {}  ", dir.display());
        assert_eq!(validate_output_dir(&padded), Ok(dir));
        assert_eq!(
            validate_output_dir("not/a/valid/path"),
            Err(ValidationError::DirectoryNotFound("not/a/valid/path".into()))
        );
        assert!(validate_output_dir("").is_err());
    }

    #[test]
    fn test_output_dir_is_not_created() {
        let missing = std::env::temp_dir().join("ttimg-surely-missing-dir");
        let _ = validate_output_dir(&missing.to_string_lossy());
        assert!(!missing.exists());
    }

    #[test]
    fn test_file_name_derived_from_text() {
        assert_eq!(validate_file_name(None, "hello big world"), Ok("hello_big_world".into()));
        assert_eq!(validate_file_name(None, "Test"), Ok("Test".into()));
    }

    #[test]
    fn test_user_file_name_is_trimmed_and_lowered() {
        assert_eq!(
            validate_file_name(Some("  Valid File Name "), "test"),
            Ok("valid file name".into())
        );
    }

    #[test]
    fn test_bad_file_names_are_rejected() {
        for raw in ["", "   ", "not/a/valid/file/name", "back\\slash", ".."] {
            assert!(
                matches!(
                    validate_file_name(Some(raw), "test"),
                    Err(ValidationError::InvalidFileName(_))
                ),
                "{raw:?} should be rejected"
            );
        }
        assert!(validate_file_name(None, "a/b").is_err());
    }
}
