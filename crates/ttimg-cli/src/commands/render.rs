//! Render command implementation
//!
//! Validates every option, composes the image and writes it. Nothing here
//! terminates the process; the caller decides the exit status.

use ttimg_core::{Color, RenderError, Result};
use ttimg_export::{
    select_image_mode, validate_extension, validate_file_name, validate_output_dir, OutputTarget,
};
use ttimg_fontdb::{validate_font_size, FontCatalog, FontResolver};
use ttimg_render_skia::Composer;

use crate::cli::Args;

/// Render `text` with the options in `args` and write the image.
///
/// Returns the written target on success. Option errors surface as
/// validation errors before anything is drawn.
pub fn run(text: &str, args: &Args, catalog: &FontCatalog) -> Result<OutputTarget> {
    // 1. Output format and folder
    let extension = validate_extension(&args.file_extension)?;
    let dir = validate_output_dir(&args.output_path)?;

    // 2. Font
    let pixel_size = validate_font_size(&args.font_size)?;
    let font = FontResolver::new(catalog).resolve(&args.font_name, pixel_size)?;

    // 3. Canvas mode and colors
    let mode = select_image_mode(&extension);
    let text_color = Color::parse(&args.font_color)?;
    let background = Color::parse(&args.background_color)?;
    log::debug!(
        "Rendering \"{}\" at {}px, color {} on {} ({})",
        text,
        pixel_size,
        text_color,
        background,
        mode.as_str()
    );

    // 4. Compose
    let composer = Composer::new();
    let mut bitmap = composer.compose(text, &font, text_color, background, mode)?;
    if bitmap.is_empty() {
        // Nothing visible to crop to: keep the whole background line
        let canvas = composer
            .draw(text, &font, text_color, background, mode)?
            .ok_or_else(|| RenderError::EmptyImage(text.to_string()))?;
        log::warn!("\"{}\" has no visible pixels, writing the uncropped background", text);
        bitmap = canvas.to_bitmap();
    }

    // 5. Name and write
    let file_name = validate_file_name(args.file_name.as_deref(), text)?;
    let target = OutputTarget::new(dir, file_name, extension);
    target.write(&bitmap)?;
    Ok(target)
}
