// this_file: backends/ttimg-render-skia/tests/integration.rs

use std::path::PathBuf;

use skrifa::MetadataProvider;
use walkdir::WalkDir;

use ttimg_core::types::ImageMode;
use ttimg_core::{Color, RenderError, TRANSPARENT};
use ttimg_fontdb::{system_font_dirs, Font};
use ttimg_render_skia::Composer;

/// First installed .ttf/.otf that draws Latin letters, if any
fn any_installed_font() -> Option<PathBuf> {
    system_font_dirs()?
        .into_iter()
        .filter(|dir| dir.is_dir())
        .flat_map(|dir| WalkDir::new(dir).sort_by_file_name())
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
        })
        .find(|path| {
            Font::from_file(path, 16)
                .map(|font| draws_latin(&font))
                .unwrap_or(false)
        })
}

/// Skip emoji and symbol fonts: every letter of "test" must have an outline
fn draws_latin(font: &Font) -> bool {
    let Ok(font_ref) = font.font_ref() else {
        return false;
    };
    let outlines = font_ref.outline_glyphs();
    font.layout("test")
        .map(|glyphs| {
            glyphs
                .iter()
                .all(|glyph| glyph.id.to_u32() != 0 && outlines.get(glyph.id).is_some())
        })
        .unwrap_or(false)
}

fn load_font(size: u32) -> Option<Font> {
    let path = any_installed_font()?;
    Font::from_file(path, size).ok()
}

#[test]
fn test_compose_visible_text_is_cropped_and_non_empty() {
    let Some(font) = load_font(100) else {
        eprintln!("Skipping test: no installed font found");
        return;
    };
    let composer = Composer::new();

    let canvas = composer
        .draw("test", &font, Color::Rgb(255, 255, 255), TRANSPARENT, ImageMode::Rgba)
        .unwrap()
        .expect("non-empty text should produce a canvas");
    let bitmap = composer
        .compose("test", &font, Color::Rgb(255, 255, 255), TRANSPARENT, ImageMode::Rgba)
        .unwrap();

    assert!(!bitmap.is_empty());
    assert!(bitmap.width <= canvas.width());
    assert!(bitmap.height <= canvas.height());
    assert_eq!(canvas.height(), font.line_height().unwrap());
    assert_eq!(canvas.width(), font.text_width("test").unwrap());
    assert_eq!(bitmap.data.len(), (bitmap.width * bitmap.height * 4) as usize);

    // The crop is tight: every edge row and column holds ink
    let inked = |x: u32, y: u32| bitmap.pixel(x, y).is_some_and(|p| p[3] > 0);
    assert!((0..bitmap.width).any(|x| inked(x, 0)));
    assert!((0..bitmap.width).any(|x| inked(x, bitmap.height - 1)));
    assert!((0..bitmap.height).any(|y| inked(0, y)));
    assert!((0..bitmap.height).any(|y| inked(bitmap.width - 1, y)));
}

#[test]
fn test_compose_whitespace_is_empty_without_error() {
    let Some(font) = load_font(48) else {
        eprintln!("Skipping test: no installed font found");
        return;
    };
    let composer = Composer::new();

    for text in ["   ", " ", ""] {
        let bitmap = composer
            .compose(text, &font, Color::Rgb(255, 255, 255), TRANSPARENT, ImageMode::Rgba)
            .unwrap();
        assert!(bitmap.is_empty(), "{text:?} should compose to an empty image");
    }
}

#[test]
fn test_compose_rgb_mode_is_opaque() {
    let Some(font) = load_font(64) else {
        eprintln!("Skipping test: no installed font found");
        return;
    };
    let bitmap = Composer::new()
        .compose("Hi", &font, Color::Rgb(255, 0, 0), Color::Rgba(0, 0, 255, 0), ImageMode::Rgb)
        .unwrap();

    assert!(!bitmap.is_empty());
    assert_eq!(bitmap.mode, ImageMode::Rgb);
    assert_eq!(bitmap.data.len(), (bitmap.width * bitmap.height * 3) as usize);
    // Solid glyph interiors carry the text colour exactly
    assert!(bitmap.data.chunks_exact(3).any(|p| p == [255, 0, 0]));
}

#[test]
fn test_compose_descenders_are_kept() {
    let Some(font) = load_font(100) else {
        eprintln!("Skipping test: no installed font found");
        return;
    };
    let composer = Composer::new();
    let baseline = font.ascent().unwrap();

    for text in ["_", "g"] {
        let bitmap = composer
            .compose(text, &font, Color::Rgb(255, 255, 255), TRANSPARENT, ImageMode::Rgba)
            .unwrap();
        assert!(!bitmap.is_empty(), "{text:?} should compose to visible pixels");

        let canvas = composer
            .draw(text, &font, Color::Rgb(255, 255, 255), TRANSPARENT, ImageMode::Rgba)
            .unwrap()
            .expect("non-empty text should produce a canvas");
        let bbox = canvas.bounding_box().expect("glyph should leave ink");
        assert!(
            bbox.y1 as f32 > baseline.ceil(),
            "{text:?} ink should reach below the baseline at {baseline}, ends at {}",
            bbox.y1
        );
    }
}

#[test]
fn test_compose_oversized_canvas_is_rejected() {
    let Some(font) = load_font(70_000) else {
        eprintln!("Skipping test: no installed font found");
        return;
    };
    let result = Composer::new().compose(
        "test",
        &font,
        Color::Rgb(255, 255, 255),
        TRANSPARENT,
        ImageMode::Rgba,
    );
    assert!(matches!(result, Err(RenderError::InvalidDimensions { .. })));
}
