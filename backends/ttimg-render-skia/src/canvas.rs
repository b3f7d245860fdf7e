// this_file: backends/ttimg-render-skia/src/canvas.rs

//! The pixel surface text is drawn on
//!
//! Backed by a premultiplied tiny-skia `Pixmap`. The background colour is
//! remembered in its stored (premultiplied, 8-bit) form so that "untouched"
//! can be answered by exact comparison when computing the bounding box.

use skrifa::instance::LocationRef;
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::MetadataProvider;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};
use ttimg_core::types::{BitmapData, ImageMode, Rect};
use ttimg_core::{Color, RenderError};
use ttimg_fontdb::Font;

/// A background-filled pixel buffer in a chosen [`ImageMode`]
pub struct Canvas {
    pixmap: Pixmap,
    background: PremultipliedColorU8,
    mode: ImageMode,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`.
    ///
    /// In [`ImageMode::Rgb`] the background's alpha is ignored.
    pub fn new(
        width: u32,
        height: u32,
        mode: ImageMode,
        background: Color,
    ) -> Result<Self, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::CanvasCreationFailed { width, height })?;

        let fill = skia_color(for_mode(background, mode));
        pixmap.fill(fill);

        Ok(Self {
            pixmap,
            background: fill.premultiply().to_color_u8(),
            mode,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn mode(&self) -> ImageMode {
        self.mode
    }

    /// Draw `text` with its line box starting at (x, y); the baseline sits
    /// `font.ascent()` pixels below `y`.
    pub fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: &Font,
        color: Color,
    ) -> Result<(), RenderError> {
        let font_ref = font.font_ref()?;
        let outlines = font_ref.outline_glyphs();
        let settings = || DrawSettings::unhinted(font.size(), LocationRef::default());
        let baseline = y + font.ascent()?;

        let mut builder = PathBuilder::new();
        for glyph in font.layout(text)? {
            // Bitmap-only glyphs have no outline to draw
            let Some(outline) = outlines.get(glyph.id) else {
                log::debug!("No outline for glyph {}", glyph.id.to_u32());
                continue;
            };
            let mut pen = CanvasPen {
                builder: &mut builder,
                x: x + glyph.x,
                baseline,
            };
            outline
                .draw(settings(), &mut pen)
                .map_err(|_| RenderError::OutlineExtractionFailed(glyph.id.to_u32()))?;
        }

        // Whitespace produces no contours at all
        let Some(path) = builder.finish() else {
            return Ok(());
        };

        let mut paint = Paint::default();
        paint.set_color(skia_color(for_mode(color, self.mode)));
        paint.anti_alias = true;

        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Smallest rectangle holding every pixel that differs from the
    /// background, None when nothing was drawn.
    pub fn bounding_box(&self) -> Option<Rect> {
        let width = self.width();
        let mut bbox: Option<Rect> = None;

        for (i, pixel) in self.pixmap.pixels().iter().enumerate() {
            if *pixel == self.background {
                continue;
            }
            let x = i as u32 % width;
            let y = i as u32 / width;
            bbox = Some(match bbox {
                None => Rect { x0: x, y0: y, x1: x + 1, y1: y + 1 },
                Some(r) => Rect {
                    x0: r.x0.min(x),
                    y0: r.y0.min(y),
                    x1: r.x1.max(x + 1),
                    y1: r.y1.max(y + 1),
                },
            });
        }

        bbox
    }

    /// Copy out `rect` (clamped to the canvas) as straight-alpha pixels.
    pub fn crop(&self, rect: Rect) -> BitmapData {
        let rect = Rect {
            x0: rect.x0.min(self.width()),
            y0: rect.y0.min(self.height()),
            x1: rect.x1.min(self.width()),
            y1: rect.y1.min(self.height()),
        };
        if rect.is_empty() {
            return BitmapData::empty(self.mode);
        }

        let width = self.width() as usize;
        let pixels = self.pixmap.pixels();
        let mut data =
            Vec::with_capacity(rect.width() as usize * rect.height() as usize * self.mode.bytes_per_pixel());

        for y in rect.y0..rect.y1 {
            let row = y as usize * width;
            for x in rect.x0..rect.x1 {
                let c = pixels[row + x as usize].demultiply();
                data.extend_from_slice(&[c.red(), c.green(), c.blue()]);
                if self.mode == ImageMode::Rgba {
                    data.push(c.alpha());
                }
            }
        }

        BitmapData {
            width: rect.width(),
            height: rect.height(),
            mode: self.mode,
            data,
        }
    }

    /// The whole canvas as a bitmap
    pub fn to_bitmap(&self) -> BitmapData {
        self.crop(Rect {
            x0: 0,
            y0: 0,
            x1: self.width(),
            y1: self.height(),
        })
    }

    #[cfg(test)]
    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

fn for_mode(color: Color, mode: ImageMode) -> Color {
    match mode {
        ImageMode::Rgb => color.opaque(),
        ImageMode::Rgba => color,
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

/// Receives skrifa outline commands in font space (y up) and writes them
/// into a tiny-skia path in canvas space (y down), offset to the glyph's
/// pen position.
struct CanvasPen<'a> {
    builder: &'a mut PathBuilder,
    x: f32,
    baseline: f32,
}

impl CanvasPen<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x, self.baseline - y)
    }
}

impl OutlinePen for CanvasPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
