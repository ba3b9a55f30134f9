//! TrueType loading and multi-line text rasterization

use crate::error::{RenderError, RenderResult};
use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};
use std::path::Path;
use tracing::debug;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A typeface loaded once at a fixed pixel size.
///
/// The line height is derived from the vertical glyph metrics at load
/// time and reused for every label.
#[derive(Debug)]
pub struct LabelFont {
    font: Font<'static>,
    scale: Scale,
    line_height: i64,
}

impl LabelFont {
    /// Load a TrueType font from `path` at `size_px` pixels.
    pub fn load(path: &Path, size_px: u32) -> RenderResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| RenderError::Font(format!("read {}: {e}", path.display())))?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            RenderError::Font(format!("unsupported font data in {}", path.display()))
        })?;

        let scale = Scale::uniform(size_px as f32);
        let v_metrics = font.v_metrics(scale);
        let line_height = (v_metrics.ascent - v_metrics.descent).ceil() as i64 + 2;
        debug!(path = %path.display(), size_px, line_height, "font loaded");

        Ok(Self {
            font,
            scale,
            line_height,
        })
    }

    /// Vertical advance between successive text lines, in pixels
    pub fn line_height(&self) -> i64 {
        self.line_height
    }
}

/// Draw `text` onto `canvas`, one line per newline, left-aligned at
/// `origin` and advancing by the font's line height.
///
/// No wrapping or truncation; glyphs past the canvas edge are clipped
/// pixel by pixel.
pub fn draw_multiline_text(canvas: &mut RgbaImage, text: &str, origin: (i64, i64), font: &LabelFont) {
    let (x, mut y) = origin;
    for line in text.split('\n') {
        draw_line(canvas, line, x, y, font);
        y += font.line_height;
    }
}

fn draw_line(canvas: &mut RgbaImage, line: &str, x: i64, y: i64, font: &LabelFont) {
    let v_metrics = font.font.v_metrics(font.scale);
    let baseline = y as f32 + v_metrics.ascent;
    let mut caret = x as f32;

    for ch in line.chars() {
        let glyph = font
            .font
            .glyph(ch)
            .scaled(font.scale)
            .positioned(point(caret, baseline));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i64 + bb.min.x as i64;
                let py = gy as i64 + bb.min.y as i64;
                if px < 0 || py < 0 || px >= canvas.width() as i64 || py >= canvas.height() as i64 {
                    return;
                }
                if coverage <= 0.0 {
                    return;
                }
                let dst = canvas.get_pixel_mut(px as u32, py as u32);
                let inv = 1.0 - coverage;
                for c in 0..3 {
                    dst.0[c] = (BLACK.0[c] as f32 * coverage + dst.0[c] as f32 * inv) as u8;
                }
                dst.0[3] = 255;
            });
        }
        caret += glyph.unpositioned().h_metrics().advance_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_font_file() {
        let err = LabelFont::load(Path::new("/nonexistent/font.ttf"), 24).unwrap_err();
        assert!(matches!(err, RenderError::Font(_)));
    }

    #[test]
    fn test_garbage_font_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();
        let err = LabelFont::load(file.path(), 24).unwrap_err();
        assert!(matches!(err, RenderError::Font(_)));
    }
}
