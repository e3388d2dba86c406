use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::assets::ImageData;
use crate::paint::Color;

use super::{FontId, FontSystem};

/// Error returned when a line of text cannot be turned into pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RasterizeError {
    /// Nothing to draw: empty string or a layout with zero width.
    Empty,
    /// The font handle does not belong to the rasterizer's font system.
    UnknownFont(FontId),
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizeError::Empty => f.write_str("nothing to rasterize"),
            RasterizeError::UnknownFont(id) => write!(f, "unknown font {id:?}"),
        }
    }
}

impl std::error::Error for RasterizeError {}

/// Turns one line of text into a premultiplied RGBA image.
///
/// Empty strings are failures, not zero-sized images.
pub trait LineRasterizer {
    fn rasterize_line(&self, text: &str, color: Color) -> Result<ImageData, RasterizeError>;
}

/// fontdue-backed single-line rasterizer with one font at a fixed pixel size.
pub struct TextRasterizer {
    fonts: FontSystem,
    font: FontId,
    size: f32,
}

impl TextRasterizer {
    pub fn new(fonts: FontSystem, font: FontId, size: f32) -> Self {
        Self { fonts, font, size }
    }
}

impl LineRasterizer for TextRasterizer {
    fn rasterize_line(&self, text: &str, color: Color) -> Result<ImageData, RasterizeError> {
        if text.is_empty() {
            return Err(RasterizeError::Empty);
        }

        let font = self
            .fonts
            .get(self.font)
            .ok_or(RasterizeError::UnknownFont(self.font))?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, self.size, 0));

        let glyphs = layout.glyphs();

        // Advance extent rather than bitmap right edge, so trailing spaces count.
        let width = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, self.size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
            .ceil() as u32;

        let line_height = match layout.height() {
            h if h > 0.0 => h,
            _ => self.size * 1.2,
        };
        let height = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(line_height, f32::max)
            .ceil() as u32;

        if width == 0 || height == 0 {
            return Err(RasterizeError::Empty);
        }

        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        let mut canvas = Canvas {
            pixels: &mut pixels,
            width,
            height,
        };

        for g in glyphs {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_config(g.key);
            canvas.blend_coverage(
                &coverage,
                metrics.width,
                metrics.height,
                g.x.round() as i32,
                g.y.round() as i32,
                color,
            );
        }

        ImageData::from_premul_rgba8(width, height, pixels).ok_or(RasterizeError::Empty)
    }
}

/// Borrowed premultiplied RGBA8 target for glyph compositing.
struct Canvas<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl Canvas<'_> {
    /// Composites an 8-bit coverage mask tinted with `color` at `(x, y)`.
    ///
    /// Parts of the mask outside the canvas are clipped.
    fn blend_coverage(
        &mut self,
        mask: &[u8],
        mask_w: usize,
        mask_h: usize,
        x: i32,
        y: i32,
        color: Color,
    ) {
        for row in 0..mask_h {
            let dy = y + row as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for col in 0..mask_w {
                let dx = x + col as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }

                let cov = mask[row * mask_w + col];
                if cov == 0 {
                    continue;
                }

                let src = color.scaled(cov as f32 / 255.0);
                let i = (dy as usize * self.width as usize + dx as usize) * 4;
                let dst = &mut self.pixels[i..i + 4];

                // Premultiplied source-over.
                let inv = 1.0 - src.a;
                let over = |s: f32, d: u8| {
                    ((s + d as f32 / 255.0 * inv).clamp(0.0, 1.0) * 255.0).round() as u8
                };
                dst[0] = over(src.r, dst[0]);
                dst[1] = over(src.g, dst[1]);
                dst[2] = over(src.b, dst[2]);
                dst[3] = over(src.a, dst[3]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_px(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn empty_text_is_an_error() {
        let r = TextRasterizer::new(FontSystem::new(), FontId(0), 12.0);
        assert_eq!(r.rasterize_line("", Color::BLACK), Err(RasterizeError::Empty));
    }

    #[test]
    fn unknown_font_is_an_error() {
        let r = TextRasterizer::new(FontSystem::new(), FontId(3), 12.0);
        assert_eq!(
            r.rasterize_line("Pen: Up", Color::BLACK),
            Err(RasterizeError::UnknownFont(FontId(3)))
        );
    }

    #[test]
    fn full_coverage_writes_the_color() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        let mut canvas = Canvas { pixels: &mut pixels, width: 2, height: 2 };
        canvas.blend_coverage(&[255], 1, 1, 1, 0, Color::opaque(0.0, 0.0, 1.0));

        assert_eq!(canvas_px(&pixels, 2, 1, 0), [0, 0, 255, 255]);
        assert_eq!(canvas_px(&pixels, 2, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn partial_coverage_is_premultiplied() {
        let mut pixels = vec![0u8; 4];
        let mut canvas = Canvas { pixels: &mut pixels, width: 1, height: 1 };
        canvas.blend_coverage(&[128], 1, 1, 0, 0, Color::WHITE);

        let px = canvas_px(&pixels, 1, 0, 0);
        assert_eq!(px[0], px[3]);
        assert_eq!(px[3], 128);
    }

    #[test]
    fn mask_outside_canvas_is_clipped() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        let mut canvas = Canvas { pixels: &mut pixels, width: 2, height: 2 };
        canvas.blend_coverage(&[255; 9], 3, 3, -1, -1, Color::BLACK);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas_px(&pixels, 2, x, y), [0, 0, 0, 255]);
            }
        }
    }
}
