//! Status text in the top-left corner.

use turtle_engine::assets::ImageData;
use turtle_engine::coords::Vec2;
use turtle_engine::paint::Color;
use turtle_engine::text::LineRasterizer;

use crate::marker::Marker;
use crate::palette::color_name;

/// A rasterized status line and where its top-left corner goes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub origin: Vec2,
    pub image: ImageData,
}

/// The four status lines for `marker`, top to bottom.
pub fn status_lines(marker: &Marker) -> [String; 4] {
    [
        format!("Position: ({:.1}, {:.1})", marker.position.x, marker.position.y),
        format!("Angle: {:.1} degrees", marker.heading),
        format!("Pen: {}", if marker.pen_down { "Down" } else { "Up" }),
        format!("Line Color: {}", color_name(marker.color)),
    ]
}

/// Rasterizes `lines` and stacks them downward from `origin`.
///
/// Each rendered line advances the cursor by its height plus `gap`. A line
/// that fails to rasterize is skipped without advancing, so later lines move up.
pub fn layout_lines<R>(
    lines: &[String],
    rasterizer: &R,
    color: Color,
    origin: Vec2,
    gap: f32,
) -> Vec<OverlayLine>
where
    R: LineRasterizer + ?Sized,
{
    let mut out = Vec::with_capacity(lines.len());
    let mut y = origin.y;

    for text in lines {
        match rasterizer.rasterize_line(text, color) {
            Ok(image) => {
                let height = image.height as f32;
                out.push(OverlayLine {
                    origin: Vec2::new(origin.x, y),
                    image,
                });
                y += height + gap;
            }
            Err(e) => log::debug!("status line {text:?} skipped: {e}"),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PaletteColor, Rgb};
    use turtle_engine::text::RasterizeError;

    /// Lines are `len` pixels wide and 10 tall; lines containing "Pen" fail.
    struct FakeRasterizer;

    impl LineRasterizer for FakeRasterizer {
        fn rasterize_line(&self, text: &str, _color: Color) -> Result<ImageData, RasterizeError> {
            if text.is_empty() || text.contains("Pen") {
                return Err(RasterizeError::Empty);
            }
            let w = text.len() as u32;
            ImageData::from_premul_rgba8(w, 10, vec![0; (w * 10 * 4) as usize])
                .ok_or(RasterizeError::Empty)
        }
    }

    fn marker() -> Marker {
        Marker::new(Vec2::new(400.0, 400.0), 200.0, 25.0)
    }

    #[test]
    fn status_lines_use_one_decimal() {
        let mut m = marker();
        m.position = Vec2::new(600.0, 123.456);
        m.heading = 270.26;
        m.set_pen_down(true);
        m.set_color(2);

        assert_eq!(
            status_lines(&m),
            [
                "Position: (600.0, 123.5)".to_string(),
                "Angle: 270.3 degrees".to_string(),
                "Pen: Down".to_string(),
                "Line Color: Blue".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_color_is_custom() {
        let mut m = marker();
        m.color = Rgb::new(0.2, 0.4, 0.6);
        assert_eq!(status_lines(&m)[3], "Line Color: Custom");
        m.color = PaletteColor::Yellow.rgb();
        assert_eq!(status_lines(&m)[3], "Line Color: Yellow");
    }

    #[test]
    fn lines_stack_with_gap() {
        let lines = ["a".to_string(), "bb".to_string()];
        let out = layout_lines(&lines, &FakeRasterizer, Color::BLACK, Vec2::new(10.0, 10.0), 2.0);
        let origins: Vec<_> = out.iter().map(|l| l.origin).collect();
        assert_eq!(origins, vec![Vec2::new(10.0, 10.0), Vec2::new(10.0, 22.0)]);
    }

    #[test]
    fn failed_line_is_skipped_and_later_lines_move_up() {
        let lines = status_lines(&marker());
        let out = layout_lines(&lines, &FakeRasterizer, Color::BLACK, Vec2::new(10.0, 10.0), 2.0);

        assert_eq!(out.len(), 3);
        assert_eq!(out[2].origin, Vec2::new(10.0, 34.0));
        assert_eq!(out[2].image.width, "Line Color: Black".len() as u32);
    }
}
