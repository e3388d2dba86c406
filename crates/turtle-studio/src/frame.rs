//! Session to draw list.
//!
//! Describing a frame is pure: it reads the session, rasterizes status text
//! on the CPU and records draw commands. GPU submission happens later in the
//! engine renderers.

use turtle_engine::coords::Vec2;
use turtle_engine::scene::{DrawList, ZIndex};
use turtle_engine::text::LineRasterizer;

use crate::config::StudioConfig;
use crate::overlay::{layout_lines, status_lines};
use crate::session::Session;

pub const Z_TRAIL: ZIndex = ZIndex::new(0);
pub const Z_MARKER: ZIndex = ZIndex::new(1);
pub const Z_OVERLAY: ZIndex = ZIndex::new(2);

/// Rebuilds `list` for the current session state.
///
/// Paint order: trail segments in insertion order, then the marker sprite,
/// then the status overlay.
pub fn describe_frame<R>(
    session: &Session,
    rasterizer: &R,
    config: &StudioConfig,
    list: &mut DrawList,
) where
    R: LineRasterizer + ?Sized,
{
    list.clear();

    for seg in session.trail.iter() {
        list.push_line(Z_TRAIL, seg.from, seg.to, seg.color.to_color());
    }

    let marker = &session.marker;
    // Heading grows counter-clockwise; sprite rotation is clockwise-positive.
    list.push_sprite(
        Z_MARKER,
        marker.position,
        Vec2::splat(config.marker_size),
        -marker.heading,
    );

    let lines = status_lines(marker);
    for line in layout_lines(
        &lines,
        rasterizer,
        config.text_color,
        config.overlay_origin,
        config.overlay_line_gap,
    ) {
        list.push_text(Z_OVERLAY, line.image, line.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtle_engine::assets::ImageData;
    use turtle_engine::paint::Color;
    use turtle_engine::scene::DrawCmd;
    use turtle_engine::text::RasterizeError;

    use crate::palette::PaletteColor;
    use crate::trail::Segment;

    struct NoText;

    impl LineRasterizer for NoText {
        fn rasterize_line(&self, _: &str, _: Color) -> Result<ImageData, RasterizeError> {
            Err(RasterizeError::Empty)
        }
    }

    struct BlockText;

    impl LineRasterizer for BlockText {
        fn rasterize_line(&self, _: &str, _: Color) -> Result<ImageData, RasterizeError> {
            ImageData::from_premul_rgba8(4, 12, vec![255; 4 * 12 * 4]).ok_or(RasterizeError::Empty)
        }
    }

    fn session_with_trail() -> (Session, StudioConfig) {
        let config = StudioConfig::default();
        let mut session = Session::new(&config, 800, 800);
        for (i, color) in [PaletteColor::Red, PaletteColor::Blue].into_iter().enumerate() {
            let x = i as f32 * 10.0;
            session
                .trail
                .append(Segment {
                    from: Vec2::new(x, 0.0),
                    to: Vec2::new(x + 10.0, 0.0),
                    color: color.rgb(),
                })
                .unwrap();
        }
        (session, config)
    }

    #[test]
    fn trail_then_sprite_then_overlay() {
        let (session, config) = session_with_trail();
        let mut list = DrawList::new();
        describe_frame(&session, &BlockText, &config, &mut list);

        let kinds: Vec<&str> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(_) => "line",
                DrawCmd::Sprite(_) => "sprite",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, ["line", "line", "sprite", "text", "text", "text", "text"]);
    }

    #[test]
    fn segments_keep_insertion_order_and_color() {
        let (session, config) = session_with_trail();
        let mut list = DrawList::new();
        describe_frame(&session, &NoText, &config, &mut list);

        let lines: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(l) => Some((l.from.x, l.color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                (0.0, Color::opaque(1.0, 0.0, 0.0)),
                (10.0, Color::opaque(0.0, 0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn sprite_is_centered_and_counter_rotated() {
        let (mut session, config) = session_with_trail();
        session.marker.turn(30.0);
        let mut list = DrawList::new();
        describe_frame(&session, &NoText, &config, &mut list);

        let sprite = list
            .items()
            .iter()
            .find_map(|item| match &item.cmd {
                DrawCmd::Sprite(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(sprite.center, Vec2::new(400.0, 400.0));
        assert_eq!(sprite.size, Vec2::splat(50.0));
        assert_eq!(sprite.rotation_deg, -30.0);
    }

    #[test]
    fn overlay_starts_at_configured_origin() {
        let (session, config) = session_with_trail();
        let mut list = DrawList::new();
        describe_frame(&session, &BlockText, &config, &mut list);

        let origins: Vec<_> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(t) => Some(t.origin),
                _ => None,
            })
            .collect();
        assert_eq!(
            origins,
            vec![
                Vec2::new(10.0, 10.0),
                Vec2::new(10.0, 24.0),
                Vec2::new(10.0, 38.0),
                Vec2::new(10.0, 52.0),
            ]
        );
    }

    #[test]
    fn describing_twice_does_not_accumulate() {
        let (session, config) = session_with_trail();
        let mut list = DrawList::new();
        describe_frame(&session, &NoText, &config, &mut list);
        describe_frame(&session, &NoText, &config, &mut list);
        assert_eq!(list.len(), 3);
    }
}
