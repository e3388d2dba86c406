use crate::assets::ImageData;
use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// A pre-rasterized line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    /// Premultiplied RGBA pixels, drawn 1:1 in logical pixels.
    pub image: ImageData,
    /// Top-left of the image in logical pixels.
    pub origin: Vec2,
}

impl TextCmd {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            Vec2::new(self.image.width as f32, self.image.height as f32),
        )
    }
}

impl DrawList {
    /// Records a rasterized text line with its top-left at `origin`.
    pub fn push_text(&mut self, z: ZIndex, image: ImageData, origin: Vec2) {
        self.push(z, DrawCmd::Text(TextCmd { image, origin }));
    }
}
