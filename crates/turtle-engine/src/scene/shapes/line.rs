use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// One-pixel straight line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

impl DrawList {
    /// Records a line from `from` to `to` in logical pixels.
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, color }));
    }
}
