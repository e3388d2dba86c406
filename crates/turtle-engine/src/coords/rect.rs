use super::Vec2;

/// Axis-aligned box in logical pixels; `origin` is the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    pub fn min(self) -> Vec2 {
        self.origin
    }

    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Clockwise from the top-left, the winding `quad_vertices` expects.
    pub fn corners(self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, side: f32) -> Rect {
        Rect::from_origin_size(Vec2::new(x, y), Vec2::splat(side))
    }

    #[test]
    fn centered_rect_spans_half_extent_each_way() {
        let rect = Rect::from_center_size(Vec2::new(400.0, 300.0), Vec2::splat(50.0));
        assert_eq!(rect.min(), Vec2::new(375.0, 275.0));
        assert_eq!(rect.max(), Vec2::new(425.0, 325.0));
    }

    #[test]
    fn corners_run_clockwise_on_screen() {
        let [tl, tr, br, bl] = square(10.0, 20.0, 5.0).corners();
        assert_eq!(tl, Vec2::new(10.0, 20.0));
        assert_eq!(tr, Vec2::new(15.0, 20.0));
        assert_eq!(br, Vec2::new(15.0, 25.0));
        assert_eq!(bl, Vec2::new(10.0, 25.0));
    }
}
