use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// The renderer's sprite image drawn as a rotated square.
///
/// Native image colors are used; there is no tint.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    /// Center of the sprite in logical pixels.
    pub center: Vec2,
    /// Unrotated width and height.
    pub size: Vec2,
    /// Rotation about `center` in degrees, positive clockwise on screen.
    pub rotation_deg: f32,
}

impl SpriteCmd {
    /// Unrotated bounds.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Rotated corners: top-left, top-right, bottom-right, bottom-left of the image.
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.size * 0.5;
        let rad = self.rotation_deg.to_radians();
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|c| self.center + c.rotated(rad))
    }
}

impl DrawList {
    pub fn push_sprite(&mut self, z: ZIndex, center: Vec2, size: Vec2, rotation_deg: f32) {
        self.push(z, DrawCmd::Sprite(SpriteCmd { center, size, rotation_deg }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn unrotated_corners_match_bounds() {
        let cmd = SpriteCmd {
            center: Vec2::new(100.0, 100.0),
            size: Vec2::splat(50.0),
            rotation_deg: 0.0,
        };
        for (got, want) in cmd.corners().into_iter().zip(cmd.bounds().corners()) {
            assert!(close(got, want), "{got:?} vs {want:?}");
        }
        assert_eq!(cmd.bounds().min(), Vec2::new(75.0, 75.0));
    }

    #[test]
    fn quarter_turn_moves_top_left_to_top_right() {
        let cmd = SpriteCmd {
            center: Vec2::new(0.0, 0.0),
            size: Vec2::splat(50.0),
            rotation_deg: 90.0,
        };
        let [tl, ..] = cmd.corners();
        assert!(close(tl, Vec2::new(25.0, -25.0)));
    }
}
