//! The user-controlled marker.

use turtle_engine::coords::Vec2;

use crate::palette::{PaletteColor, Rgb};

/// Marker kinematic state.
///
/// `heading` is in degrees, `[0, 360)`, 0 pointing along +X and increasing
/// counter-clockwise as seen on screen. Screen Y grows downward, so moving
/// along the heading subtracts the sine term from Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub heading: f32,
    pub pen_down: bool,
    pub color: Rgb,

    /// Forward speed, logical pixels per second.
    speed: f32,
    /// Half the sprite's side; the center keeps this far from every edge.
    half_extent: f32,
}

impl Marker {
    /// A marker at `position`, heading 0, pen up, drawing in black.
    pub fn new(position: Vec2, speed: f32, half_extent: f32) -> Self {
        Self {
            position,
            heading: 0.0,
            pen_down: false,
            color: PaletteColor::Black.rgb(),
            speed,
            half_extent,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Adds `delta` degrees and wraps the result into `[0, 360)`.
    pub fn turn(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.heading = normalize_degrees(self.heading + delta);
    }

    pub fn set_pen_down(&mut self, down: bool) {
        self.pen_down = down;
    }

    /// Selects palette entry `option` (1..=5).
    ///
    /// Any other option leaves the color unchanged and is logged. Returns
    /// whether the color was applied.
    pub fn set_color(&mut self, option: u8) -> bool {
        match PaletteColor::from_option(option) {
            Some(p) => {
                self.color = p.rgb();
                log::info!("color changed to {p}");
                true
            }
            None => {
                log::warn!("invalid color option {option}");
                false
            }
        }
    }

    /// Moves `speed * dt` along the heading, then clamps into a `width` x
    /// `height` window.
    ///
    /// Returns the positions before and after the move.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) -> (Vec2, Vec2) {
        let old = self.position;
        let distance = self.speed * dt;
        let rad = self.heading.to_radians();

        let moved = Vec2::new(
            old.x + distance * rad.cos(),
            old.y - distance * rad.sin(),
        );

        self.position = Vec2::new(
            clamp_axis(moved.x, self.half_extent, width),
            clamp_axis(moved.y, self.half_extent, height),
        );

        (old, self.position)
    }
}

/// Wraps degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f32) -> f32 {
    let h = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

/// Low edge wins when the window is narrower than the sprite.
fn clamp_axis(v: f32, half: f32, limit: f32) -> f32 {
    if v - half < 0.0 {
        half
    } else if v + half > limit {
        limit - half
    } else {
        v
    }
}
