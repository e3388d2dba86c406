//! Per-run state shared by the input translator and the scene description.

use turtle_engine::coords::{Vec2, Viewport};

use crate::config::StudioConfig;
use crate::marker::Marker;
use crate::trail::Trail;

/// Marker, trail and window size for one run of the program.
///
/// The input phase borrows it mutably; describing the frame borrows it
/// immutably.
#[derive(Debug, Clone)]
pub struct Session {
    pub marker: Marker,
    pub trail: Trail,
    width: u32,
    height: u32,
}

impl Session {
    /// A fresh session with the marker centered in a `width` x `height` window.
    pub fn new(config: &StudioConfig, width: u32, height: u32) -> Self {
        let center = Vec2::new(width as f32 * 0.5, height as f32 * 0.5);
        Self {
            marker: Marker::new(center, config.linear_speed, config.marker_half_extent()),
            trail: Trail::new(config.trail_capacity),
            width,
            height,
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Records a new window size. The marker is only re-clamped by its next move.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Logical coordinate space for rendering: `(0, 0)` top-left, `(W, H)` bottom-right.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_starts_centered_pen_up() {
        let session = Session::new(&StudioConfig::default(), 800, 800);
        assert_eq!(session.marker.position, Vec2::new(400.0, 400.0));
        assert_eq!(session.marker.heading, 0.0);
        assert!(!session.marker.pen_down);
        assert!(session.trail.is_empty());
    }

    #[test]
    fn resize_updates_viewport() {
        let mut session = Session::new(&StudioConfig::default(), 800, 800);
        session.resize(1024, 768);
        assert_eq!(session.window_size(), (1024, 768));
        assert_eq!(session.viewport(), Viewport::new(1024.0, 768.0));
    }
}
