use std::path::PathBuf;

use turtle_engine::coords::Vec2;
use turtle_engine::paint::Color;

/// Everything tunable about a studio session. No files or flags feed it;
/// `Default` is the shipped configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    /// Initial logical window size.
    pub window_size: (u32, u32),

    /// Preferred overlay font.
    pub font_path: PathBuf,
    /// Tried in order when `font_path` cannot be loaded.
    pub fallback_font_paths: Vec<PathBuf>,
    /// Overlay font size in pixels.
    pub font_size: f32,

    pub sprite_path: PathBuf,
    /// Side length of the square marker sprite.
    pub marker_size: f32,

    /// Forward speed in logical pixels per second.
    pub linear_speed: f32,
    /// Turn rate in degrees per second.
    pub angular_speed: f32,

    /// Segments reserved before the trail first grows.
    pub trail_capacity: usize,

    /// Top-left of the first status line.
    pub overlay_origin: Vec2,
    /// Vertical gap between status lines.
    pub overlay_line_gap: f32,

    pub background: Color,
    pub text_color: Color,
}

impl StudioConfig {
    /// Font candidates in load order.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        std::iter::once(self.font_path.clone())
            .chain(self.fallback_font_paths.iter().cloned())
            .collect()
    }

    /// Half the marker's side length; the marker's center keeps this far from every edge.
    pub fn marker_half_extent(&self) -> f32 {
        self.marker_size * 0.5
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Interactive Turtle Graphics".to_string(),
            window_size: (800, 800),

            font_path: PathBuf::from("./Fonts/DejaVuSansMNerdFont-Regular.ttf"),
            fallback_font_paths: [
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
                "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
                "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
                "/System/Library/Fonts/Menlo.ttc",
                "C:\\Windows\\Fonts\\consola.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            font_size: 12.0,

            sprite_path: PathBuf::from("./Images/mateo.png"),
            marker_size: 50.0,

            linear_speed: 200.0,
            angular_speed: 90.0,

            trail_capacity: 50,

            overlay_origin: Vec2::new(10.0, 10.0),
            overlay_line_gap: 2.0,

            background: Color::WHITE,
            text_color: Color::BLACK,
        }
    }
}
