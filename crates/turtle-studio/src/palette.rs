//! The five pen colors and their names.

use std::fmt;

use turtle_engine::paint::Color;

/// Straight RGB triple, each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Opaque engine color.
    pub fn to_color(self) -> Color {
        Color::opaque(self.r, self.g, self.b)
    }
}

/// Pen colors selectable with the `1`..`5` keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PaletteColor {
    Black,
    Blue,
    Red,
    Green,
    Yellow,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Yellow,
    ];

    /// Maps a 1-based option number to a palette entry.
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(PaletteColor::Black),
            2 => Some(PaletteColor::Blue),
            3 => Some(PaletteColor::Red),
            4 => Some(PaletteColor::Green),
            5 => Some(PaletteColor::Yellow),
            _ => None,
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Black => Rgb::new(0.0, 0.0, 0.0),
            PaletteColor::Blue => Rgb::new(0.0, 0.0, 1.0),
            PaletteColor::Red => Rgb::new(1.0, 0.0, 0.0),
            PaletteColor::Green => Rgb::new(0.0, 1.0, 0.0),
            PaletteColor::Yellow => Rgb::new(1.0, 1.0, 0.0),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Blue => "Blue",
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Yellow => "Yellow",
        }
    }

    /// Palette entry with exactly this RGB value, if any.
    pub fn matching(rgb: Rgb) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.rgb() == rgb)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for an RGB value: a palette name on exact match, else `"Custom"`.
pub fn color_name(rgb: Rgb) -> &'static str {
    PaletteColor::matching(rgb).map_or("Custom", PaletteColor::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_one_to_five_cover_the_palette_in_order() {
        let from_options: Vec<_> = (1..=5).filter_map(PaletteColor::from_option).collect();
        assert_eq!(from_options, PaletteColor::ALL);
    }

    #[test]
    fn out_of_range_options_are_rejected() {
        assert_eq!(PaletteColor::from_option(0), None);
        assert_eq!(PaletteColor::from_option(6), None);
    }

    #[test]
    fn every_palette_rgb_names_itself() {
        for p in PaletteColor::ALL {
            assert_eq!(color_name(p.rgb()), p.name());
        }
    }

    #[test]
    fn near_miss_is_custom() {
        assert_eq!(color_name(Rgb::new(0.0, 0.0, 0.999)), "Custom");
        assert_eq!(color_name(Rgb::new(0.5, 0.5, 0.5)), "Custom");
    }
}
