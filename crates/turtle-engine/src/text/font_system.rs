use std::fmt;
use std::path::{Path, PathBuf};

/// Error returned by [`FontSystem::load_font`] and [`FontSystem::load_font_file`].
#[derive(Debug)]
pub enum FontLoadError {
    /// The font file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not a usable TrueType/OpenType font.
    Parse(String),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Io { path, source } => {
                write!(f, "failed to read font {}: {source}", path.display())
            }
            FontLoadError::Parse(msg) => write!(f, "font parse error: {msg}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io { source, .. } => Some(source),
            FontLoadError::Parse(_) => None,
        }
    }
}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading and released when the system drops.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// `size` is the pixel size the font will mostly be drawn at; fontdue
    /// uses it to pre-scale outlines.
    pub fn load_font(&mut self, bytes: &[u8], size: f32) -> Result<FontId, FontLoadError> {
        let settings = fontdue::FontSettings {
            scale: size.max(1.0),
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Reads a font file and loads it.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>, size: f32) -> Result<FontId, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let id = self.load_font(&bytes, size)?;
        log::debug!("loaded font {}", path.display());
        Ok(id)
    }

    /// Tries each path in order and keeps the first font that loads.
    ///
    /// Returns the last error when every candidate fails.
    pub fn load_first_available<P: AsRef<Path>>(
        &mut self,
        candidates: &[P],
        size: f32,
    ) -> Result<FontId, FontLoadError> {
        let mut last_err = None;
        for path in candidates {
            match self.load_font_file(path, size) {
                Ok(id) => return Ok(id),
                Err(e) => {
                    log::debug!("font candidate skipped: {e}");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| FontLoadError::Parse("no font candidates given".into())))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(&[0u8; 16], 12.0).unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file("no/such/font.ttf", 12.0).unwrap_err();
        assert!(matches!(err, FontLoadError::Io { .. }));
        assert!(err.to_string().contains("font.ttf"));
    }

    #[test]
    fn all_candidates_missing_returns_last_error() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_first_available(&["a/missing.ttf", "b/also-missing.ttf"], 12.0)
            .unwrap_err();
        assert!(err.to_string().contains("also-missing.ttf"));
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        let mut fonts = FontSystem::new();
        let none: [&str; 0] = [];
        assert!(fonts.load_first_available(&none, 12.0).is_err());
    }
}
