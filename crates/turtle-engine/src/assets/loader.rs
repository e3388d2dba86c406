use std::fmt;
use std::path::{Path, PathBuf};

/// CPU-side RGBA8 image, premultiplied alpha, rows top to bottom.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Wraps an already premultiplied RGBA8 buffer.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_premul_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then_some(Self { width, height, pixels })
    }

    /// Builds an image from straight-alpha RGBA8, premultiplying in place.
    pub fn from_straight_rgba8(width: u32, height: u32, mut pixels: Vec<u8>) -> Option<Self> {
        premultiply_rgba8(&mut pixels);
        Self::from_premul_rgba8(width, height, pixels)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width * 4
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Error returned by `load_image`.
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be opened or decoded.
    Decode { path: PathBuf, source: image::ImageError },
    /// The file decoded to a zero-sized image.
    Empty { path: PathBuf },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Decode { path, source } => {
                write!(f, "failed to load image {}: {source}", path.display())
            }
            AssetError::Empty { path } => write!(f, "image {} has no pixels", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Decode { source, .. } => Some(source),
            AssetError::Empty { .. } => None,
        }
    }
}

/// Loads and decodes an image file (PNG, JPEG, BMP) into premultiplied RGBA8.
pub fn load_image(path: impl AsRef<Path>) -> Result<ImageData, AssetError> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty { path: path.to_path_buf() });
    }

    let image = ImageData::from_straight_rgba8(width, height, rgba.into_raw())
        .ok_or_else(|| AssetError::Empty { path: path.to_path_buf() })?;

    log::debug!("loaded image {} ({width}x{height})", path.display());
    Ok(image)
}

fn premultiply_rgba8(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            // Rounded (c * a) / 255.
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiply_scales_color_by_alpha() {
        let mut px = vec![255, 128, 0, 128, 10, 20, 30, 255, 200, 200, 200, 0];
        premultiply_rgba8(&mut px);
        assert_eq!(&px[0..4], &[128, 64, 0, 128]);
        assert_eq!(&px[4..8], &[10, 20, 30, 255]);
        assert_eq!(&px[8..12], &[0, 0, 0, 0]);
    }

    #[test]
    fn buffer_length_must_match_dimensions() {
        assert!(ImageData::from_premul_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(ImageData::from_premul_rgba8(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_image("this/path/does/not/exist.png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("exist.png"));
    }
}
