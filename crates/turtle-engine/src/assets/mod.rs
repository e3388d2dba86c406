//! Image assets.
//!
//! Decoded images are stored as premultiplied RGBA8 so they can be uploaded
//! to textures and blended with the same state as every other draw.

mod loader;

pub use loader::{AssetError, ImageData, load_image};
