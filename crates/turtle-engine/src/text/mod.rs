//! Font loading and single-line text rasterization.
//!
//! Text is rasterized on the CPU into premultiplied RGBA images. The scene
//! carries those images, so building a frame description never touches the GPU.

mod font_system;
mod rasterizer;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use rasterizer::{LineRasterizer, RasterizeError, TextRasterizer};
