//! Turtle engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the studio:
//! window/event loop, input tracking, frame timing, draw lists, renderers,
//! font rasterization and image asset loading.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod assets;
pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
