//! Shape renderers.

mod common;

pub mod line;
pub mod sprite;
pub mod text;
