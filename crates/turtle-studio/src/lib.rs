//! Interactive turtle graphics.
//!
//! A marker moves around the window under keyboard control and, with the pen
//! down, leaves a trail of colored segments. Each frame the input translator
//! mutates the [`session::Session`], then the scene description turns the
//! session into a draw list for the engine renderers.

pub mod app;
pub mod config;
pub mod frame;
pub mod input;
pub mod marker;
pub mod overlay;
pub mod palette;
pub mod session;
pub mod trail;

pub use app::run;
pub use config::StudioConfig;
