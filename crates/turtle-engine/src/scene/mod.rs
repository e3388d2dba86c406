//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`
//!
//! Building a `DrawList` performs no GPU work, so frame descriptions can be
//! checked in plain unit tests.

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{PaintKey, ZIndex};
pub use shapes::line::LineCmd;
pub use shapes::sprite::SpriteCmd;
pub use shapes::text::TextCmd;
