//! Time subsystem.
//!
//! Provides frame timing without coupling to the runtime:
//! one `FrameClock` per window, `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
