//! Time subsystem.
//!
//! One `FrameClock` per animated surface; call `tick()` once per presented
//! frame and sample animations with `FrameTime::elapsed`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
