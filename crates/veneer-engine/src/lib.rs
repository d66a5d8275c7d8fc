//! Veneer engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the styling layer:
//! geometry, colors and paints, hex color parsing, the draw list, frame timing,
//! and logger setup.

pub mod time;
pub mod text;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
