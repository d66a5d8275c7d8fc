//! Font registry used by text styling.
//!
//! Fonts are loaded from raw bytes under a name; styling code refers to them
//! by that name and draw commands carry the resolved [`FontId`].

mod font_system;

pub use font_system::{FontBook, FontId, FontLoadError};
