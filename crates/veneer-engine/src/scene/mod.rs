//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands produced by styled layers
//! - provide deterministic ordering (z-index + insertion order)
//! - carry rounded clip regions for layers that mask to bounds

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{Clip, DrawItem, DrawList};
pub use shapes::Border;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
pub use z_index::ZIndex;
