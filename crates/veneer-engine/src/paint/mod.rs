//! Paint model shared between the styling layer and host renderers.
//!
//! Scope:
//! - color representation (straight alpha) and hex literals
//! - paint sources (solid, gradients)
//! - GPU-ready packing of gradient paints
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod hex;
pub mod uniform;

pub use color::Color;
pub use gradient::{evenly_spaced, ColorStop, LinearGradient};
pub use hex::{parse_hex_colors, HexColorError};
pub use uniform::GradientUniform;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
