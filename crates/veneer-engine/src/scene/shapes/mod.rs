pub mod rect;
pub mod rounded_rect;
pub mod text;

use crate::paint::Color;

/// Stroke drawn along the inner edge of a shape, like a layer border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Returns `Some` only for a stroke that would actually cover pixels.
    #[inline]
    pub fn visible(width: f32, color: Color) -> Option<Self> {
        (width > 0.0 && color.a > 0.0).then(|| Self::new(width, color))
    }
}
