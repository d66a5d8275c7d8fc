//! GPU-ready packing of paints.
//!
//! Host renderers upload one [`GradientUniform`] per filled shape. The layout
//! is `#[repr(C)]` with 16-byte aligned rows so it can be bound directly as a
//! uniform or instance buffer.

use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;

use super::{Color, Paint};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    /// Premultiplied color at the start point.
    pub color0: [f32; 4],
    /// Premultiplied color at the end point.
    pub color1: [f32; 4],
    /// Gradient axis start, logical pixels.
    pub start: [f32; 2],
    /// Gradient axis end, logical pixels.
    pub end: [f32; 2],
    /// `[x, y, w, h]` of the filled rect, logical pixels.
    pub frame: [f32; 4],
}

impl GradientUniform {
    /// Packs `paint` filling `frame`.
    ///
    /// Solid fills and gradients with fewer than two stops produce a
    /// zero-length axis so the shader falls back to `color0`. Gradients with
    /// more than two stops keep only the first and last.
    pub fn from_paint(paint: &Paint, frame: Rect) -> Self {
        let frame = [frame.origin.x, frame.origin.y, frame.size.x, frame.size.y];
        match paint {
            Paint::Solid(c) => Self::solid(*c, frame),
            Paint::LinearGradient(g) => match (g.stops.first(), g.stops.last()) {
                (Some(first), Some(last)) if g.stops.len() >= 2 => {
                    if g.stops.len() > 2 {
                        log::debug!(
                            "packing {}-stop gradient as 2 stops; using first and last",
                            g.stops.len()
                        );
                    }
                    Self {
                        color0: first.color.to_premul(),
                        color1: last.color.to_premul(),
                        start: [g.start.x, g.start.y],
                        end: [g.end.x, g.end.y],
                        frame,
                    }
                }
                (Some(only), _) => Self::solid(only.color, frame),
                _ => Self::solid(Color::transparent(), frame),
            },
        }
    }

    fn solid(color: Color, frame: [f32; 4]) -> Self {
        let c = color.to_premul();
        Self { color0: c, color1: c, start: [0.0; 2], end: [0.0; 2], frame }
    }

    /// Raw bytes for buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{evenly_spaced, LinearGradient};

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 40.0)
    }

    fn gradient(colors: &[Color]) -> Paint {
        Paint::LinearGradient(LinearGradient::new(
            Vec2::zero(),
            Vec2::new(100.0, 0.0),
            evenly_spaced(colors),
        ))
    }

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GradientUniform>(), 64);
        let u = GradientUniform::from_paint(&Paint::Solid(Color::white()), frame());
        assert_eq!(u.as_bytes().len(), 64);
    }

    #[test]
    fn solid_paint_has_degenerate_axis() {
        let u = GradientUniform::from_paint(&Paint::Solid(Color::white()), frame());
        assert!(u.is_solid());
        assert_eq!(u.color0, u.color1);
        assert_eq!(u.frame, [0.0, 0.0, 100.0, 40.0]);
    }

    #[test]
    fn two_stop_gradient_keeps_axis() {
        let u = GradientUniform::from_paint(&gradient(&[Color::white(), Color::black()]), frame());
        assert!(!u.is_solid());
        assert_eq!(u.color0, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(u.color1, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.end, [100.0, 0.0]);
    }

    #[test]
    fn multi_stop_gradient_uses_outer_stops() {
        let red = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let u = GradientUniform::from_paint(&gradient(&[red, Color::white(), Color::black()]), frame());
        assert_eq!(u.color0, red.to_premul());
        assert_eq!(u.color1, Color::black().to_premul());
    }

    #[test]
    fn degenerate_stop_lists_fill_solid() {
        let one = GradientUniform::from_paint(&gradient(&[Color::white()]), frame());
        assert!(one.is_solid());
        assert_eq!(one.color0, [1.0; 4]);

        let none = GradientUniform::from_paint(&gradient(&[]), frame());
        assert!(none.is_solid());
        assert_eq!(none.color0, [0.0; 4]);
    }
}
