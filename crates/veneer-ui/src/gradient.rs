//! Two-axis linear gradient configuration.
//!
//! [`configure`] turns parsed colors, an orientation flag and the host's
//! current bounds into a [`GradientSpec`]: the exact shape a gradient layer
//! consumes (ordered colors, two unit-square points, a pixel-space frame).

use veneer_engine::coords::{Rect, Vec2};
use veneer_engine::paint::{
    evenly_spaced, parse_hex_colors, Color, GradientUniform, LinearGradient, Paint,
};

/// Parameters for one gradient fill.
///
/// `start` and `end` are fractions of `frame`, independent of its size.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub stops: Vec<Color>,
    pub start: Vec2,
    pub end: Vec2,
    pub frame: Rect,
}

/// Builds the gradient parameters for `colors` laid along one axis of `frame`.
///
/// Colors are used verbatim as stops; there is no minimum count. The axis runs
/// left-to-right when `horizontal`, top-to-bottom otherwise.
pub fn configure(colors: &[Color], horizontal: bool, frame: Rect) -> GradientSpec {
    GradientSpec {
        stops: colors.to_vec(),
        start: Vec2::zero(),
        end: if horizontal { Vec2::unit_x() } else { Vec2::unit_y() },
        frame,
    }
}

impl GradientSpec {
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.end == Vec2::unit_x()
    }

    /// Engine gradient in pixel space with stops spread evenly along the axis.
    pub fn to_linear_gradient(&self) -> LinearGradient {
        LinearGradient::new(
            self.frame.point_at(self.start),
            self.frame.point_at(self.end),
            evenly_spaced(&self.stops),
        )
    }

    /// GPU upload form; see [`GradientUniform::from_paint`] for degenerate stop lists.
    pub fn to_uniform(&self) -> GradientUniform {
        GradientUniform::from_paint(&Paint::LinearGradient(self.to_linear_gradient()), self.frame)
    }
}

/// Hex-string gradient settings as a host stores them.
///
/// Defaults to a white-to-black horizontal gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// Comma-separated hex colors, e.g. `"#FFFFFF,#000000"`.
    pub hex_colors: String,
    pub horizontal: bool,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self { hex_colors: "#FFFFFF,#000000".to_string(), horizontal: true }
    }
}

impl GradientConfig {
    pub fn new(hex_colors: impl Into<String>, horizontal: bool) -> Self {
        Self { hex_colors: hex_colors.into(), horizontal }
    }

    /// Colors that survive parsing, in order.
    pub fn colors(&self) -> Vec<Color> {
        parse_hex_colors(&self.hex_colors)
    }

    /// Parses the colors and configures them for `frame`.
    pub fn resolve(&self, frame: Rect) -> GradientSpec {
        configure(&self.colors(), self.horizontal, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgba(1.0, 0.0, 0.0, 1.0)
    }

    fn frame() -> Rect {
        Rect::new(10.0, 20.0, 200.0, 50.0)
    }

    #[test]
    fn horizontal_runs_left_to_right() {
        let spec = configure(&[red(), Color::white()], true, frame());
        assert_eq!(spec.start, Vec2::new(0.0, 0.0));
        assert_eq!(spec.end, Vec2::new(1.0, 0.0));
        assert!(spec.is_horizontal());
    }

    #[test]
    fn vertical_runs_top_to_bottom() {
        let spec = configure(&[red(), Color::white()], false, frame());
        assert_eq!(spec.start, Vec2::new(0.0, 0.0));
        assert_eq!(spec.end, Vec2::new(0.0, 1.0));
        assert!(!spec.is_horizontal());
    }

    #[test]
    fn frame_and_stops_pass_through() {
        let colors = [Color::white(), red(), Color::black()];
        let spec = configure(&colors, true, frame());
        assert_eq!(spec.frame, frame());
        assert_eq!(spec.stops, colors.to_vec());

        let odd = Rect::new(-5.0, 3.5, 0.0, 1e6);
        assert_eq!(configure(&colors, false, odd).frame, odd);
    }

    #[test]
    fn configure_is_idempotent() {
        let colors = parse_hex_colors("#123, #456789, #ABCDEF80");
        let a = configure(&colors, false, frame());
        let b = configure(&colors, false, frame());
        assert_eq!(a, b);
    }

    #[test]
    fn no_minimum_stop_count() {
        assert!(configure(&[], true, frame()).stops.is_empty());
        assert_eq!(configure(&[red()], true, frame()).stops, vec![red()]);
    }

    #[test]
    fn linear_gradient_maps_points_into_frame() {
        let g = configure(&[red(), Color::white()], false, frame()).to_linear_gradient();
        assert_eq!(g.start, Vec2::new(10.0, 20.0));
        assert_eq!(g.end, Vec2::new(10.0, 70.0));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[1].t, 1.0);
    }

    #[test]
    fn uniform_packs_outer_stops() {
        let u = configure(&[red(), Color::white()], true, frame()).to_uniform();
        assert_eq!(u.color0, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.color1, [1.0; 4]);
        assert_eq!(u.start, [10.0, 20.0]);
        assert_eq!(u.end, [210.0, 20.0]);
    }

    #[test]
    fn default_config_is_white_to_black_horizontal() {
        let spec = GradientConfig::default().resolve(frame());
        assert_eq!(spec.stops, vec![Color::white(), Color::black()]);
        assert!(spec.is_horizontal());
    }

    #[test]
    fn config_drops_malformed_colors() {
        let spec = GradientConfig::new("#ZZZZZZ,#FFFFFF", false).resolve(frame());
        assert_eq!(spec.stops, vec![Color::white()]);
    }
}
