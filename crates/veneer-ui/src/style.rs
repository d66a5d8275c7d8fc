//! Layer styling shared by every view type.
//!
//! [`Styled`] exposes background, corner, border and circle properties on
//! anything that owns a [`View`]. Each setter turns on layer backing first;
//! each getter reports the neutral value when there is no layer yet.
//!
//! [`ViewStyle`] bundles the same properties into a plain value that can be
//! kept in configuration and applied in one call.

use veneer_engine::paint::Color;

use crate::painter::Painter;
use crate::view::View;

pub trait Styled {
    fn view(&self) -> &View;
    fn view_mut(&mut self) -> &mut View;

    /// Records the view's visuals at animation time `elapsed` (seconds).
    fn paint(&self, painter: &mut Painter, elapsed: f32);

    fn bg_color(&self) -> Option<Color> {
        self.view().layer().and_then(|l| l.background_color)
    }

    /// `None` clears the background.
    fn set_bg_color(&mut self, color: Option<Color>) {
        self.view_mut().ensure_layer().background_color = color;
    }

    fn corner_radius(&self) -> f32 {
        self.view().layer().map_or(0.0, |l| l.corner_radius)
    }

    /// Any positive radius also masks content to the rounded bounds.
    fn set_corner_radius(&mut self, radius: f32) {
        let layer = self.view_mut().ensure_layer();
        layer.corner_radius = radius;
        layer.masks_to_bounds = radius > 0.0;
    }

    fn border_width(&self) -> f32 {
        self.view().layer().map_or(0.0, |l| l.border_width)
    }

    fn set_border_width(&mut self, width: f32) {
        self.view_mut().ensure_layer().border_width = width;
    }

    /// Transparent when there is no layer.
    fn border_color(&self) -> Color {
        self.view().layer().map_or(Color::transparent(), |l| l.border_color)
    }

    fn set_border_color(&mut self, color: Color) {
        self.view_mut().ensure_layer().border_color = color;
    }

    /// True when the corner radius is exactly half the shorter bounds side.
    ///
    /// Resizing the view after making it a circle turns this back to false.
    fn is_circle(&self) -> bool {
        let view = self.view();
        view.layer()
            .is_some_and(|l| l.corner_radius == view.bounds().min_dimension() / 2.0)
    }

    /// `true` rounds the view into a circle (or capsule) and masks to it.
    /// `false` only enables layer backing and leaves the corners as they are.
    fn set_circle(&mut self, circle: bool) {
        let view = self.view_mut();
        let radius = view.bounds().min_dimension() / 2.0;
        let layer = view.ensure_layer();
        if circle {
            layer.corner_radius = radius;
            layer.masks_to_bounds = true;
        }
    }
}

/// Optional styling properties applied together.
///
/// Unset fields leave the target untouched. `circle` is applied last so it
/// wins over `corner_radius`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewStyle {
    /// `Some(None)` clears an existing background.
    pub bg_color: Option<Option<Color>>,
    pub corner_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<Color>,
    pub circle: Option<bool>,
}

impl ViewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(Some(color));
        self
    }

    pub fn clear_bg_color(mut self) -> Self {
        self.bg_color = Some(None);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn circle(mut self, circle: bool) -> Self {
        self.circle = Some(circle);
        self
    }

    pub fn apply<S: Styled + ?Sized>(&self, target: &mut S) {
        if let Some(bg) = self.bg_color {
            target.set_bg_color(bg);
        }
        if let Some(radius) = self.corner_radius {
            target.set_corner_radius(radius);
        }
        if let Some(width) = self.border_width {
            target.set_border_width(width);
        }
        if let Some(color) = self.border_color {
            target.set_border_color(color);
        }
        if let Some(circle) = self.circle {
            target.set_circle(circle);
        }
    }
}
