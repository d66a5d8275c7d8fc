use veneer_engine::coords::Rect;

use crate::layer::Layer;
use crate::painter::Painter;
use crate::style::Styled;

/// A rectangular view with an optional backing layer.
///
/// The layer is created lazily the first time `wants_layer` is turned on, and
/// its frame follows the view bounds from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    bounds: Rect,
    wants_layer: bool,
    layer: Option<Layer>,
}

impl View {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, wants_layer: false, layer: None }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the bounds and the backing layer's frame.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if let Some(layer) = &mut self.layer {
            layer.frame = bounds;
        }
    }

    #[inline]
    pub fn wants_layer(&self) -> bool {
        self.wants_layer
    }

    /// Turning this on creates the backing layer if it does not exist yet.
    ///
    /// Turning it off keeps the existing layer; it simply stops being created
    /// on demand.
    pub fn set_wants_layer(&mut self, wants: bool) {
        self.wants_layer = wants;
        if wants && self.layer.is_none() {
            log::debug!("creating backing layer for view at {:?}", self.bounds);
            self.layer = Some(Layer::new(self.bounds));
        }
    }

    #[inline]
    pub fn layer(&self) -> Option<&Layer> {
        self.layer.as_ref()
    }

    #[inline]
    pub fn layer_mut(&mut self) -> Option<&mut Layer> {
        self.layer.as_mut()
    }

    /// Enables layer backing and returns the layer.
    pub fn ensure_layer(&mut self) -> &mut Layer {
        self.set_wants_layer(true);
        let bounds = self.bounds;
        self.layer.get_or_insert_with(|| Layer::new(bounds))
    }
}

impl Styled for View {
    fn view(&self) -> &View {
        self
    }

    fn view_mut(&mut self) -> &mut View {
        self
    }

    fn paint(&self, painter: &mut Painter, elapsed: f32) {
        if let Some(layer) = &self.layer {
            layer.paint(painter, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_layer_until_requested() {
        let mut view = View::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(view.layer().is_none());
        view.set_wants_layer(true);
        assert_eq!(view.layer().map(|l| l.frame), Some(view.bounds()));
    }

    #[test]
    fn layer_frame_tracks_bounds() {
        let mut view = View::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.ensure_layer();
        view.set_bounds(Rect::new(5.0, 5.0, 30.0, 20.0));
        assert_eq!(view.layer().unwrap().frame, Rect::new(5.0, 5.0, 30.0, 20.0));
    }

    #[test]
    fn disabling_keeps_existing_layer() {
        let mut view = View::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        view.ensure_layer().corner_radius = 3.0;
        view.set_wants_layer(false);
        assert!(!view.wants_layer());
        assert_eq!(view.layer().unwrap().corner_radius, 3.0);
    }
}
