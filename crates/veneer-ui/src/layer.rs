use veneer_engine::coords::{CornerRadii, Rect, Vec2};
use veneer_engine::paint::{evenly_spaced, Color, ColorStop, LinearGradient, Paint};
use veneer_engine::scene::Border;

use crate::animation::{BasicAnimation, KeyPath};
use crate::gradient::GradientSpec;
use crate::painter::Painter;

// ── GradientLayer ─────────────────────────────────────────────────────────

/// Stable handle to a sublayer. Survives insertions at lower indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SublayerId(u32);

/// Gradient-filled sublayer.
///
/// `locations` pins each color to an offset in `[0, 1]`; `None` spreads the
/// colors evenly. Extra locations are ignored and missing ones fall back to
/// even spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    pub colors: Vec<Color>,
    pub locations: Option<Vec<f32>>,
    /// Unit-square start point.
    pub start: Vec2,
    /// Unit-square end point.
    pub end: Vec2,
    pub frame: Rect,
    pub animations: Vec<BasicAnimation>,
}

impl GradientLayer {
    pub fn new() -> Self {
        Self {
            colors: Vec::new(),
            locations: None,
            start: Vec2::new(0.5, 0.0),
            end: Vec2::new(0.5, 1.0),
            frame: Rect::default(),
            animations: Vec::new(),
        }
    }

    pub fn from_spec(spec: &GradientSpec) -> Self {
        let mut layer = Self::new();
        layer.apply(spec);
        layer
    }

    /// Replaces colors, points and frame with `spec`. Animations are kept.
    pub fn apply(&mut self, spec: &GradientSpec) {
        self.colors.clone_from(&spec.stops);
        self.locations = None;
        self.start = spec.start;
        self.end = spec.end;
        self.frame = spec.frame;
    }

    /// The current parameters in [`GradientSpec`] form.
    pub fn spec(&self) -> GradientSpec {
        GradientSpec {
            stops: self.colors.clone(),
            start: self.start,
            end: self.end,
            frame: self.frame,
        }
    }

    pub fn add_animation(&mut self, animation: BasicAnimation) {
        self.animations.push(animation);
    }

    /// Frame after applying animated transforms at `elapsed` seconds.
    pub fn presentation_frame(&self, elapsed: f32) -> Rect {
        let dx = self
            .animations
            .iter()
            .filter(|a| a.key_path == KeyPath::TranslationX)
            .filter_map(|a| a.value_at(elapsed))
            .sum::<f32>();
        self.frame.translated(Vec2::new(dx, 0.0))
    }

    fn stops(&self) -> Vec<ColorStop> {
        match &self.locations {
            Some(locations) if locations.len() >= self.colors.len() => self
                .colors
                .iter()
                .zip(locations)
                .map(|(&color, &t)| ColorStop::new(t, color))
                .collect(),
            _ => evenly_spaced(&self.colors),
        }
    }

    /// Engine paint for this layer drawn into `frame`.
    pub fn paint_in(&self, frame: Rect) -> Paint {
        Paint::LinearGradient(LinearGradient::new(
            frame.point_at(self.start),
            frame.point_at(self.end),
            self.stops(),
        ))
    }
}

impl Default for GradientLayer {
    fn default() -> Self {
        Self::new()
    }
}

// ── Layer ─────────────────────────────────────────────────────────────────

/// Backing render layer of a view.
///
/// Paint order: background, sublayers (clipped to the rounded frame when
/// `masks_to_bounds`), then the border on top of everything.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub frame: Rect,
    pub background_color: Option<Color>,
    pub corner_radius: f32,
    pub masks_to_bounds: bool,
    pub border_width: f32,
    pub border_color: Color,
    sublayers: Vec<(SublayerId, GradientLayer)>,
    next_id: u32,
}

impl Layer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            background_color: None,
            corner_radius: 0.0,
            masks_to_bounds: false,
            border_width: 0.0,
            border_color: Color::black(),
            sublayers: Vec::new(),
            next_id: 0,
        }
    }

    /// Inserts a sublayer at `index` (clamped to the current count); index 0 is drawn first.
    pub fn insert_sublayer(&mut self, index: usize, sublayer: GradientLayer) -> SublayerId {
        let id = SublayerId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.sublayers.len());
        self.sublayers.insert(index, (id, sublayer));
        id
    }

    /// Appends a sublayer on top of the existing ones.
    pub fn add_sublayer(&mut self, sublayer: GradientLayer) -> SublayerId {
        self.insert_sublayer(usize::MAX, sublayer)
    }

    pub fn remove_sublayer(&mut self, id: SublayerId) -> Option<GradientLayer> {
        let index = self.sublayers.iter().position(|(sid, _)| *sid == id)?;
        Some(self.sublayers.remove(index).1)
    }

    pub fn sublayer(&self, id: SublayerId) -> Option<&GradientLayer> {
        self.sublayers.iter().find(|(sid, _)| *sid == id).map(|(_, l)| l)
    }

    pub fn sublayer_mut(&mut self, id: SublayerId) -> Option<&mut GradientLayer> {
        self.sublayers.iter_mut().find(|(sid, _)| *sid == id).map(|(_, l)| l)
    }

    /// Sublayers in paint order.
    pub fn sublayers(&self) -> impl Iterator<Item = &GradientLayer> {
        self.sublayers.iter().map(|(_, l)| l)
    }

    pub fn sublayer_index(&self, id: SublayerId) -> Option<usize> {
        self.sublayers.iter().position(|(sid, _)| *sid == id)
    }

    #[inline]
    fn radii(&self) -> CornerRadii {
        CornerRadii::all(self.corner_radius)
    }

    /// Records this layer at animation time `elapsed` (seconds).
    pub fn paint(&self, painter: &mut Painter, elapsed: f32) {
        if let Some(bg) = self.background_color {
            painter.fill_rounded_rect_corners(self.frame, self.radii(), bg, None);
        }

        if self.masks_to_bounds {
            painter.push_clip(self.frame, self.radii());
        }
        for sublayer in self.sublayers() {
            let frame = sublayer.presentation_frame(elapsed);
            painter.fill_rect(frame, sublayer.paint_in(frame));
        }
        if self.masks_to_bounds {
            painter.pop_clip();
        }

        if let Some(border) = Border::visible(self.border_width, self.border_color) {
            painter.fill_rounded_rect_corners(
                self.frame,
                self.radii(),
                Color::transparent(),
                Some(border),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::configure;
    use veneer_engine::scene::{DrawCmd, DrawList};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 120.0, 40.0)
    }

    fn record(layer: &Layer, elapsed: f32) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        layer.paint(&mut painter, elapsed);
        list
    }

    #[test]
    fn insert_at_zero_goes_below_existing() {
        let mut layer = Layer::new(bounds());
        let top = layer.add_sublayer(GradientLayer::new());
        let bottom = layer.insert_sublayer(0, GradientLayer::new());
        assert_eq!(layer.sublayer_index(bottom), Some(0));
        assert_eq!(layer.sublayer_index(top), Some(1));
    }

    #[test]
    fn ids_survive_removal_of_siblings() {
        let mut layer = Layer::new(bounds());
        let a = layer.add_sublayer(GradientLayer::new());
        let b = layer.add_sublayer(GradientLayer::new());
        assert!(layer.remove_sublayer(a).is_some());
        assert_eq!(layer.sublayer_index(b), Some(0));
        assert!(layer.sublayer(a).is_none());
    }

    #[test]
    fn bare_layer_draws_nothing() {
        assert!(record(&Layer::new(bounds()), 0.0).is_empty());
    }

    #[test]
    fn border_is_drawn_above_sublayers() {
        let mut layer = Layer::new(bounds());
        layer.background_color = Some(Color::white());
        layer.border_width = 2.0;
        layer.add_sublayer(GradientLayer::from_spec(&configure(
            &[Color::white(), Color::black()],
            true,
            bounds(),
        )));

        let mut list = record(&layer, 0.0);
        let kinds: Vec<&str> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::RoundedRect(cmd) if cmd.border.is_some() => "border",
                DrawCmd::RoundedRect(_) => "background",
                DrawCmd::Rect(_) => "sublayer",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["background", "sublayer", "border"]);
    }

    #[test]
    fn masking_clips_sublayers_to_rounded_frame() {
        let mut layer = Layer::new(bounds());
        layer.corner_radius = 8.0;
        layer.masks_to_bounds = true;
        layer.add_sublayer(GradientLayer::from_spec(&configure(&[Color::white()], true, bounds())));

        let list = record(&layer, 0.0);
        let clip = list.items()[0].clip.expect("sublayer should be clipped");
        assert_eq!(clip.rect, bounds());
        assert_eq!(clip.radii, CornerRadii::all(8.0));
    }

    #[test]
    fn transparent_or_zero_border_is_skipped() {
        let mut layer = Layer::new(bounds());
        layer.border_width = 3.0;
        layer.border_color = Color::transparent();
        assert!(record(&layer, 0.0).is_empty());
    }

    #[test]
    fn explicit_locations_pin_stops() {
        let mut g = GradientLayer::new();
        g.colors = vec![Color::white(), Color::black()];
        g.locations = Some(vec![0.25, 0.75]);
        let Paint::LinearGradient(lg) = g.paint_in(bounds()) else {
            panic!("expected a gradient");
        };
        assert_eq!(lg.stops[0].t, 0.25);
        assert_eq!(lg.stops[1].t, 0.75);
    }

    #[test]
    fn translation_animation_moves_presentation_frame() {
        let mut g = GradientLayer::from_spec(&configure(&[], true, bounds()));
        g.add_animation(BasicAnimation::new(KeyPath::TranslationX, 0.0, 100.0, 1.0));
        assert_eq!(g.presentation_frame(0.5).origin, Vec2::new(50.0, 0.0));
        // Removed after completion, so the model frame is back.
        assert_eq!(g.presentation_frame(2.0), bounds());
    }
}
