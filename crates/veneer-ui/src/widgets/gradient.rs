use veneer_engine::coords::{Rect, Vec2};

use crate::gradient::{GradientConfig, GradientSpec};
use crate::layer::{GradientLayer, SublayerId};
use crate::painter::Painter;
use crate::style::Styled;
use crate::view::View;
use crate::widgets::button::ClickHandler;
use crate::widgets::text_field::TextField;

/// Gradient sublayer kept in sync with a [`GradientConfig`].
///
/// Every change to colors, orientation or bounds rebuilds the gradient
/// explicitly through [`GradientConfig::resolve`].
#[derive(Debug)]
struct GradientFill {
    config: GradientConfig,
    sublayer: SublayerId,
}

impl GradientFill {
    /// Enables layer backing and inserts the gradient below all other sublayers.
    fn install(view: &mut View, config: GradientConfig) -> Self {
        let spec = config.resolve(view.bounds());
        let sublayer = view.ensure_layer().insert_sublayer(0, GradientLayer::from_spec(&spec));
        Self { config, sublayer }
    }

    fn update(&self, view: &mut View) {
        let spec = self.config.resolve(view.bounds());
        if spec.stops.len() < 2 {
            log::debug!(
                "gradient {:?} resolved to {} stop(s)",
                self.config.hex_colors,
                spec.stops.len()
            );
        }
        if let Some(layer) = view.ensure_layer().sublayer_mut(self.sublayer) {
            layer.apply(&spec);
        }
    }

    fn spec(&self, view: &View) -> Option<GradientSpec> {
        view.layer()?.sublayer(self.sublayer).map(GradientLayer::spec)
    }
}

// ── GradientView ──────────────────────────────────────────────────────────

/// A view filled with a linear gradient described by hex colors.
///
/// # Example
/// ```
/// use veneer_engine::coords::Rect;
/// use veneer_ui::prelude::*;
///
/// let mut view = GradientView::new(Rect::new(0.0, 0.0, 200.0, 40.0));
/// view.set_hex_colors("#FF0000, #0000FF");
/// view.set_horizontal(false);
/// assert_eq!(view.gradient().unwrap().stops.len(), 2);
/// ```
#[derive(Debug)]
pub struct GradientView {
    view: View,
    fill: GradientFill,
}

impl GradientView {
    /// White-to-black, horizontal.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, GradientConfig::default())
    }

    pub fn with_config(bounds: Rect, config: GradientConfig) -> Self {
        let mut view = View::new(bounds);
        let fill = GradientFill::install(&mut view, config);
        Self { view, fill }
    }

    pub fn hex_colors(&self) -> &str {
        &self.fill.config.hex_colors
    }

    pub fn set_hex_colors(&mut self, hex_colors: impl Into<String>) {
        self.fill.config.hex_colors = hex_colors.into();
        self.fill.update(&mut self.view);
    }

    pub fn is_horizontal(&self) -> bool {
        self.fill.config.horizontal
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.fill.config.horizontal = horizontal;
        self.fill.update(&mut self.view);
    }

    /// Layout pass: adopts new bounds and refits the gradient frame.
    pub fn layout(&mut self, bounds: Rect) {
        self.view.set_bounds(bounds);
        self.fill.update(&mut self.view);
    }

    /// The gradient currently applied to the backing layer.
    pub fn gradient(&self) -> Option<GradientSpec> {
        self.fill.spec(&self.view)
    }
}

impl Styled for GradientView {
    fn view(&self) -> &View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    fn paint(&self, painter: &mut Painter, elapsed: f32) {
        self.view.paint(painter, elapsed);
    }
}

// ── GradientButton ────────────────────────────────────────────────────────

/// A clickable [`GradientView`] with a title, always clipped to its bounds.
///
/// The title label is drawn above the gradient and any shimmer.
pub struct GradientButton {
    view: View,
    fill: GradientFill,
    label: TextField,
    on_click: Option<ClickHandler>,
}

impl GradientButton {
    /// White-to-black, horizontal.
    pub fn new(bounds: Rect, title: impl Into<String>) -> Self {
        Self::with_config(bounds, title, GradientConfig::default())
    }

    pub fn with_config(bounds: Rect, title: impl Into<String>, config: GradientConfig) -> Self {
        let mut view = View::new(bounds);
        view.ensure_layer().masks_to_bounds = true;
        let fill = GradientFill::install(&mut view, config);
        Self { view, fill, label: TextField::new(bounds, title), on_click: None }
    }

    pub fn label(&self) -> &TextField {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut TextField {
        &mut self.label
    }

    /// Callback invoked by [`click`](Self::click).
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn hex_colors(&self) -> &str {
        &self.fill.config.hex_colors
    }

    pub fn set_hex_colors(&mut self, hex_colors: impl Into<String>) {
        self.fill.config.hex_colors = hex_colors.into();
        self.fill.update(&mut self.view);
    }

    pub fn is_horizontal(&self) -> bool {
        self.fill.config.horizontal
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.fill.config.horizontal = horizontal;
        self.fill.update(&mut self.view);
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.view.set_bounds(bounds);
        self.label.view_mut().set_bounds(bounds);
        self.fill.update(&mut self.view);
    }

    pub fn gradient(&self) -> Option<GradientSpec> {
        self.fill.spec(&self.view)
    }

    /// Routes a click at `pos`. Returns `true` when it landed inside the button.
    pub fn click(&mut self, pos: Vec2) -> bool {
        if !self.view.bounds().contains(pos) {
            return false;
        }
        if let Some(f) = &mut self.on_click {
            f();
        }
        true
    }
}

impl Styled for GradientButton {
    fn view(&self) -> &View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    fn paint(&self, painter: &mut Painter, elapsed: f32) {
        self.view.paint(painter, elapsed);
        self.label.paint(painter, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::shimmer::add_default_shimmer;
    use crate::widgets::fixtures::font_book;
    use crate::widgets::text_field::Font;
    use veneer_engine::paint::Color;
    use veneer_engine::scene::{DrawCmd, DrawList};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 160.0, 48.0)
    }

    #[test]
    fn defaults_to_white_black_horizontal() {
        let view = GradientView::new(bounds());
        assert_eq!(view.hex_colors(), "#FFFFFF,#000000");
        assert!(view.is_horizontal());
        let spec = view.gradient().unwrap();
        assert_eq!(spec.stops, vec![Color::white(), Color::black()]);
        assert_eq!(spec.end, Vec2::unit_x());
        assert_eq!(spec.frame, bounds());
    }

    #[test]
    fn changing_colors_rebuilds_stops() {
        let mut view = GradientView::new(bounds());
        view.set_hex_colors("#F00, nope, #00F");
        let spec = view.gradient().unwrap();
        assert_eq!(spec.stops, vec![Color::rgba(1.0, 0.0, 0.0, 1.0), Color::rgba(0.0, 0.0, 1.0, 1.0)]);
    }

    #[test]
    fn changing_orientation_moves_end_point() {
        let mut view = GradientView::new(bounds());
        view.set_horizontal(false);
        assert_eq!(view.gradient().unwrap().end, Vec2::unit_y());
        assert_eq!(view.gradient().unwrap().start, Vec2::zero());
    }

    #[test]
    fn layout_refits_frame() {
        let mut view = GradientView::new(bounds());
        let resized = Rect::new(4.0, 4.0, 300.0, 90.0);
        view.layout(resized);
        assert_eq!(view.gradient().unwrap().frame, resized);
        assert_eq!(view.view().layer().unwrap().frame, resized);
    }

    #[test]
    fn empty_config_gives_no_stops() {
        let mut view = GradientView::new(bounds());
        view.set_hex_colors("");
        assert!(view.gradient().unwrap().stops.is_empty());
    }

    #[test]
    fn gradient_stays_below_later_sublayers() {
        let mut view = GradientView::new(bounds());
        let shimmer = add_default_shimmer(&mut view);
        view.set_hex_colors("#000,#FFF");
        let layer = view.view().layer().unwrap();
        assert_eq!(layer.sublayer_index(shimmer), Some(1));
        assert_eq!(layer.sublayers().next().unwrap().colors, vec![Color::black(), Color::white()]);
    }

    #[test]
    fn view_does_not_mask_but_button_does() {
        let view = GradientView::new(bounds());
        assert!(!view.view().layer().unwrap().masks_to_bounds);
        let button = GradientButton::new(bounds(), "Go");
        assert!(button.view().layer().unwrap().masks_to_bounds);
    }

    #[test]
    fn button_styling_keeps_gradient() {
        let mut button = GradientButton::new(bounds(), "Go");
        button.set_corner_radius(12.0);
        button.set_border_width(1.0);
        button.set_horizontal(false);
        assert_eq!(button.corner_radius(), 12.0);
        assert_eq!(button.gradient().unwrap().end, Vec2::unit_y());
    }

    #[test]
    fn button_click_inside_fires_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut button = GradientButton::new(bounds(), "Go").on_click(move || counter.set(counter.get() + 1));
        assert!(button.click(Vec2::new(10.0, 10.0)));
        assert!(!button.click(Vec2::new(500.0, 10.0)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn button_title_draws_above_gradient() {
        let book = font_book(&["Regular"]);
        let mut button = GradientButton::new(bounds(), "Continue");
        let font = Font::resolve(&book, "Regular", 16.0).unwrap();
        let label = button.label().clone().with_font(font);
        *button.label_mut() = label;
        add_default_shimmer(&mut button);

        let mut list = DrawList::new();
        button.paint(&mut Painter::new(&mut list), 0.0);
        let kinds: Vec<&str> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(_) => "fill",
                DrawCmd::RoundedRect(_) => "rounded",
                DrawCmd::Text(t) => {
                    assert_eq!(t.text, "Continue");
                    "text"
                }
            })
            .collect();
        assert_eq!(kinds, vec!["fill", "fill", "text"]);
    }

    #[test]
    fn button_layout_moves_title() {
        let mut button = GradientButton::new(bounds(), "Go");
        let resized = Rect::new(8.0, 8.0, 220.0, 56.0);
        button.layout(resized);
        assert_eq!(button.label().view().bounds(), resized);
        assert_eq!(button.label().text(), "Go");
        assert_eq!(button.gradient().unwrap().frame, resized);
    }

    #[test]
    fn paint_emits_gradient_fill() {
        let view = GradientView::new(bounds());
        let mut list = DrawList::new();
        view.paint(&mut Painter::new(&mut list), 0.0);
        assert_eq!(list.len(), 1);
        assert!(matches!(&list.items()[0].cmd, DrawCmd::Rect(cmd) if cmd.rect == bounds()));
    }
}
