use veneer_engine::coords::{Rect, Vec2};

use crate::painter::Painter;
use crate::style::Styled;
use crate::view::View;
use crate::widgets::text_field::TextField;

/// Boxed click callback shared by the button widgets.
pub type ClickHandler = Box<dyn FnMut()>;

/// A layer-backed button with a text label.
///
/// All [`Styled`] properties apply to the button itself; the label only
/// carries text, color and font.
///
/// # Example
/// ```
/// use veneer_engine::coords::Rect;
/// use veneer_engine::paint::Color;
/// use veneer_ui::prelude::*;
///
/// let mut save = Button::new(Rect::new(0.0, 0.0, 96.0, 32.0), "Save")
///     .on_click(|| println!("saved!"));
/// save.set_bg_color(Some(Color::from_hex("#1A80FF").unwrap()));
/// save.set_corner_radius(6.0);
/// ```
pub struct Button {
    view: View,
    label: TextField,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(bounds: Rect, title: impl Into<String>) -> Self {
        Self { view: View::new(bounds), label: TextField::new(bounds, title), on_click: None }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn label(&self) -> &TextField {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut TextField {
        &mut self.label
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.view.set_bounds(bounds);
        self.label.view_mut().set_bounds(bounds);
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

impl Styled for Button {
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
