use veneer_engine::coords::Rect;
use veneer_engine::paint::Color;
use veneer_engine::text::{FontBook, FontId};

use crate::painter::Painter;
use crate::style::Styled;
use crate::view::View;

/// Text color used when none is set.
pub const LABEL_COLOR: Color = Color::black();

/// A font resolved from a [`FontBook`] at a specific point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub id: FontId,
    pub name: String,
    pub size: f32,
}

impl Font {
    /// Looks `name` up in `book`. `None` when no font was loaded under that name.
    pub fn resolve(book: &FontBook, name: &str, size: f32) -> Option<Self> {
        book.lookup(name).map(|id| Self { id, name: name.to_string(), size })
    }
}

/// Layer-backed text label with adjustable color, font name and size.
///
/// Font name and size changes only apply once a font is set, and each keeps
/// the other property.
#[derive(Debug, Clone)]
pub struct TextField {
    view: View,
    text: String,
    text_color: Color,
    font: Option<Font>,
}

impl TextField {
    pub fn new(bounds: Rect, text: impl Into<String>) -> Self {
        Self { view: View::new(bounds), text: text.into(), text_color: LABEL_COLOR, font: None }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// `None` restores [`LABEL_COLOR`].
    pub fn set_text_color(&mut self, color: Option<Color>) {
        self.text_color = color.unwrap_or(LABEL_COLOR);
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn font_name(&self) -> Option<&str> {
        self.font.as_ref().map(|f| f.name.as_str())
    }

    /// Switches to the font loaded under `name`, keeping the current size.
    ///
    /// Without a current font this does nothing. An unknown name keeps the
    /// current font.
    pub fn set_font_name(&mut self, name: &str, book: &FontBook) {
        let Some(size) = self.font.as_ref().map(|f| f.size) else {
            return;
        };
        match Font::resolve(book, name, size) {
            Some(font) => self.font = Some(font),
            None => log::warn!(
                "no font named '{name}' is loaded; keeping {:?}",
                self.font_name()
            ),
        }
    }

    /// `0.0` without a font.
    pub fn font_size(&self) -> f32 {
        self.font.as_ref().map_or(0.0, |f| f.size)
    }

    /// Changes the point size of the current font. Without a font this does nothing.
    pub fn set_font_size(&mut self, size: f32) {
        if let Some(font) = &mut self.font {
            font.size = size;
        }
    }
}

impl Styled for TextField {
    fn view(&self) -> &View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    fn paint(&self, painter: &mut Painter, elapsed: f32) {
        self.view.paint(painter, elapsed);
        if let Some(font) = &self.font {
            let bounds = self.view.bounds();
            let max_w = (bounds.width() > 0.0).then_some(bounds.width());
            painter.text(&self.text, font.id, font.size, self.text_color, bounds.origin, max_w);
        }
    }
}
