use std::collections::HashMap;
use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontBook::load_font`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLoadError {
    pub name: String,
    pub reason: String,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load font '{}': {}", self.name, self.reason)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontBook`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Named collection of loaded fonts.
///
/// Names are matched exactly (PostScript-style names such as
/// `"Inter-Bold"` are conventional). Loading a second font under an existing
/// name replaces the mapping; the old `FontId` stays valid.
#[derive(Default)]
pub struct FontBook {
    fonts: Vec<fontdue::Font>,
    names: HashMap<String, FontId>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font and registers it under `name`.
    pub fn load_font(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError { name: name.clone(), reason: e.to_string() })?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font '{name}' as {id:?}");
        self.names.insert(name, id);
        Ok(id)
    }

    /// Looks up a font by the name it was loaded under.
    pub fn lookup(&self, name: &str) -> Option<FontId> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Measures a single line of `text`, returning `(width, height)` in logical pixels.
    ///
    /// Unknown ids measure as an empty line of `size * 1.2` height.
    #[must_use]
    pub fn measure_line(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.fonts.get(id.0) else {
            return Vec2::new(0.0, size * 1.2);
        };
        let width = text
            .chars()
            .map(|c| font.metrics(c, size).advance_width)
            .sum::<f32>();
        let height = font
            .horizontal_line_metrics(size)
            .map_or(size * 1.2, |m| m.new_line_size);
        Vec2::new(width, height)
    }
}
