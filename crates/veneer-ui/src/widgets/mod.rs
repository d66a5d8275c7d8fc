//! Concrete view types.
//!
//! Every widget owns a [`View`](crate::view::View) and implements
//! [`Styled`](crate::style::Styled), so corner, border, background and circle
//! styling work the same on all of them.

pub mod button;
pub mod gradient;
pub mod text_field;

#[cfg(test)]
pub(crate) mod fixtures {
    use veneer_engine::text::FontBook;

    const SANS_MONO: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSansMono.ttf");

    /// A book with the fixture font registered under each of `names`.
    pub(crate) fn font_book(names: &[&str]) -> FontBook {
        let mut book = FontBook::new();
        for name in names {
            book.load_font(*name, SANS_MONO).unwrap();
        }
        book
    }
}
