//! Veneer UI: layer-backed view styling on top of `veneer-engine`.
//!
//! # Quick start
//!
//! ```
//! use veneer_engine::coords::Rect;
//! use veneer_engine::paint::Color;
//! use veneer_engine::scene::DrawList;
//! use veneer_ui::prelude::*;
//!
//! let mut card = GradientView::new(Rect::new(0.0, 0.0, 240.0, 120.0));
//! card.set_hex_colors("#1E3C72, #2A5298");
//! card.set_corner_radius(12.0);
//! card.set_border_width(1.0);
//! card.set_border_color(Color::white().with_alpha(0.3));
//!
//! // Each frame:
//! let mut draw_list = DrawList::new();
//! card.paint(&mut Painter::new(&mut draw_list), 0.0);
//! // Hand `draw_list` to the host renderer.
//! assert_eq!(draw_list.len(), 2);
//! ```
//!
//! # Styling custom views
//!
//! Own a [`View`](view::View) and implement [`Styled`](style::Styled); every
//! styling property then works on the new type:
//!
//! ```
//! use veneer_engine::coords::Rect;
//! use veneer_ui::prelude::*;
//!
//! struct Avatar { view: View }
//!
//! impl Styled for Avatar {
//!     fn view(&self) -> &View { &self.view }
//!     fn view_mut(&mut self) -> &mut View { &mut self.view }
//!     fn paint(&self, painter: &mut Painter, elapsed: f32) {
//!         self.view.paint(painter, elapsed);
//!     }
//! }
//!
//! let mut avatar = Avatar { view: View::new(Rect::new(0.0, 0.0, 48.0, 48.0)) };
//! avatar.set_circle(true);
//! assert!(avatar.is_circle());
//! ```

pub mod animation;
pub mod gradient;
pub mod layer;
pub mod painter;
pub mod shimmer;
pub mod style;
pub mod view;
pub mod widgets;

/// Everything needed to build and style views.
pub mod prelude {
    pub use crate::animation::{BasicAnimation, KeyPath, Repeat};
    pub use crate::gradient::{configure, GradientConfig, GradientSpec};
    pub use crate::layer::{GradientLayer, Layer, SublayerId};
    pub use crate::painter::Painter;
    pub use crate::shimmer::{add_default_shimmer, add_shimmer, add_shimmer_at, ShimmerDriver};
    pub use crate::style::{Styled, ViewStyle};
    pub use crate::view::View;
    pub use crate::widgets::{
        button::Button,
        gradient::{GradientButton, GradientView},
        text_field::{Font, TextField},
    };
}
