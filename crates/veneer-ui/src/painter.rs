use veneer_engine::coords::{CornerRadii, Rect, Vec2};
use veneer_engine::paint::{Color, Paint};
use veneer_engine::scene::{Border, DrawList, TextCmd, ZIndex};
use veneer_engine::text::FontId;

/// Drawing surface passed to [`Styled::paint`](crate::style::Styled::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices so that
/// everything recorded later lands on top.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Starts numbering at `z` instead of zero, for hosts that interleave
    /// styled views with their own content.
    pub fn with_base_z(draw_list: &'a mut DrawList, z: i32) -> Self {
        Self { draw_list, z }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Sharp-cornered fill.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Uniformly rounded fill with an optional border. `radius = 0.0` gives sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.fill_rounded_rect_corners(rect, CornerRadii::all(radius), paint, border);
    }

    /// Rounded fill with per-corner radii and an optional border.
    pub fn fill_rounded_rect_corners(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radii, paint.into(), border);
    }

    /// Text at `origin` (top-left of the first line).
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(
            z,
            TextCmd { text: text.into(), font, size, color, origin, max_width },
        );
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a rounded clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect, radii: CornerRadii) {
        self.draw_list.push_clip(rect, radii);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
