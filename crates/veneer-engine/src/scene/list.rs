use crate::coords::{CornerRadii, Rect};

use super::{DrawCmd, SortKey, ZIndex};

/// Clip region applied to a draw item.
///
/// `radii` rounds the clip the same way a layer with `masks_to_bounds` rounds
/// its content. Nested clips intersect their rects and keep the innermost radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Clip {
    pub rect: Rect,
    pub radii: CornerRadii,
}

/// A single draw item: sort key + command + clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// `None` = no clipping (draw everywhere).
    pub clip: Option<Clip>,
}

/// Recorded draw stream for one paint pass.
///
/// Items are handed to the host renderer in paint order (z ascending, then
/// insertion order). The paint-order index buffer is reused across passes.
///
/// ```
/// use veneer_engine::coords::{CornerRadii, Rect};
/// use veneer_engine::paint::Color;
/// use veneer_engine::scene::{DrawList, ZIndex};
///
/// let mut list = DrawList::new();
/// list.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0), CornerRadii::all(25.0));
/// list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 50.0, 50.0), Color::white());
/// list.pop_clip();
/// assert!(list.items()[0].clip.is_some());
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with every parent.
    clip_stack: Vec<Clip>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current clip nesting depth.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Pushes a draw command with the given z-index under the current clip.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a clip region. Must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect, radii: CornerRadii) {
        let rect = match self.clip_stack.last() {
            None => rect,
            // No overlap: a zero-area clip makes renderers skip the items.
            Some(parent) => parent.rect.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(Clip { rect, radii: radii.clamped_to(rect) });
    }

    /// Ends the most recent clip region.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::warn!("DrawList::pop_clip called without a matching push_clip");
        }
    }

    /// Returns indices into `items` in paint order (back-to-front).
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(2), rect(0.0, 0.0, 1.0, 1.0), Color::white());
        list.push_solid_rect(ZIndex::new(0), rect(0.0, 0.0, 2.0, 2.0), Color::white());
        list.push_solid_rect(ZIndex::new(2), rect(0.0, 0.0, 3.0, 3.0), Color::white());
        assert_eq!(list.indices_in_paint_order(), &[1, 0, 2]);
    }

    #[test]
    fn nested_clips_intersect_and_clamp_radii() {
        let mut list = DrawList::new();
        list.push_clip(rect(0.0, 0.0, 100.0, 100.0), CornerRadii::zero());
        list.push_clip(rect(50.0, 50.0, 100.0, 20.0), CornerRadii::all(40.0));
        list.push_solid_rect(ZIndex::new(0), rect(0.0, 0.0, 10.0, 10.0), Color::white());
        list.pop_clip();
        list.pop_clip();

        let clip = list.items()[0].clip.unwrap();
        assert_eq!(clip.rect, rect(50.0, 50.0, 50.0, 20.0));
        assert_eq!(clip.radii, CornerRadii::all(10.0));
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn disjoint_clip_collapses_to_empty() {
        let mut list = DrawList::new();
        list.push_clip(rect(0.0, 0.0, 10.0, 10.0), CornerRadii::zero());
        list.push_clip(rect(20.0, 20.0, 10.0, 10.0), CornerRadii::zero());
        list.push_solid_rect(ZIndex::new(0), rect(0.0, 0.0, 10.0, 10.0), Color::white());
        assert!(list.items()[0].clip.unwrap().rect.is_empty());
    }

    #[test]
    fn unbalanced_pop_is_harmless() {
        let mut list = DrawList::new();
        list.pop_clip();
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(rect(0.0, 0.0, 10.0, 10.0), CornerRadii::zero());
        list.push_solid_rect(ZIndex::new(0), rect(0.0, 0.0, 1.0, 1.0), Color::white());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clip_depth(), 0);
    }
}
