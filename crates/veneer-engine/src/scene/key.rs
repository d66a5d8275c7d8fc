use super::ZIndex;

/// Stable sort key for draw items.
///
/// Field order is the comparison order: `z` ascending (back-to-front), then
/// `order` ascending so equal-z items keep insertion order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
