/// Z-ordering key for draw items. Higher values appear on top.
///
/// A layer's own fill uses its base z; sublayers stack above it in
/// insertion order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
