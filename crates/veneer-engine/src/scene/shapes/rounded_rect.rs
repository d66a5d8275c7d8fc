use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle fill with an optional inner border.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle. Radii are clamped to the rect before recording.
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        let radii = radii.clamped_to(rect);
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint, border }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn radii_are_clamped_on_record() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 30.0, 10.0);
        list.push_rounded_rect(ZIndex::new(0), rect, CornerRadii::all(99.0), Color::white().into(), None);
        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else {
            panic!("expected a rounded rect");
        };
        assert_eq!(cmd.radii, CornerRadii::all(5.0));
    }
}
