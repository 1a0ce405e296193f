//! Overlay placement per direction

use crate::geometry::{Direction, NodeSize, Offset, Placement, Scroll};
use crate::layout::ScreenBBox;

/// Compute the overlay's absolute position
///
/// The anchor for `direction` is picked from `anchors`, then the overlay is
/// aligned against it (centered on n/s/e/w, flush on the corners) using its
/// rendered `node` size. `offset` and the page `scroll` are added last.
pub fn compute_placement(
    direction: Direction,
    anchors: &ScreenBBox,
    node: NodeSize,
    offset: Offset,
    scroll: Scroll,
) -> Placement {
    let anchor = anchors.anchor(direction);
    let (w, h) = (node.width, node.height);

    let (top, left) = match direction {
        Direction::N => (anchor.y - h, anchor.x - w / 2.0),
        Direction::S => (anchor.y, anchor.x - w / 2.0),
        Direction::E => (anchor.y - h / 2.0, anchor.x),
        Direction::W => (anchor.y - h / 2.0, anchor.x - w),
        Direction::Ne => (anchor.y - h, anchor.x),
        Direction::Nw => (anchor.y - h, anchor.x - w),
        Direction::Se => (anchor.y, anchor.x),
        Direction::Sw => (anchor.y, anchor.x - w),
    };

    Placement {
        top: top + offset.dy + scroll.top,
        left: left + offset.dx + scroll.left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LocalBox, Matrix};

    fn point_target() -> ScreenBBox {
        ScreenBBox::from_local(&LocalBox::default(), &Matrix::IDENTITY)
    }

    fn place(direction: Direction) -> Placement {
        compute_placement(
            direction,
            &point_target(),
            NodeSize::new(40.0, 20.0),
            Offset::default(),
            Scroll::default(),
        )
    }

    #[test]
    fn test_each_direction_on_point_target() {
        let expected = [
            (Direction::N, -20.0, -20.0),
            (Direction::S, 0.0, -20.0),
            (Direction::E, -10.0, 0.0),
            (Direction::W, -10.0, -40.0),
            (Direction::Ne, -20.0, 0.0),
            (Direction::Nw, -20.0, -40.0),
            (Direction::Se, 0.0, 0.0),
            (Direction::Sw, 0.0, -40.0),
        ];
        for (dir, top, left) in expected {
            assert_eq!(place(dir), Placement { top, left }, "direction {}", dir);
        }
    }

    #[test]
    fn test_uses_the_matching_anchor() {
        let anchors = ScreenBBox::from_local(&LocalBox::new(100.0, 50.0, 60.0, 30.0), &Matrix::IDENTITY);
        let node = NodeSize::new(20.0, 10.0);

        let s = compute_placement(Direction::S, &anchors, node, Offset::default(), Scroll::default());
        assert_eq!(s, Placement { top: 80.0, left: 120.0 });

        let w = compute_placement(Direction::W, &anchors, node, Offset::default(), Scroll::default());
        assert_eq!(w, Placement { top: 60.0, left: 80.0 });
    }

    #[test]
    fn test_offset_and_scroll_are_additive() {
        let anchors = point_target();
        let node = NodeSize::new(40.0, 20.0);
        let offset = Offset::new(10.0, 5.0);

        let base = compute_placement(Direction::Ne, &anchors, node, offset, Scroll::default());
        let scrolled = compute_placement(Direction::Ne, &anchors, node, offset, Scroll::new(100.0, 50.0));

        assert_eq!(base, Placement { top: -10.0, left: 5.0 });
        assert_eq!(scrolled.top - base.top, 100.0);
        assert_eq!(scrolled.left - base.left, 50.0);
    }
}
