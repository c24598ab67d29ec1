//! Property-based invariant tests for `Rect` and cursor/view geometry.
//!
//! 1. Intersection is commutative.
//! 2. Intersection fits within both inputs.
//! 3. `inner` never grows the rectangle and stays inside it.
//! 4. View rows are the signed distance to the top line.

use proptest::prelude::*;
use tipbox_core::cursor::{Cursor, ViewPort};
use tipbox_core::geometry::Rect;

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_commutative(a in small_rect_strategy(), b in small_rect_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_within_both(a in small_rect_strategy(), b in small_rect_strategy()) {
        let i = a.intersection(&b);
        if !i.is_empty() {
            prop_assert!(i.x >= a.x && i.x >= b.x);
            prop_assert!(i.y >= a.y && i.y >= b.y);
            prop_assert!(i.right() <= a.right() && i.right() <= b.right());
            prop_assert!(i.bottom() <= a.bottom() && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn inner_shrinks(r in small_rect_strategy()) {
        let inner = r.inner();
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
        if !inner.is_empty() {
            prop_assert!(r.contains(inner.x, inner.y));
            prop_assert!(inner.right() < r.right());
            prop_assert!(inner.bottom() < r.bottom());
        }
    }

    #[test]
    fn view_row_is_signed_distance(line in 0usize..100_000, top in 0usize..100_000) {
        let row = Cursor::at(line, 0).view_row(&ViewPort::new(top));
        prop_assert_eq!(row + top as i64, line as i64);
    }
}
