//! Axis-aligned collision geometry
//!
//! Every entity-pair interaction in the game reduces to one rectangle
//! overlap test, so this is the whole collision system.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap: shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Strict AABB overlap test. Symmetric, no side effects, O(1).
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_rects() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &rect(20.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &rect(0.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let r = rect(x, y, w, h);
            prop_assert!(overlaps(&r, &r));
        }

        #[test]
        fn separated_rects_never_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
            gap in 0.1f32..50.0,
        ) {
            let a = rect(x, y, w, h);
            prop_assert!(!overlaps(&a, &rect(x + w + gap, y, w, h)));
            prop_assert!(!overlaps(&a, &rect(x, y + h + gap, w, h)));
        }
    }
}
