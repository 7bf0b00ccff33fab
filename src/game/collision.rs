//! Rectangle overlap test.
//!
//! The only collision shape on the stage is an axis-aligned rectangle, and
//! the only resolution is removal, so the whole collision system is one
//! pure predicate. Edge contact is not overlap: every comparison is strict,
//! so two rectangles sharing a boundary line slide past each other.
//!
//! Self-collision is excluded upstream by comparing `Entity` ids, never
//! here; this function knows nothing about identity.

use super::components::Body;

/// True iff the two rectangles overlap with positive area.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.left() < b.right()
        && b.left() < a.right()
        && a.top() < b.bottom()
        && b.top() < a.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    fn body(x: f32, y: f32, w: f32, h: f32) -> Body {
        Body::new(vec2(x, y), vec2(w, h))
    }

    #[test]
    fn overlapping_rectangles_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(4.0, 4.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn containment_collides() {
        let outer = body(0.0, 0.0, 20.0, 20.0);
        let inner = body(1.0, -1.0, 2.0, 2.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn disjoint_on_either_axis_does_not_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        // Separated horizontally, overlapping vertically.
        assert!(!overlaps(&a, &body(20.0, 0.0, 10.0, 10.0)));
        // Separated vertically, overlapping horizontally.
        assert!(!overlaps(&a, &body(0.0, 20.0, 10.0, 10.0)));
        // Separated on both axes.
        assert!(!overlaps(&a, &body(20.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn edge_contact_does_not_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        // a.right() == b.left() == 5.0
        let b = body(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.right(), b.left());
        assert!(!overlaps(&a, &b));

        // Corner contact only.
        let c = body(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn symmetry() {
        let cases = [
            (body(0.0, 0.0, 10.0, 10.0), body(3.0, -2.0, 6.0, 6.0)),
            (body(0.0, 0.0, 10.0, 10.0), body(30.0, 0.0, 6.0, 6.0)),
            (body(5.0, 5.0, 2.0, 2.0), body(5.0, 5.0, 2.0, 2.0)),
        ];
        for (a, b) in &cases {
            assert_eq!(overlaps(a, b), overlaps(b, a));
        }
    }
}
