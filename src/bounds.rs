//! Axis-aligned bounding boxes in the world plane.
//!
//! Boxes are stored as center plus half-extents, the same shape the framing
//! math works in. The depth axis is never part of a box.

use glam::Vec2;

/// Axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub center: Vec2,
    /// Half-size on each axis, never negative
    pub extents: Vec2,
}

impl Aabb {
    /// Create a box from a center and half-extents.
    /// Negative extents from a misbehaving provider are folded to their magnitude.
    pub fn new(center: Vec2, extents: Vec2) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    /// Create a box spanning two corners (in any order).
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.extents
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Grow this box in place so it also covers `other`.
    pub fn encapsulate(&mut self, other: &Aabb) {
        *self = self.union(other);
    }

    /// Union of every box yielded, or `None` for an empty iterator.
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a Aabb>) -> Option<Aabb> {
        boxes.into_iter().fold(None, |acc: Option<Aabb>, b| match acc {
            Some(acc) => Some(acc.union(b)),
            None => Some(*b),
        })
    }

    /// Check if a point lies inside the box (edges included).
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Closest point of the box to `point`, clamped per axis.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    }

    /// Box with `margin` added to every side. Shrinking never goes below a point.
    pub fn grown(&self, margin: f32) -> Aabb {
        Aabb {
            center: self.center,
            extents: (self.extents + Vec2::splat(margin)).max(Vec2::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_union_of_disjoint_boxes() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(4.0, 0.0), Vec2::new(1.0, 1.0));
        let u = a.union(&b);
        assert_eq!(u.center, Vec2::new(2.0, 0.0));
        assert_eq!(u.extents, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_union_with_contained_box_is_unchanged() {
        let outer = Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0));
        let inner = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(0.5, 0.5));
        assert_eq!(outer.union(&inner), outer);
    }

    #[test]
    fn test_negative_extents_are_normalized() {
        let b = Aabb::new(Vec2::new(3.0, -2.0), Vec2::new(-1.5, -0.5));
        assert_eq!(b.extents, Vec2::new(1.5, 0.5));
        assert!(b.contains(Vec2::new(4.5, -1.5)));
    }

    #[test]
    fn test_point_box_unions_like_any_other() {
        let p = Aabb::new(Vec2::new(-2.0, 3.0), Vec2::ZERO);
        let b = Aabb::new(Vec2::ZERO, Vec2::ONE);
        let u = p.union(&b);
        assert_relative_eq!(u.min().x, -2.0);
        assert_relative_eq!(u.max().y, 3.0);
        assert_relative_eq!(u.max().x, 1.0);
        assert_relative_eq!(u.min().y, -1.0);
    }

    #[test]
    fn test_union_all_empty_is_none() {
        let none: [Aabb; 0] = [];
        assert!(Aabb::union_all(&none).is_none());
    }

    #[test]
    fn test_closest_point_clamps_each_axis() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 1.0));
        assert_eq!(b.closest_point(Vec2::new(5.0, 0.5)), Vec2::new(2.0, 0.5));
        assert_eq!(b.closest_point(Vec2::new(-5.0, -5.0)), Vec2::new(-2.0, -1.0));
        assert_eq!(b.closest_point(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_grown_never_inverts() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 3.0));
        assert_eq!(b.grown(2.0).extents, Vec2::new(3.0, 5.0));
        assert_eq!(b.grown(-2.0).extents, Vec2::new(0.0, 1.0));
    }
}
