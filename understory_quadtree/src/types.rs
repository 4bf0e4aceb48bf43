// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: bounding boxes, quadrant numbering, and query results.

use kurbo::{Point, Rect, Size, Vec2};

use crate::metric::Metric;

/// One of the four equal regions a [`BoundingBox`] is divided into about its center.
///
/// The numbering is fixed and shared by insertion and search.
/// The y axis points up, so the "upper" quadrants hold the larger y values.
///
/// A point is on the left iff `x < center.x` and below iff `y < center.y`.
/// Points lying exactly on a center line therefore belong to the right or upper side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// Index 0: `x < center.x`, `y >= center.y`.
    UpperLeft = 0,
    /// Index 1: `x >= center.x`, `y >= center.y`.
    UpperRight = 1,
    /// Index 2: `x < center.x`, `y < center.y`.
    LowerLeft = 2,
    /// Index 3: `x >= center.x`, `y < center.y`.
    LowerRight = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// Child slot index of this quadrant, in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The quadrant with the given child slot index, if it is in `0..4`.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::UpperLeft),
            1 => Some(Self::UpperRight),
            2 => Some(Self::LowerLeft),
            3 => Some(Self::LowerRight),
            _ => None,
        }
    }

    /// Direction of the sub-box center from the parent center, per axis.
    #[inline]
    pub const fn signs(self) -> (f64, f64) {
        match self {
            Self::UpperLeft => (-1.0, 1.0),
            Self::UpperRight => (1.0, 1.0),
            Self::LowerLeft => (-1.0, -1.0),
            Self::LowerRight => (1.0, -1.0),
        }
    }
}

/// Axis-aligned box described by its center and full size.
///
/// The box spans `center ± dimension / 2` on each axis and is closed on all sides.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Center of the box.
    pub center: Point,
    /// Full width and height of the box.
    pub dimension: Size,
}

impl BoundingBox {
    /// Create a box from its center and full size.
    pub const fn new(center: Point, dimension: Size) -> Self {
        Self { center, dimension }
    }

    /// Create a box covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.center(), rect.size())
    }

    /// This box as a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.dimension)
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.center.x - self.dimension.width * 0.5
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.center.x + self.dimension.width * 0.5
    }

    /// Bottom edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.center.y - self.dimension.height * 0.5
    }

    /// Top edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.center.y + self.dimension.height * 0.5
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, point: Point) -> bool {
        self.min_x() <= point.x
            && point.x <= self.max_x()
            && self.min_y() <= point.y
            && point.y <= self.max_y()
    }

    /// The quadrant of this box that `point` belongs to.
    ///
    /// Depends only on the box center, so points outside the box still map somewhere.
    #[inline]
    pub fn quadrant(&self, point: Point) -> Quadrant {
        let left = point.x < self.center.x;
        let lower = point.y < self.center.y;
        match (left, lower) {
            (true, false) => Quadrant::UpperLeft,
            (false, false) => Quadrant::UpperRight,
            (true, true) => Quadrant::LowerLeft,
            (false, true) => Quadrant::LowerRight,
        }
    }

    /// The sub-box covering `quadrant`: half the size, center moved a quarter of the size
    /// toward that quadrant.
    ///
    /// Every point inside `self` for which [`quadrant`](Self::quadrant) returns `q` lies
    /// inside `self.child(q)`.
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let (sx, sy) = quadrant.signs();
        let Size { width, height } = self.dimension;
        Self {
            center: Point::new(
                self.center.x + sx * width * 0.25,
                self.center.y + sy * height * 0.25,
            ),
            dimension: Size::new(width * 0.5, height * 0.5),
        }
    }

    /// Per-axis distance from `point` to the box, zero on an axis where the point is within
    /// the box extent.
    ///
    /// This is `point` minus `point` clamped to the box, with signs dropped.
    pub fn gap(&self, point: Point) -> Vec2 {
        let dx = (self.min_x() - point.x).max(point.x - self.max_x()).max(0.0);
        let dy = (self.min_y() - point.y).max(point.y - self.max_y()).max(0.0);
        Vec2::new(dx, dy)
    }

    /// Lower bound on `metric` distance from `point` to anything stored in this box.
    #[inline]
    pub fn min_distance<M: Metric + ?Sized>(&self, point: Point, metric: &M) -> f64 {
        metric.min_distance_to_box(self, point)
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// A point found by a nearest-neighbor query, with its distance to the query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// The stored point.
    pub point: Point,
    /// Distance from the query point under the metric used for the search.
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_root() -> BoundingBox {
        BoundingBox::new(Point::ZERO, Size::new(2.0, 2.0))
    }

    /// Boxes whose coordinates are small dyadic rationals, so subdivision is exact.
    fn dyadic_box(rng: &mut StdRng) -> BoundingBox {
        let cx = f64::from(rng.random_range(-64_i32..64)) / 8.0;
        let cy = f64::from(rng.random_range(-64_i32..64)) / 8.0;
        let w = f64::from(1_u32 << rng.random_range(0_u32..6)) / 4.0;
        let h = f64::from(1_u32 << rng.random_range(0_u32..6)) / 4.0;
        BoundingBox::new(Point::new(cx, cy), Size::new(w, h))
    }

    fn point_in(rng: &mut StdRng, b: &BoundingBox) -> Point {
        Point::new(
            rng.random_range(b.min_x()..=b.max_x()),
            rng.random_range(b.min_y()..=b.max_y()),
        )
    }

    #[test]
    fn quadrant_numbering() {
        let b = unit_root();
        assert_eq!(b.quadrant(Point::new(-0.5, 0.5)), Quadrant::UpperLeft);
        assert_eq!(b.quadrant(Point::new(0.5, 0.5)), Quadrant::UpperRight);
        assert_eq!(b.quadrant(Point::new(-0.5, -0.5)), Quadrant::LowerLeft);
        assert_eq!(b.quadrant(Point::new(0.5, -0.5)), Quadrant::LowerRight);
        for (i, q) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i, "ALL is in index order");
            assert_eq!(Quadrant::from_index(i), Some(q), "index round trip");
        }
        assert_eq!(Quadrant::from_index(4), None);
    }

    #[test]
    fn center_line_ties_go_right_and_up() {
        let b = unit_root();
        assert_eq!(b.quadrant(Point::ZERO), Quadrant::UpperRight);
        assert_eq!(b.quadrant(Point::new(-0.5, 0.0)), Quadrant::UpperLeft);
        assert_eq!(b.quadrant(Point::new(0.0, -0.5)), Quadrant::LowerRight);
        for p in [Point::ZERO, Point::new(-0.5, 0.0), Point::new(0.0, -0.5)] {
            assert!(b.child(b.quadrant(p)).contains(p), "tie point {p:?}");
        }
    }

    #[test]
    fn child_geometry() {
        let b = BoundingBox::new(Point::new(1.0, -2.0), Size::new(4.0, 8.0));
        let mut centers = alloc::vec::Vec::new();
        for q in Quadrant::ALL {
            let c = b.child(q);
            assert_eq!(c.dimension, Size::new(2.0, 4.0), "half size for {q:?}");
            let (sx, sy) = q.signs();
            assert_eq!(c.center, Point::new(1.0 + sx, -2.0 + sy * 2.0), "offset for {q:?}");
            assert!(!centers.contains(&c.center), "distinct centers");
            centers.push(c.center);
        }
        // The upper-left child shares the parent's top-left corner.
        let ul = b.child(Quadrant::UpperLeft);
        assert_eq!(ul.min_x(), b.min_x());
        assert_eq!(ul.max_y(), b.max_y());
        assert_eq!(ul.max_x(), b.center.x);
        assert_eq!(ul.min_y(), b.center.y);
    }

    #[test]
    fn quadrant_and_child_agree_on_random_boxes() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0001);
        for _ in 0..500 {
            let b = dyadic_box(&mut rng);
            for _ in 0..64 {
                let p = point_in(&mut rng, &b);
                let q = b.quadrant(p);
                assert!(b.child(q).contains(p), "{p:?} not inside child {q:?} of {b:?}");
            }
            // Corners and center lines as well.
            for p in [
                b.center,
                Point::new(b.min_x(), b.min_y()),
                Point::new(b.max_x(), b.max_y()),
                Point::new(b.min_x(), b.center.y),
                Point::new(b.center.x, b.max_y()),
            ] {
                let q = b.quadrant(p);
                assert!(b.child(q).contains(p), "{p:?} not inside child {q:?} of {b:?}");
            }
        }
    }

    #[test]
    fn gap_is_zero_inside_and_clamped_outside() {
        let inner = BoundingBox::new(Point::new(-0.5, -0.5), Size::new(1.0, 1.0));
        assert_eq!(inner.gap(Point::new(-0.2, -0.2)), Vec2::ZERO);
        assert_eq!(inner.gap(Point::new(0.5, -0.5)), Vec2::new(0.5, 0.0));
        assert_eq!(inner.gap(Point::new(-0.3, 0.3)), Vec2::new(0.0, 0.3));
        assert_eq!(inner.gap(Point::new(-3.0, -2.0)), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn rect_conversions() {
        let b = BoundingBox::from_rect(Rect::new(2.0, 3.0, -2.0, -1.0));
        assert_eq!(b.center, Point::new(0.0, 1.0));
        assert_eq!(b.dimension, Size::new(4.0, 4.0));
        assert_eq!(b.rect(), Rect::new(-2.0, -1.0, 2.0, 3.0));
        assert_eq!(BoundingBox::from(b.rect()), b);
    }
}
