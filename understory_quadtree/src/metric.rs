// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance functions and their box lower bounds.
//!
//! A [`Metric`] pairs a point-to-point distance with a lower bound on the distance from a
//! point to anything inside a [`BoundingBox`]. Nearest-neighbor search prunes a subtree only
//! when that bound exceeds the best distance found so far, so the bound must never be larger
//! than the true minimum distance to the box. It may be smaller; that only costs pruning.
//!
//! The bound is metric specific. The Manhattan bound (sum of per-axis gaps) is larger than the
//! Euclidean distance to the box whenever both gaps are non-zero, so it cannot stand in for
//! the Euclidean bound. Each shipped metric therefore carries its own exact bound:
//!
//! | metric        | distance             | box bound                  |
//! |---------------|----------------------|----------------------------|
//! | [`Manhattan`] | `|dx| + |dy|`        | `gap.x + gap.y`            |
//! | [`Euclidean`] | `hypot(dx, dy)`      | `hypot(gap.x, gap.y)`      |
//! | [`Chebyshev`] | `max(|dx|, |dy|)`    | `max(gap.x, gap.y)`        |
//!
//! where `gap` is [`BoundingBox::gap`]. For any other distance function use [`Unbounded`],
//! which reports a bound of zero and so disables pruning.

use core::fmt::Debug;

use kurbo::Point;

use crate::types::BoundingBox;

/// A symmetric, non-negative distance over 2D points with a box lower bound.
///
/// Implementations must satisfy `distance(a, b) == distance(b, a)`, `distance(a, a) == 0`,
/// and `min_distance_to_box(b, p) <= distance(x, p)` for every `x` inside `b`.
pub trait Metric {
    /// Distance between two points.
    fn distance(&self, a: Point, b: Point) -> f64;

    /// Greatest lower bound on the distance from `point` to any point inside `bounds`.
    ///
    /// Zero when `point` is inside `bounds`.
    fn min_distance_to_box(&self, bounds: &BoundingBox, point: Point) -> f64;
}

impl<M: Metric + ?Sized> Metric for &M {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        (**self).distance(a, b)
    }

    #[inline]
    fn min_distance_to_box(&self, bounds: &BoundingBox, point: Point) -> f64 {
        (**self).min_distance_to_box(bounds, point)
    }
}

/// Taxicab distance, `|dx| + |dy|`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        let d = a - b;
        d.x.abs() + d.y.abs()
    }

    #[inline]
    fn min_distance_to_box(&self, bounds: &BoundingBox, point: Point) -> f64 {
        let gap = bounds.gap(point);
        gap.x + gap.y
    }
}

/// Straight-line distance, `sqrt(dx² + dy²)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        a.distance(b)
    }

    #[inline]
    fn min_distance_to_box(&self, bounds: &BoundingBox, point: Point) -> f64 {
        bounds.gap(point).hypot()
    }
}

/// Chessboard distance, `max(|dx|, |dy|)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chebyshev;

impl Metric for Chebyshev {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        let d = a - b;
        d.x.abs().max(d.y.abs())
    }

    #[inline]
    fn min_distance_to_box(&self, bounds: &BoundingBox, point: Point) -> f64 {
        let gap = bounds.gap(point);
        gap.x.max(gap.y)
    }
}

/// A caller-supplied distance function with no known box bound.
///
/// The bound is always zero, so searches never prune and stay exact for any symmetric,
/// non-negative function at the cost of visiting every stored point.
///
/// ```
/// use understory_quadtree::{Point, QuadTree, Size, Unbounded};
///
/// let mut tree = QuadTree::new(Point::ZERO, Size::new(2.0, 2.0));
/// tree.insert(Point::new(0.5, 0.0));
/// tree.insert(Point::new(0.0, 0.6));
///
/// // Horizontal steps cost three times as much as vertical ones.
/// let skewed = Unbounded(|a: Point, b: Point| {
///     let d = a - b;
///     3.0 * d.x.abs() + d.y.abs()
/// });
/// assert_eq!(tree.nearest(&skewed, f64::INFINITY, Point::ZERO), Some(Point::new(0.0, 0.6)));
/// ```
#[derive(Copy, Clone)]
pub struct Unbounded<F>(pub F);

impl<F: Fn(Point, Point) -> f64> Metric for Unbounded<F> {
    #[inline]
    fn distance(&self, a: Point, b: Point) -> f64 {
        (self.0)(a, b)
    }

    #[inline]
    fn min_distance_to_box(&self, _bounds: &BoundingBox, _point: Point) -> f64 {
        0.0
    }
}

impl<F> Debug for Unbounded<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Unbounded").finish_non_exhaustive()
    }
}
