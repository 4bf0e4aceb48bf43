// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan nearest neighbor over a plain slice. Small and simple; the reference the tree
//! is checked and benchmarked against.

use kurbo::Point;

use crate::metric::Metric;
use crate::types::Neighbor;

/// Closest point in `points` to `query` with distance strictly below `radius`.
///
/// Uses the same acceptance rule as [`QuadTree::nearest`](crate::QuadTree::nearest); among
/// equidistant points the earliest in the slice wins.
pub fn nearest_linear<M: Metric + ?Sized>(
    points: &[Point],
    metric: &M,
    radius: f64,
    query: Point,
) -> Option<Neighbor> {
    let mut best = None;
    let mut r = radius;
    for &point in points {
        let distance = metric.distance(point, query);
        if distance < r {
            r = distance;
            best = Some(Neighbor { point, distance });
        }
    }
    best
}
