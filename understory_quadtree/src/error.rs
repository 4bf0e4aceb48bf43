// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by checked insertion.

use kurbo::Point;

use crate::types::BoundingBox;

/// Reasons [`QuadTree::try_insert`](crate::QuadTree::try_insert) refuses a point.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum InsertError {
    /// A coordinate is NaN or infinite.
    #[error("point {0:?} has a non-finite coordinate")]
    NonFinite(Point),
    /// The point lies outside the root box, so no quadrant is guaranteed to contain it.
    #[error("point {point:?} lies outside the tree bounds {bounds:?}")]
    OutOfBounds {
        /// The rejected point.
        point: Point,
        /// Bounds of the tree root.
        bounds: BoundingBox,
    },
}
