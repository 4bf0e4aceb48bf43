// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and the subdivision-on-insert step.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace};

use crate::types::{BoundingBox, Quadrant};

/// A child slot of a [`Quad`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    /// No data.
    #[default]
    Empty,
    /// Exactly one stored point.
    Leaf(Point),
    /// Two or more points that could not be separated by subdividing.
    ///
    /// Either every point is equal, or the slot sits where no further split is allowed: at
    /// [`QuadTreeConfig::max_depth`](crate::QuadTreeConfig::max_depth), or where the box is
    /// too small to subdivide in floating point.
    Bucket(Vec<Point>),
    /// An internal node covering one quadrant of its parent.
    Quad(Box<Quad>),
}

impl Node {
    /// Whether this slot holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The quad in this slot, if any.
    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Self::Quad(quad) => Some(quad),
            _ => None,
        }
    }
}

/// Borrowed view of any node in a tree, including the root quad.
///
/// Passed to the visitor of [`QuadTree::traverse`](crate::QuadTree::traverse).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeRef<'a> {
    /// An empty slot.
    Empty,
    /// A single stored point.
    Leaf(Point),
    /// Points sharing a terminal slot.
    Bucket(&'a [Point]),
    /// An internal node.
    Quad(&'a Quad),
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Empty => Self::Empty,
            Node::Leaf(p) => Self::Leaf(*p),
            Node::Bucket(points) => Self::Bucket(points),
            Node::Quad(quad) => Self::Quad(quad),
        }
    }
}

/// An internal node: a bounding box and exactly four child slots, one per [`Quadrant`].
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    bounds: BoundingBox,
    children: [Node; 4],
}

impl Quad {
    /// A quad with the given bounds and four empty children.
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            children: Default::default(),
        }
    }

    /// Area covered by this quad.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Child slots in quadrant index order.
    pub fn children(&self) -> &[Node; 4] {
        &self.children
    }

    /// The child slot for `quadrant`.
    pub fn child(&self, quadrant: Quadrant) -> &Node {
        &self.children[quadrant.index()]
    }

    /// File `point` under this quad, which sits at `depth` (the root is 0).
    ///
    /// An empty slot takes the point directly. An occupied leaf is replaced by a new quad
    /// over the slot's sub-box and both points are filed into it. Equal points share a
    /// bucket. A bucket of duplicates that receives a different point splits the same way,
    /// so the duplicates end up in a deeper bucket of their own.
    ///
    /// Splitting stops when the new quad would be deeper than `max_depth`, or when the
    /// sub-box is too small for its center to move away from this one in floating point.
    /// The colliding points then share a bucket.
    pub(crate) fn insert(&mut self, point: Point, depth: u32, max_depth: u32) {
        let quadrant = self.bounds.quadrant(point);
        let sub_bounds = self.bounds.child(quadrant);
        let can_split = depth < max_depth && sub_bounds.center != self.bounds.center;
        let slot = &mut self.children[quadrant.index()];
        match slot {
            Node::Empty => *slot = Node::Leaf(point),
            Node::Quad(quad) => quad.insert(point, depth + 1, max_depth),
            Node::Leaf(existing) => {
                let existing = *existing;
                if existing == point {
                    debug!(?point, depth, "duplicate point, storing in bucket");
                    *slot = Node::Bucket(vec![existing, point]);
                } else if can_split {
                    trace!(?quadrant, depth = depth + 1, "splitting leaf");
                    let mut quad = Self::new(sub_bounds);
                    quad.insert(existing, depth + 1, max_depth);
                    quad.insert(point, depth + 1, max_depth);
                    *slot = Node::Quad(Box::new(quad));
                } else {
                    debug!(?existing, ?point, depth, "cannot split further, storing in bucket");
                    *slot = Node::Bucket(vec![existing, point]);
                }
            }
            Node::Bucket(points) => {
                // Only a bucket of duplicates can be split; a capped bucket stays capped.
                if !can_split || points.iter().all(|&p| p == point) {
                    points.push(point);
                } else {
                    trace!(?quadrant, depth = depth + 1, len = points.len(), "splitting bucket");
                    let mut quad = Self::new(sub_bounds);
                    for &p in points.iter() {
                        quad.insert(p, depth + 1, max_depth);
                    }
                    quad.insert(point, depth + 1, max_depth);
                    *slot = Node::Quad(Box::new(quad));
                }
            }
        }
    }
}
