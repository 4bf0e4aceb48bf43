// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree container: insertion, nearest-neighbor search, and traversal.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Point, Rect, Size};
use tracing::trace;

use crate::config::QuadTreeConfig;
use crate::error::InsertError;
use crate::metric::Metric;
use crate::node::{Node, NodeRef, Quad};
use crate::types::{BoundingBox, Neighbor, Quadrant};

/// A point-region quadtree over a fixed root box.
///
/// The root is always a [`Quad`]. Nodes only ever grow: an empty slot becomes a leaf, and a
/// leaf that must hold a second point becomes a quad holding both.
#[derive(Clone)]
pub struct QuadTree {
    root: Quad,
    config: QuadTreeConfig,
    len: usize,
}

impl QuadTree {
    /// Create an empty tree spanning `center ± dimension / 2`, with the default config.
    pub fn new(center: Point, dimension: Size) -> Self {
        Self::with_config(center, dimension, QuadTreeConfig::default())
    }

    /// Create an empty tree spanning `center ± dimension / 2`.
    pub fn with_config(center: Point, dimension: Size, config: QuadTreeConfig) -> Self {
        debug_assert!(
            center.is_finite() && dimension.is_finite(),
            "root bounds must be finite"
        );
        Self {
            root: Quad::new(BoundingBox::new(center, dimension)),
            config,
            len: 0,
        }
    }

    /// Create an empty tree covering `rect`, with the default config.
    pub fn from_rect(rect: Rect) -> Self {
        let bounds = BoundingBox::from_rect(rect);
        Self::new(bounds.center, bounds.dimension)
    }

    /// The root quad.
    pub fn root(&self) -> &Quad {
        &self.root
    }

    /// Bounds of the root quad.
    pub fn bounds(&self) -> BoundingBox {
        self.root.bounds()
    }

    /// The config this tree was built with.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Number of stored points, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every point, keeping the root bounds and config.
    pub fn clear(&mut self) {
        self.root = Quad::new(self.root.bounds());
        self.len = 0;
    }

    /// Insert a point.
    ///
    /// The point is expected to lie inside [`bounds`](Self::bounds). A point outside is still
    /// filed into whichever quadrant its coordinates select, which can place it outside the
    /// sub-box it is stored under and make later searches miss it. Use
    /// [`try_insert`](Self::try_insert) to reject such points instead.
    pub fn insert(&mut self, point: Point) {
        self.root.insert(point, 0, self.config.max_depth);
        self.len += 1;
    }

    /// Insert a point after checking it is finite and inside the root bounds.
    ///
    /// # Errors
    ///
    /// [`InsertError::NonFinite`] for NaN or infinite coordinates, and
    /// [`InsertError::OutOfBounds`] for points outside [`bounds`](Self::bounds). The tree is
    /// unchanged on error.
    pub fn try_insert(&mut self, point: Point) -> Result<(), InsertError> {
        if !point.is_finite() {
            return Err(InsertError::NonFinite(point));
        }
        let bounds = self.bounds();
        if !bounds.contains(point) {
            return Err(InsertError::OutOfBounds { point, bounds });
        }
        self.insert(point);
        Ok(())
    }

    /// The stored point closest to `query` under `metric`, considering only points at a
    /// distance strictly below `radius`.
    ///
    /// Pass `f64::INFINITY` for an unbounded search. Returns `None` when the tree is empty or
    /// nothing lies within `radius`. With `radius == 0.0` nothing is ever found, not even a
    /// point equal to `query`.
    pub fn nearest<M: Metric + ?Sized>(
        &self,
        metric: &M,
        radius: f64,
        query: Point,
    ) -> Option<Point> {
        self.nearest_with_distance(metric, radius, query)
            .map(|found| found.point)
    }

    /// Like [`nearest`](Self::nearest), also reporting the distance.
    ///
    /// Branch and bound over an explicit work list. A quad is expanded only while its box
    /// bound does not exceed the best distance so far; its children are queued so the one
    /// with the smallest bound is visited next. Among equidistant points the first one visited
    /// wins, which is deterministic for a given tree and query.
    pub fn nearest_with_distance<M: Metric + ?Sized>(
        &self,
        metric: &M,
        radius: f64,
        query: Point,
    ) -> Option<Neighbor> {
        let mut best: Option<Neighbor> = None;
        let mut r = radius;
        let mut visited = 0_usize;
        let mut pruned = 0_usize;
        let mut stack: Vec<NodeRef<'_>> = vec![NodeRef::Quad(&self.root)];
        while let Some(node) = stack.pop() {
            visited += 1;
            match node {
                NodeRef::Empty => {}
                NodeRef::Leaf(point) => {
                    consider(metric, query, point, &mut r, &mut best);
                }
                NodeRef::Bucket(points) => {
                    for &point in points {
                        consider(metric, query, point, &mut r, &mut best);
                    }
                }
                NodeRef::Quad(quad) => {
                    let bounds = quad.bounds();
                    if metric.min_distance_to_box(&bounds, query) > r {
                        pruned += 1;
                        continue;
                    }
                    let mut order = Quadrant::ALL
                        .map(|q| (metric.min_distance_to_box(&bounds.child(q), query), q));
                    // Farthest first, so the closest child is popped next.
                    order.sort_unstable_by(|a, b| {
                        b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal)
                    });
                    for (bound, q) in order {
                        let child = quad.child(q);
                        if child.is_empty() {
                            continue;
                        }
                        if bound > r {
                            pruned += 1;
                            continue;
                        }
                        stack.push(child.into());
                    }
                }
            }
        }
        trace!(visited, pruned, found = best.is_some(), "nearest search finished");
        best
    }

    /// Call `visitor` on every node in pre-order: a node, then its four children in quadrant
    /// index order. The root quad is visited first.
    pub fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(NodeRef<'a>),
    {
        let mut stack: Vec<NodeRef<'a>> = vec![NodeRef::Quad(&self.root)];
        while let Some(node) = stack.pop() {
            visitor(node);
            if let NodeRef::Quad(quad) = node {
                stack.extend(quad.children().iter().rev().map(NodeRef::from));
            }
        }
    }

    /// All stored points, in traversal order.
    pub fn points(&self) -> Points<'_> {
        Points {
            stack: self.root.children().iter().rev().collect(),
            pending: Default::default(),
        }
    }

    /// Level of the deepest quad; 0 when the root has never split.
    pub fn depth(&self) -> u32 {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0_u32)];
        while let Some((quad, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in quad.children() {
                if let Some(sub) = child.as_quad() {
                    stack.push((sub, depth + 1));
                }
            }
        }
        deepest
    }
}

#[inline]
fn consider<M: Metric + ?Sized>(
    metric: &M,
    query: Point,
    point: Point,
    r: &mut f64,
    best: &mut Option<Neighbor>,
) {
    let distance = metric.distance(point, query);
    if distance < *r {
        *r = distance;
        *best = Some(Neighbor { point, distance });
    }
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds())
            .field("config", &self.config)
            .field("len", &self.len)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

/// Iterator over the points of a [`QuadTree`], returned by [`QuadTree::points`].
#[derive(Clone, Debug)]
pub struct Points<'a> {
    stack: Vec<&'a Node>,
    pending: core::slice::Iter<'a, Point>,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(p) = self.pending.next() {
                return Some(*p);
            }
            match self.stack.pop()? {
                Node::Empty => {}
                Node::Leaf(p) => return Some(*p),
                Node::Bucket(points) => self.pending = points.iter(),
                Node::Quad(quad) => self.stack.extend(quad.children().iter().rev()),
            }
        }
    }
}
