// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a Kurbo-native point-region quadtree.
//!
//! Understory Quadtree indexes a growing set of 2D points for exact nearest-neighbor lookups.
//!
//! - Insert points one at a time; the tree subdivides only where two points collide.
//! - Query the nearest stored point under a pluggable [`Metric`], optionally within a radius.
//! - Walk every node with [`QuadTree::traverse`], for rendering or structural checks.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Manhattan, Point, QuadTree, Size};
//!
//! // A root box centered on the origin, 2 units wide and tall.
//! let mut tree = QuadTree::new(Point::ZERO, Size::new(2.0, 2.0));
//! tree.insert(Point::new(-1.0, 1.0));
//! tree.insert(Point::new(1.0, 1.0));
//! tree.insert(Point::new(1.0, -1.0));
//! tree.insert(Point::new(-1.0, -1.0));
//! assert_eq!(tree.len(), 4);
//!
//! let hit = tree.nearest(&Manhattan, f64::INFINITY, Point::new(0.8, -0.6));
//! assert_eq!(hit, Some(Point::new(1.0, -1.0)));
//!
//! // Nothing within a radius of 0.1.
//! assert_eq!(tree.nearest(&Manhattan, 0.1, Point::ZERO), None);
//! ```
//!
//! ## Structure
//!
//! The root is a [`Quad`]: a [`BoundingBox`] and four child [`Node`] slots, one per
//! [`Quadrant`] (upper-left, upper-right, lower-left, lower-right, y pointing up).
//! A slot is [`Node::Empty`], a [`Node::Leaf`] holding one point, or a nested [`Quad`] over
//! exactly that quadrant of its parent's box.
//! Inserting into an occupied leaf replaces it with a quad and files both points into it.
//!
//! Exact duplicates, and points that still collide at [`QuadTreeConfig::max_depth`], are kept
//! together in a [`Node::Bucket`], so insertion always terminates.
//!
//! ## Metrics
//!
//! Search is branch and bound: a subtree is skipped when a lower bound on the distance to its
//! box already exceeds the best distance found. The bound depends on the metric, so each
//! [`Metric`] supplies its own. [`Manhattan`], [`Euclidean`], and [`Chebyshev`] ship with exact
//! bounds; wrap any other distance function in [`Unbounded`] to search without pruning.
//! See the [`metric`] module for details.
//!
//! ## Preconditions
//!
//! Points are expected to be finite and inside the root box. [`QuadTree::insert`] does not check
//! either; a point outside the root is filed by coordinate comparison alone and searches may
//! miss it. [`QuadTree::try_insert`] checks both and returns an [`InsertError`] instead.
//!
//! Library code emits [`tracing`] events (splits, buckets, search counts) and never installs a
//! subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod linear;
pub mod metric;
pub mod node;
pub mod tree;
pub mod types;

pub use kurbo::{Point, Rect, Size};

pub use config::{DEFAULT_MAX_DEPTH, QuadTreeConfig};
pub use error::InsertError;
pub use linear::nearest_linear;
pub use metric::{Chebyshev, Euclidean, Manhattan, Metric, Unbounded};
pub use node::{Node, NodeRef, Quad};
pub use tree::{Points, QuadTree};
pub use types::{BoundingBox, Neighbor, Quadrant};
