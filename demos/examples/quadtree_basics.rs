// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Fill the four quadrants of a root box, force a split, and run nearest queries under
//! different metrics.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_quadtree_demos --example quadtree_basics`

use tracing_subscriber::EnvFilter;
use understory_quadtree::{
    Chebyshev, Euclidean, Manhattan, Node, Point, QuadTree, Quadrant, Size,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Point::ZERO, Size::new(2.0, 2.0));
    for p in [
        Point::new(-1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(-1.0, -1.0),
    ] {
        tree.insert(p);
    }
    for q in Quadrant::ALL {
        println!("{:?}: {:?}", q, tree.root().child(q));
    }

    // Outside the root box: accepted by `insert`, refused by `try_insert`.
    let outside = Point::new(-2.0, -2.0);
    if let Err(err) = tree.try_insert(outside) {
        println!("try_insert: {err}");
    }
    tree.insert(outside);
    assert!(matches!(
        tree.root().child(Quadrant::LowerLeft),
        Node::Quad(_)
    ));
    println!("after split: len={} depth={}", tree.len(), tree.depth());

    let query = Point::new(-1.9, -1.9);
    let hit = tree.nearest_with_distance(&Manhattan, f64::INFINITY, query);
    println!("nearest to {query:?} (manhattan): {hit:?}");
    assert_eq!(hit.map(|n| n.point), Some(outside));

    let query = Point::new(0.4, 0.9);
    println!(
        "nearest to {query:?}: euclidean={:?} chebyshev={:?}",
        tree.nearest(&Euclidean, f64::INFINITY, query),
        tree.nearest(&Chebyshev, f64::INFINITY, query),
    );
    println!(
        "within 0.1 of {query:?}: {:?}",
        tree.nearest(&Euclidean, 0.1, query)
    );
    println!("{tree:?}");
}
