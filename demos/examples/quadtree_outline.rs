// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree outline.
//!
//! Insert random points and render the tree as SVG by walking it with `traverse`:
//! every quad becomes a stroked rectangle and every stored point a small dot.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_outline > quadtree.svg`

use kurbo::{Affine, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{NodeRef, Point, QuadTree, Size};

const CANVAS: f64 = 600.0;
const MAX_POINTS: usize = 1 << 10;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut rng = StdRng::seed_from_u64(0x0D12_A3);
    let mut tree = QuadTree::new(Point::ZERO, Size::new(2.0, 2.0));
    for _ in 0..MAX_POINTS {
        let p = Point::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        tree.insert(p);
    }
    info!(len = tree.len(), depth = tree.depth(), "tree built");

    // World space has y up; SVG has y down.
    let half = CANVAS / 2.0;
    let to_screen = Affine::scale_non_uniform(half, -half).then_translate(Vec2::new(half, half));

    let mut quads = 0_usize;
    let mut body = String::new();
    tree.traverse(|node| match node {
        NodeRef::Quad(quad) => {
            quads += 1;
            let r = to_screen.transform_rect_bbox(quad.bounds().rect());
            body.push_str(&format!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"red\" stroke-width=\"0.5\"/>\n",
                r.x0,
                r.y0,
                r.width(),
                r.height()
            ));
        }
        NodeRef::Leaf(p) => push_dot(&mut body, to_screen * p),
        NodeRef::Bucket(points) => {
            for &p in points {
                push_dot(&mut body, to_screen * p);
            }
        }
        NodeRef::Empty => {}
    });
    info!(quads, "outline rendered");

    println!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS}\" height=\"{CANVAS}\" style=\"background: lightgray\">"
    );
    print!("{body}");
    println!("</svg>");
}

fn push_dot(body: &mut String, p: Point) {
    body.push_str(&format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"2\" height=\"2\" fill=\"blue\"/>\n",
        p.x, p.y
    ));
}
