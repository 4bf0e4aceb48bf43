// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_quadtree::{
    Euclidean, Manhattan, Metric, Point, QuadTree, Size, Unbounded, nearest_linear,
};

fn gen_uniform_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.random_range(-0.9..0.9);
        let cy = rng.random_range(-0.9..0.9);
        for _ in 0..per_cluster {
            let dx = (rng.random::<f64>() - 0.5) * spread;
            let dy = (rng.random::<f64>() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build_tree(points: &[Point]) -> QuadTree {
    let mut tree = QuadTree::new(Point::ZERO, Size::new(2.0, 2.0));
    for &p in points {
        tree.insert(p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_024_usize, 16_384, 65_536] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Point::ZERO, Size::new(2.0, 2.0)),
                |mut tree| {
                    for &p in &points {
                        tree.insert(p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    let points = gen_clustered_points(64, 256, 0.01);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_64x256", |b| {
        b.iter_batched(
            || QuadTree::new(Point::ZERO, Size::new(2.0, 2.0)),
            |mut tree| {
                for &p in &points {
                    tree.insert(p);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_nearest_against_scan<M: Metric>(c: &mut Criterion, name: &str, metric: &M) {
    let mut group = c.benchmark_group(name);
    let queries = gen_uniform_points(256, 0xFACE_FEED_CAFE_BABE);
    for &n in &[1_024_usize, 16_384, 65_536] {
        let points = gen_uniform_points(n, 0xBADC_F00D_1234_5678);
        let tree = build_tree(&points);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(tree.nearest(metric, f64::INFINITY, q));
                }
            });
        });
        group.bench_function(format!("linear_n{}", n), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(nearest_linear(&points, metric, f64::INFINITY, q));
                }
            });
        });
    }
    group.finish();
}

fn bench_nearest_manhattan(c: &mut Criterion) {
    bench_nearest_against_scan(c, "nearest_manhattan", &Manhattan);
}

fn bench_nearest_euclidean(c: &mut Criterion) {
    bench_nearest_against_scan(c, "nearest_euclidean", &Euclidean);
}

fn bench_nearest_unbounded(c: &mut Criterion) {
    // No box bound, so nothing is pruned: this measures traversal cost against a flat scan.
    let metric = Unbounded(|a: Point, b: Point| (a - b).hypot2());
    let mut group = c.benchmark_group("nearest_unbounded");
    let points = gen_uniform_points(16_384, 0x0DD_BA11);
    let tree = build_tree(&points);
    let q = Point::new(0.25, -0.29);
    group.bench_function("quadtree_n16384", |b| {
        b.iter(|| black_box(tree.nearest(&metric, f64::INFINITY, q)));
    });
    group.bench_function("linear_n16384", |b| {
        b.iter(|| black_box(nearest_linear(&points, &metric, f64::INFINITY, q)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_nearest_manhattan,
    bench_nearest_euclidean,
    bench_nearest_unbounded
);
criterion_main!(benches);
