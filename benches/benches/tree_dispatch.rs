// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_events::{MouseButton, MouseEvent};
use canopy_tree::{CollisionShape, NodeId, UiTree};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};

/// Build an enabled tree with `fanout.pow(depth)` leaves, each node offset
/// from its parent and sized so hit tests have real work to do.
fn build_tree(fanout: usize, depth: usize) -> UiTree<u32> {
    let mut tree = UiTree::new(0);
    tree.set_enabled(NodeId::ROOT, true).unwrap();
    tree.find_mut(NodeId::ROOT)
        .unwrap()
        .set_scale(Vec3::new(1000.0, 1000.0, 0.0), 1.0);
    let mut frontier = vec![NodeId::ROOT];
    for level in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for &parent in &frontier {
            for i in 0..fanout {
                let id = tree.create_child(parent, level as u32).unwrap();
                tree.set_enabled(id, true).unwrap();
                tree.find_mut(id)
                    .unwrap()
                    .set_translate(Vec3::new(10.0 * i as f32, 5.0 * level as f32, 0.0), 1.0)
                    .set_scale(Vec3::new(8.0, 8.0, 0.0), 1.0);
                next.push(id);
            }
        }
        frontier = next;
    }
    tree
}

/// Put every translate channel in flight so the tick does real blending.
fn animate_all(tree: &mut UiTree<u32>) {
    for id in tree.query(|_| true) {
        if let Ok(node) = tree.find_mut(id) {
            let target = node.translate() + Vec3::new(100.0, 100.0, 0.0);
            node.set_translate(target, 0.05);
        }
    }
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for (label, fanout, depth) in [("wide_1k", 1000, 1), ("deep_64", 1, 64), ("grid_4x5", 4, 5)] {
        let mut tree = build_tree(fanout, depth);
        animate_all(&mut tree);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                tree.update();
                black_box(tree.len())
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for (label, fanout, depth) in [("wide_1k", 1000, 1), ("grid_4x5", 4, 5)] {
        let tree = build_tree(fanout, depth);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("{label}_hit"), |b| {
            b.iter(|| black_box(tree.contains(Vec3::new(4.0, 4.0, 0.0), CollisionShape::Rect)));
        });
        group.bench_function(format!("{label}_miss"), |b| {
            b.iter(|| {
                black_box(tree.contains(
                    Vec3::new(-100.0, -100.0, 0.0),
                    CollisionShape::Rect,
                ))
            });
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let tree = build_tree(4, 5);
    group.throughput(Throughput::Elements(tree.len() as u64));
    group.bench_function("deep_level_filter", |b| {
        b.iter(|| black_box(tree.query(|node| *node.data() >= 3)));
    });
    group.finish();
}

fn bench_mouse_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("mouse_move");
    for (label, fanout, depth) in [("wide_1k", 1000, 1), ("grid_4x5", 4, 5)] {
        let mut tree = build_tree(fanout, depth);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(label, |b| {
            let mut flip = false;
            b.iter(|| {
                // Alternate inside/outside so hover transitions keep firing.
                let pos = if flip {
                    Vec2::new(4.0, 4.0)
                } else {
                    Vec2::new(-100.0, -100.0)
                };
                flip = !flip;
                let mut event = MouseEvent::new(pos, MouseButton::Left);
                tree.mouse_move(&mut event);
                black_box(event.is_handled())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_update,
    bench_contains,
    bench_query,
    bench_mouse_sweep
);
criterion_main!(benches);
