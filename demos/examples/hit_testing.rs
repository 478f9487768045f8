// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical hit testing with mixed shapes.
//!
//! Containment walks self-then-children in ascending-id order and localizes
//! the probe point at every level, so a deeply nested node is found with a
//! single root-space query.
//!
//! Run:
//! - `cargo run -p canopy_demos --example hit_testing`

use canopy_tree::{CollisionShape, NodeId, TreeError, UiTree};
use glam::Vec3;

fn main() -> Result<(), TreeError> {
    let mut tree = UiTree::new("scene");

    // A 10x10 panel at the origin with a circular knob inside it.
    let panel = tree.create_child(NodeId::ROOT, "panel")?;
    tree.find_mut(panel)?
        .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);
    let knob = tree.create_child(panel, "knob")?;
    tree.find_mut(knob)?
        .set_translate(Vec3::new(20.0, 20.0, 0.0), 1.0)
        .set_scale(Vec3::new(5.0, 5.0, 0.0), 1.0)
        .set_shape(CollisionShape::Circle);

    let probes = [
        (Vec3::new(5.0, 5.0, 0.0), CollisionShape::Rect),
        (Vec3::new(20.0, 20.0, 0.0), CollisionShape::Circle),
        (Vec3::new(23.0, 23.0, 0.0), CollisionShape::Circle),
        (Vec3::new(24.0, 24.0, 0.0), CollisionShape::Circle),
        (Vec3::new(-5.0, -5.0, 0.0), CollisionShape::Rect),
    ];
    for (point, shape) in probes {
        match tree.contains(point, shape) {
            Some(id) => println!(
                "{:?} as {shape:?} -> {} (#{id})",
                point,
                tree.find(id)?.data()
            ),
            None => println!("{point:?} as {shape:?} -> no hit"),
        }
    }

    // Registration shifts the resolved origin: anchored by its center, the
    // panel now extends into negative space.
    tree.find_mut(panel)?
        .set_registration(Vec3::new(5.0, 5.0, 0.0), 1.0);
    println!(
        "after centering the panel's pivot, (-4,-4) hits: {:?}",
        tree.contains(Vec3::new(-4.0, -4.0, 0.0), CollisionShape::Rect)
    );
    Ok(())
}
