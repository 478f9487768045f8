// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two animation driving modes.
//!
//! A channel either blends toward a fixed target or drifts under a decaying
//! velocity. This example runs one node through both and prints the position
//! per tick, including the sub-epsilon freeze at the end of a decay.
//!
//! Run:
//! - `cargo run -p canopy_demos --example channel_animation`

use canopy_anim::VELOCITY_EPSILON;
use canopy_tree::{NodeId, TreeError, UiTree};
use glam::Vec3;

fn main() -> Result<(), TreeError> {
    let mut tree = UiTree::new(());

    // Target mode: half the remaining distance per tick.
    tree.find_mut(NodeId::ROOT)?
        .set_translate(Vec3::new(100.0, 0.0, 0.0), 0.5);
    println!("target mode, speed 0.5:");
    for tick in 1..=6 {
        tree.update();
        println!("  tick {tick}: x = {:.3}", tree.find(NodeId::ROOT)?.translate().x);
    }

    // Velocity mode: the target drifts while the velocity decays away.
    tree.find_mut(NodeId::ROOT)?
        .set_translate(Vec3::ZERO, 1.0)
        .set_translate_velocity(Vec3::new(4.0, 0.0, 0.0), 0.25);
    println!("\nvelocity mode, decay 0.25 (freezes below {VELOCITY_EPSILON}):");
    for tick in 1..=6 {
        tree.update();
        let node = tree.find(NodeId::ROOT)?;
        println!(
            "  tick {tick}: x = {:.4}, velocity = {:.4}",
            node.translate().x,
            node.transform().translate.velocity().x,
        );
    }
    Ok(())
}
