// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building and restructuring a tree.
//!
//! This example creates a small scene, queries it, grafts a pre-built
//! subtree, and moves a node to a new parent.
//!
//! Run:
//! - `cargo run -p canopy_demos --example tree_basics`

use canopy_tree::{NodeId, TreeError, UiTree};
use glam::Vec3;

fn print_subtree(tree: &UiTree<&str>, id: NodeId, indent: usize) {
    if let Ok(node) = tree.find(id) {
        println!("{:indent$}{} (#{})", "", node.data(), id, indent = indent);
        for child in node.children() {
            print_subtree(tree, child, indent + 2);
        }
    }
}

fn main() -> Result<(), TreeError> {
    let mut tree = UiTree::new("scene");
    let hud = tree.create_child(NodeId::ROOT, "hud")?;
    let menu = tree.create_child(NodeId::ROOT, "menu")?;
    let score = tree.create_child(hud, "score")?;
    tree.find_mut(score)?
        .set_translate(Vec3::new(10.0, 5.0, 0.0), 1.0);
    tree.find_mut(hud)?
        .set_translate(Vec3::new(100.0, 0.0, 0.0), 1.0);

    println!("initial structure:");
    print_subtree(&tree, NodeId::ROOT, 0);

    // A subtree built elsewhere can be grafted in one call. The incoming
    // root is renumbered; everything below it keeps its id.
    let mut dialog = UiTree::new("dialog");
    dialog.create_child(NodeId::ROOT, "ok button")?;
    dialog.create_child(NodeId::ROOT, "cancel button")?;
    let dialog_id = tree.add_child(menu, dialog)?;
    println!("\nafter grafting the dialog (new root #{dialog_id}):");
    print_subtree(&tree, NodeId::ROOT, 0);

    // Moving the score readout from the hud into the menu.
    tree.reparent(score, menu)?;
    println!("\nafter reparenting #{score}:");
    print_subtree(&tree, NodeId::ROOT, 0);

    // Positions accumulate up the parent chain.
    println!(
        "\nscore absolute translate: {}",
        tree.absolute_translate(score)?
    );

    let buttons = tree.query(|node| node.data().ends_with("button"));
    println!("button nodes: {buttons:?}");
    println!("total nodes: {}", tree.len());
    Ok(())
}
