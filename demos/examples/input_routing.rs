// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input through an `InputSource`.
//!
//! The host pushes raw events into a shared source; the tree subscribes
//! while its root is enabled and dispatches whatever queued once per frame.
//! A button-like handler consumes presses inside its bounds.
//!
//! Run:
//! - `cargo run -p canopy_demos --example input_routing`

use std::cell::RefCell;
use std::rc::Rc;

use canopy_events::{InputEvent, InputSource, MouseButton, MouseEvent};
use canopy_tree::{EventHandler, NodeId, TreeError, UiTree};
use glam::{Vec2, Vec3};

#[derive(Default)]
struct Button {
    presses: usize,
}

impl EventHandler<&'static str> for Button {
    fn mouse_down(
        &mut self,
        tree: &mut UiTree<&'static str>,
        id: NodeId,
        event: &mut MouseEvent,
    ) {
        // The tree routes presses to every enabled node; the button decides
        // geometrically whether this one is its own.
        if tree.contains_from(id, event.pos().extend(0.0), canopy_tree::CollisionShape::Rect)
            == Some(id)
        {
            self.presses += 1;
            event.set_handled(true);
            println!("button pressed ({} so far)", self.presses);
        }
    }

    fn mouse_over(&mut self, _tree: &mut UiTree<&'static str>, _id: NodeId) {
        println!("button hovered");
    }

    fn mouse_out(&mut self, _tree: &mut UiTree<&'static str>, _id: NodeId) {
        println!("button left");
    }
}

fn main() -> Result<(), TreeError> {
    let source = InputSource::new();
    let mut tree = UiTree::with_input_source("scene", source.clone());

    let button_id = tree.create_child(NodeId::ROOT, "button")?;
    tree.find_mut(button_id)?
        .set_translate(Vec3::new(10.0, 10.0, 0.0), 1.0)
        .set_scale(Vec3::new(20.0, 20.0, 0.0), 1.0);
    let button = Rc::new(RefCell::new(Button::default()));
    tree.connect_handler(button_id, button.clone())?;

    // Events pushed before the root is enabled are dropped.
    source.push(InputEvent::MouseDown(MouseEvent::new(
        Vec2::new(15.0, 15.0),
        MouseButton::Left,
    )));
    tree.set_enabled(NodeId::ROOT, true)?;
    tree.set_enabled(button_id, true)?;
    tree.pump_input();
    println!("presses after pre-enable click: {}", button.borrow().presses);

    // A frame's worth of host input: hover in, click, hover away, a miss.
    source.push(InputEvent::MouseMove(MouseEvent::new(
        Vec2::new(15.0, 15.0),
        MouseButton::Left,
    )));
    source.push(InputEvent::MouseDown(MouseEvent::new(
        Vec2::new(15.0, 15.0),
        MouseButton::Left,
    )));
    source.push(InputEvent::MouseMove(MouseEvent::new(
        Vec2::new(90.0, 90.0),
        MouseButton::Left,
    )));
    source.push(InputEvent::MouseDown(MouseEvent::new(
        Vec2::new(90.0, 90.0),
        MouseButton::Left,
    )));
    tree.pump_input();
    println!("presses after the frame: {}", button.borrow().presses);
    Ok(())
}
