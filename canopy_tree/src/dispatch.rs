// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event routing.
//!
//! Every event enters at the root and walks the tree depth-first, children in
//! ascending-id order, gated on the enabled flag at each level: a disabled
//! node hides its entire subtree. Callbacks mark events handled to stop
//! propagation.
//!
//! The per-kind walks differ deliberately:
//!
//! - press events (`mouse_down`, `mouse_drag`) stop dead on a handled child,
//!   leaving ancestor hover state untouched; on the unhandled path they
//!   recompute hover before firing;
//! - sweep events (`mouse_move`, `mouse_up`) recompute hover at every enabled
//!   level even when a descendant handled the event, and skip only the
//!   node's own callback;
//! - focusless events (`key_down`, `key_up`, `mouse_wheel`) stop dead on a
//!   handled child and never touch hover state;
//! - `resize` visits every enabled node unconditionally;
//! - touch events recompute per-touch hover, `touches_moved` after the
//!   node's callback has run.

use canopy_events::{InputEvent, KeyEvent, MouseEvent, Touch, TouchEvent};
use glam::Vec2;

use crate::id::NodeId;
use crate::node::{KeySlot, MouseSlot, NodeFlags, NodeSlot, TouchIdSlot, TouchSlot};
use crate::tree::UiTree;

impl<T: 'static> UiTree<T> {
    /// Drain the attached input source and dispatch every pending event.
    ///
    /// Does nothing unless the root is enabled and a source is attached.
    pub fn pump_input(&mut self) {
        let Some(connection) = &self.connection else {
            return;
        };
        let events = connection.drain();
        for event in events {
            match event {
                InputEvent::KeyDown(mut ev) => self.key_down(&mut ev),
                InputEvent::KeyUp(mut ev) => self.key_up(&mut ev),
                InputEvent::MouseDown(mut ev) => self.mouse_down(&mut ev),
                InputEvent::MouseDrag(mut ev) => self.mouse_drag(&mut ev),
                InputEvent::MouseMove(mut ev) => self.mouse_move(&mut ev),
                InputEvent::MouseUp(mut ev) => self.mouse_up(&mut ev),
                InputEvent::MouseWheel(mut ev) => self.mouse_wheel(&mut ev),
                InputEvent::TouchesBegan(mut ev) => self.touches_began(&mut ev),
                InputEvent::TouchesEnded(mut ev) => self.touches_ended(&mut ev),
                InputEvent::TouchesMoved(mut ev) => self.touches_moved(&mut ev),
                InputEvent::Resized => self.resize(),
            }
        }
    }

    /// Route a key press through the tree.
    pub fn key_down(&mut self, event: &mut KeyEvent) {
        self.route_key(NodeId::ROOT, KeySlot::Down, event);
    }

    /// Route a key release through the tree.
    pub fn key_up(&mut self, event: &mut KeyEvent) {
        self.route_key(NodeId::ROOT, KeySlot::Up, event);
    }

    /// Route a mouse press through the tree.
    pub fn mouse_down(&mut self, event: &mut MouseEvent) {
        self.route_mouse_press(NodeId::ROOT, MouseSlot::Down, event);
    }

    /// Route a mouse drag through the tree.
    pub fn mouse_drag(&mut self, event: &mut MouseEvent) {
        self.route_mouse_press(NodeId::ROOT, MouseSlot::Drag, event);
    }

    /// Route a mouse move through the tree, updating hover state.
    pub fn mouse_move(&mut self, event: &mut MouseEvent) {
        self.route_mouse_sweep(NodeId::ROOT, MouseSlot::Move, event);
    }

    /// Route a mouse release through the tree, updating hover state.
    pub fn mouse_up(&mut self, event: &mut MouseEvent) {
        self.route_mouse_sweep(NodeId::ROOT, MouseSlot::Up, event);
    }

    /// Route a wheel event through the tree.
    pub fn mouse_wheel(&mut self, event: &mut MouseEvent) {
        self.route_mouse_wheel(NodeId::ROOT, event);
    }

    /// Route a new-touches batch through the tree.
    pub fn touches_began(&mut self, event: &mut TouchEvent) {
        self.route_touches_began(NodeId::ROOT, event);
    }

    /// Route a lifted-touches batch through the tree.
    pub fn touches_ended(&mut self, event: &mut TouchEvent) {
        self.route_touches_ended(NodeId::ROOT, event);
    }

    /// Route a moved-touches batch through the tree.
    pub fn touches_moved(&mut self, event: &mut TouchEvent) {
        self.route_touches_moved(NodeId::ROOT, event);
    }

    /// Notify every enabled node that the host surface was resized.
    pub fn resize(&mut self) {
        self.route_resize(NodeId::ROOT);
    }

    // Keys and wheel share a shape: depth-first, stop dead once any callback
    // handles the event, fire self only if no child did, no hover recompute.
    fn route_key(&mut self, id: NodeId, slot: KeySlot, event: &mut KeyEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_key(child, slot, event);
            if event.is_handled() {
                return;
            }
        }
        self.fire_key(id, slot, event);
    }

    fn route_mouse_wheel(&mut self, id: NodeId, event: &mut MouseEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_mouse_wheel(child, event);
            if event.is_handled() {
                return;
            }
        }
        self.fire_mouse(id, MouseSlot::Wheel, event);
    }

    // Presses stop dead on a handled child: ancestors see neither their
    // callback nor a hover recompute. Unhandled presses update hover first.
    fn route_mouse_press(&mut self, id: NodeId, slot: MouseSlot, event: &mut MouseEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_mouse_press(child, slot, event);
            if event.is_handled() {
                return;
            }
        }
        self.sync_mouse_over(id, event.pos());
        self.fire_mouse(id, slot, event);
    }

    // Moves and releases keep walking after a handler: hover state must stay
    // consistent at every enabled level, only the callbacks are skipped.
    fn route_mouse_sweep(&mut self, id: NodeId, slot: MouseSlot, event: &mut MouseEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_mouse_sweep(child, slot, event);
            if event.is_handled() {
                break;
            }
        }
        self.sync_mouse_over(id, event.pos());
        if !event.is_handled() {
            self.fire_mouse(id, slot, event);
        }
    }

    fn route_resize(&mut self, id: NodeId) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_resize(child);
        }
        self.fire_node(id, NodeSlot::Resize);
    }

    fn route_touches_began(&mut self, id: NodeId, event: &mut TouchEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_touches_began(child, event);
            if event.is_handled() {
                break;
            }
        }
        let touches = event.touches().to_vec();
        self.sync_touch_over(id, &touches);
        if !event.is_handled() {
            self.fire_touch(id, TouchSlot::Began, event);
        }
    }

    fn route_touches_ended(&mut self, id: NodeId, event: &mut TouchEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_touches_ended(child, event);
            if event.is_handled() {
                break;
            }
        }
        for touch in event.touches().to_vec() {
            let removed = self
                .get_mut(id)
                .is_some_and(|node| node.remove_touch(touch.id()));
            if removed {
                self.fire_touch_id(id, TouchIdSlot::Out, touch.id());
            }
        }
        if !event.is_handled() {
            self.fire_touch(id, TouchSlot::Ended, event);
        }
    }

    // Moved batches fire the callback first; the hover recompute sees any
    // state the callback changed.
    fn route_touches_moved(&mut self, id: NodeId, event: &mut TouchEvent) {
        if !self.is_enabled(id) {
            return;
        }
        for child in self.child_ids(id) {
            self.route_touches_moved(child, event);
            if event.is_handled() {
                break;
            }
        }
        if !event.is_handled() {
            self.fire_touch(id, TouchSlot::Moved, event);
        }
        let touches = event.touches().to_vec();
        self.sync_touch_over(id, &touches);
    }

    // Hover is derived from subtree containment against the node's own shape,
    // with the event position taken as-is in root space.
    fn sync_mouse_over(&mut self, id: NodeId, pos: Vec2) {
        let Some(node) = self.get(id) else {
            return;
        };
        let shape = node.shape;
        let was_over = node.flags.contains(NodeFlags::MOUSE_OVER);
        let over = self.contains_from(id, pos.extend(0.0), shape).is_some();
        if over == was_over {
            return;
        }
        if let Some(node) = self.get_mut(id) {
            node.flags.set(NodeFlags::MOUSE_OVER, over);
        }
        if over {
            self.fire_node(id, NodeSlot::MouseOver);
        } else {
            self.fire_node(id, NodeSlot::MouseOut);
        }
    }

    fn sync_touch_over(&mut self, id: NodeId, touches: &[Touch]) {
        for touch in touches {
            let Some(node) = self.get(id) else {
                return;
            };
            let shape = node.shape;
            let over = self
                .contains_from(id, touch.pos().extend(0.0), shape)
                .is_some();
            let was_over = self
                .contains_from(id, touch.prev_pos().extend(0.0), shape)
                .is_some();
            if over && !was_over {
                self.fire_touch_id(id, TouchIdSlot::Over, touch.id());
            } else if !over && was_over {
                // Leave fires the callback only; the touch stays in the
                // active set until the host reports it ended.
                self.fire_touch_id(id, TouchIdSlot::Out, touch.id());
            }
            if over {
                let added = self
                    .get_mut(id)
                    .is_some_and(|node| node.add_touch(*touch));
                if added {
                    self.fire_touch_id(id, TouchIdSlot::Over, touch.id());
                }
            }
        }
    }

    // Callback invocation takes the boxed closure out of its slot, calls it
    // with the whole tree, and puts it back only if the slot is still empty
    // and the node still exists: a callback that replaces or disconnects
    // itself, or removes its own node, wins.
    pub(crate) fn fire_node(&mut self, id: NodeId, slot: NodeSlot) {
        let Some(mut callback) = self
            .get_mut(id)
            .and_then(|node| node.handlers.node_slot(slot).take())
        else {
            return;
        };
        callback(self, id);
        if let Some(node) = self.get_mut(id) {
            let stored = node.handlers.node_slot(slot);
            if stored.is_none() {
                *stored = Some(callback);
            }
        }
    }

    fn fire_key(&mut self, id: NodeId, slot: KeySlot, event: &mut KeyEvent) {
        let Some(mut callback) = self
            .get_mut(id)
            .and_then(|node| node.handlers.key_slot(slot).take())
        else {
            return;
        };
        callback(self, id, event);
        if let Some(node) = self.get_mut(id) {
            let stored = node.handlers.key_slot(slot);
            if stored.is_none() {
                *stored = Some(callback);
            }
        }
    }

    fn fire_mouse(&mut self, id: NodeId, slot: MouseSlot, event: &mut MouseEvent) {
        let Some(mut callback) = self
            .get_mut(id)
            .and_then(|node| node.handlers.mouse_slot(slot).take())
        else {
            return;
        };
        callback(self, id, event);
        if let Some(node) = self.get_mut(id) {
            let stored = node.handlers.mouse_slot(slot);
            if stored.is_none() {
                *stored = Some(callback);
            }
        }
    }

    fn fire_touch(&mut self, id: NodeId, slot: TouchSlot, event: &mut TouchEvent) {
        let Some(mut callback) = self
            .get_mut(id)
            .and_then(|node| node.handlers.touch_slot(slot).take())
        else {
            return;
        };
        callback(self, id, event);
        if let Some(node) = self.get_mut(id) {
            let stored = node.handlers.touch_slot(slot);
            if stored.is_none() {
                *stored = Some(callback);
            }
        }
    }

    fn fire_touch_id(&mut self, id: NodeId, slot: TouchIdSlot, touch: u32) {
        let Some(mut callback) = self
            .get_mut(id)
            .and_then(|node| node.handlers.touch_id_slot(slot).take())
        else {
            return;
        };
        callback(self, id, touch);
        if let Some(node) = self.get_mut(id) {
            let stored = node.handlers.touch_id_slot(slot);
            if stored.is_none() {
                *stored = Some(callback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use canopy_events::{InputSource, MouseButton};
    use glam::Vec3;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn enabled_tree() -> UiTree<()> {
        let mut t = UiTree::new(());
        t.set_enabled(NodeId::ROOT, true).unwrap();
        t
    }

    fn press_at(x: f32, y: f32) -> MouseEvent {
        MouseEvent::new(Vec2::new(x, y), MouseButton::Left)
    }

    #[test]
    fn mouse_down_stops_at_the_first_handling_sibling() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.set_enabled(b, true).unwrap();

        let seen = log();
        let a_seen = seen.clone();
        let b_seen = seen.clone();
        let root_seen = seen.clone();
        t.find_mut(a).unwrap().connect_mouse_down(move |_, _, ev| {
            a_seen.borrow_mut().push("a");
            ev.set_handled(true);
        });
        t.find_mut(b)
            .unwrap()
            .connect_mouse_down(move |_, _, _| b_seen.borrow_mut().push("b"));
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_mouse_down(move |_, _, _| root_seen.borrow_mut().push("root"));

        let mut ev = press_at(5.0, 5.0);
        t.mouse_down(&mut ev);
        assert!(ev.is_handled());
        assert_eq!(*seen.borrow(), vec!["a"], "b and root never fire");
    }

    #[test]
    fn unhandled_mouse_down_reaches_everyone_children_first() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();

        let seen = log();
        let a_seen = seen.clone();
        let root_seen = seen.clone();
        t.find_mut(a)
            .unwrap()
            .connect_mouse_down(move |_, _, _| a_seen.borrow_mut().push("a"));
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_mouse_down(move |_, _, _| root_seen.borrow_mut().push("root"));

        t.mouse_down(&mut press_at(0.0, 0.0));
        assert_eq!(*seen.borrow(), vec!["a", "root"]);
    }

    #[test]
    fn disabled_node_hides_its_subtree() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(a, ()).unwrap();
        // `b` is enabled, but its parent is not.
        t.set_enabled(b, true).unwrap();

        let seen = log();
        let b_seen = seen.clone();
        t.find_mut(b)
            .unwrap()
            .connect_mouse_down(move |_, _, _| b_seen.borrow_mut().push("b"));

        t.mouse_down(&mut press_at(0.0, 0.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn key_down_stops_on_handled_without_firing_ancestors() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();

        let seen = log();
        let a_seen = seen.clone();
        let root_seen = seen.clone();
        t.find_mut(a).unwrap().connect_key_down(move |_, _, ev| {
            a_seen.borrow_mut().push("a");
            ev.set_handled(true);
        });
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_key_down(move |_, _, _| root_seen.borrow_mut().push("root"));

        let mut ev = KeyEvent::new(13);
        t.key_down(&mut ev);
        assert_eq!(*seen.borrow(), vec!["a"]);
    }

    #[test]
    fn mouse_move_fires_over_and_out_on_transitions() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        let seen = log();
        let over = seen.clone();
        let out = seen.clone();
        t.find_mut(a)
            .unwrap()
            .connect_mouse_over(move |_, _| over.borrow_mut().push("over"))
            .connect_mouse_out(move |_, _| out.borrow_mut().push("out"));

        t.mouse_move(&mut press_at(5.0, 5.0));
        assert!(t.find(a).unwrap().is_mouse_over());
        // Still inside: no repeat.
        t.mouse_move(&mut press_at(6.0, 6.0));
        t.mouse_move(&mut press_at(50.0, 50.0));
        assert!(!t.find(a).unwrap().is_mouse_over());
        assert_eq!(*seen.borrow(), vec!["over", "out"]);
    }

    #[test]
    fn unhandled_mouse_down_updates_hover() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        t.mouse_down(&mut press_at(5.0, 5.0));
        assert!(t.find(a).unwrap().is_mouse_over());
    }

    #[test]
    fn handled_mouse_down_leaves_ancestor_hover_untouched() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(a, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.set_enabled(b, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);
        t.find_mut(b)
            .unwrap()
            .connect_mouse_down(move |_, _, ev| ev.set_handled(true));

        // Contrast with `mouse_move`: the press returns straight up from the
        // handling child, so `a` never recomputes its hover flag.
        t.mouse_down(&mut press_at(5.0, 5.0));
        assert!(!t.find(a).unwrap().is_mouse_over());

        t.mouse_move(&mut press_at(5.0, 5.0));
        assert!(t.find(a).unwrap().is_mouse_over());
    }

    #[test]
    fn handled_move_still_updates_ancestor_hover_but_skips_their_callbacks() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(a, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.set_enabled(b, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        let seen = log();
        let a_move = seen.clone();
        let a_over = seen.clone();
        t.find_mut(b)
            .unwrap()
            .connect_mouse_move(move |_, _, ev| ev.set_handled(true));
        t.find_mut(a)
            .unwrap()
            .connect_mouse_move(move |_, _, _| a_move.borrow_mut().push("a move"))
            .connect_mouse_over(move |_, _| a_over.borrow_mut().push("a over"));

        t.mouse_move(&mut press_at(5.0, 5.0));
        assert!(t.find(a).unwrap().is_mouse_over());
        assert_eq!(*seen.borrow(), vec!["a over"], "move callback skipped");
    }

    #[test]
    fn resize_visits_every_enabled_node() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.set_enabled(b, true).unwrap();

        let seen = log();
        for (id, label) in [(a, "a"), (b, "b"), (NodeId::ROOT, "root")] {
            let entry = seen.clone();
            t.find_mut(id)
                .unwrap()
                .connect_resize(move |_, _| entry.borrow_mut().push(label));
        }

        t.resize();
        assert_eq!(*seen.borrow(), vec!["a", "b", "root"]);
    }

    #[test]
    fn touches_enter_and_leave_the_active_set() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let over = seen.clone();
        let out = seen.clone();
        t.find_mut(a)
            .unwrap()
            .connect_touch_over(move |_, _, id| {
                over.borrow_mut().push(alloc::format!("over {id}"));
            })
            .connect_touch_out(move |_, _, id| {
                out.borrow_mut().push(alloc::format!("out {id}"));
            });

        let inside = Vec2::new(5.0, 5.0);
        let outside = Vec2::new(50.0, 50.0);
        let mut began = TouchEvent::new(vec![Touch::new(1, inside, inside)]);
        t.touches_began(&mut began);
        assert_eq!(t.find(a).unwrap().active_touches().len(), 1);

        // Drifting out fires the leave callback, but the touch stays active
        // until the host reports it ended.
        let mut moved = TouchEvent::new(vec![Touch::new(1, outside, inside)]);
        t.touches_moved(&mut moved);
        assert_eq!(t.find(a).unwrap().active_touches().len(), 1);
        assert!(seen.borrow().iter().any(|entry| entry == "out 1"));
        assert!(seen.borrow().iter().any(|entry| entry == "over 1"));

        let mut ended = TouchEvent::new(vec![Touch::new(1, outside, outside)]);
        t.touches_ended(&mut ended);
        assert!(t.find(a).unwrap().active_touches().is_empty());
    }

    #[test]
    fn touches_ended_clears_only_the_lifted_ids() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        let p = Vec2::new(5.0, 5.0);
        let mut began = TouchEvent::new(vec![Touch::new(1, p, p), Touch::new(2, p, p)]);
        t.touches_began(&mut began);
        assert_eq!(t.find(a).unwrap().active_touches().len(), 2);

        let mut ended = TouchEvent::new(vec![Touch::new(1, p, p)]);
        t.touches_ended(&mut ended);
        let remaining = t.find(a).unwrap().active_touches();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), 2);
    }

    #[test]
    fn touches_began_handled_child_suppresses_parent_callback() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();

        let seen = log();
        let root_seen = seen.clone();
        t.find_mut(a)
            .unwrap()
            .connect_touches_began(move |_, _, ev| ev.set_handled(true));
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_touches_began(move |_, _, _| root_seen.borrow_mut().push("root"));

        let p = Vec2::new(1.0, 1.0);
        let mut ev = TouchEvent::new(vec![Touch::new(1, p, p)]);
        t.touches_began(&mut ev);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn last_connect_wins() {
        let mut t = enabled_tree();
        let seen = log();
        let first = seen.clone();
        let second = seen.clone();
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_resize(move |_, _| first.borrow_mut().push("first"))
            .connect_resize(move |_, _| second.borrow_mut().push("second"));

        t.resize();
        assert_eq!(*seen.borrow(), vec!["second"]);
    }

    #[test]
    fn callback_replacing_itself_wins() {
        let mut t = enabled_tree();
        let seen = log();
        let first = seen.clone();
        let second = seen.clone();
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_resize(move |tree, id| {
                first.borrow_mut().push("first");
                let next = second.clone();
                if let Ok(node) = tree.find_mut(id) {
                    node.connect_resize(move |_, _| next.borrow_mut().push("second"));
                }
            });

        t.resize();
        t.resize();
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn callbacks_may_mutate_the_tree_mid_dispatch() {
        let mut t = enabled_tree();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        let b = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.set_enabled(b, true).unwrap();

        let seen = log();
        let a_seen = seen.clone();
        let b_seen = seen.clone();
        // `a` removes its sibling while the event is in flight.
        t.find_mut(a).unwrap().connect_mouse_down(move |tree, _, _| {
            a_seen.borrow_mut().push("a");
            tree.remove_child(b);
        });
        t.find_mut(b)
            .unwrap()
            .connect_mouse_down(move |_, _, _| b_seen.borrow_mut().push("b"));

        t.mouse_down(&mut press_at(0.0, 0.0));
        assert!(!t.exists(b));
        assert_eq!(*seen.borrow(), vec!["a"], "vanished sibling is skipped");
    }

    #[test]
    fn pump_input_dispatches_queued_events_in_order() {
        let source = InputSource::new();
        let mut t = UiTree::with_input_source((), source.clone());
        t.set_enabled(NodeId::ROOT, true).unwrap();

        let seen = log();
        let key_seen = seen.clone();
        let mouse_seen = seen.clone();
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_key_down(move |_, _, _| key_seen.borrow_mut().push("key"))
            .connect_mouse_down(move |_, _, _| mouse_seen.borrow_mut().push("mouse"));

        source.push(InputEvent::KeyDown(KeyEvent::new(1)));
        source.push(InputEvent::MouseDown(press_at(0.0, 0.0)));
        t.pump_input();
        assert_eq!(*seen.borrow(), vec!["key", "mouse"]);
        assert_eq!(source.pending(), 0);
    }

    #[test]
    fn events_while_disabled_are_dropped() {
        let source = InputSource::new();
        let mut t = UiTree::with_input_source((), source.clone());

        let seen = log();
        let key_seen = seen.clone();
        t.find_mut(NodeId::ROOT)
            .unwrap()
            .connect_key_down(move |_, _, _| key_seen.borrow_mut().push("key"));

        source.push(InputEvent::KeyDown(KeyEvent::new(1)));
        t.pump_input();
        assert!(seen.borrow().is_empty());

        // Enabling afterwards does not resurrect the dropped event.
        t.set_enabled(NodeId::ROOT, true).unwrap();
        t.pump_input();
        assert!(seen.borrow().is_empty());
    }
}
