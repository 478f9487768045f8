// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-object event handling.
//!
//! Individual callback slots suit one-off closures; a widget-like component
//! that cares about several event kinds implements [`EventHandler`] once and
//! is wired to a node in a single call. Every method has a no-op default, so
//! implementors override only what they need.

use alloc::rc::Rc;
use core::cell::RefCell;

use canopy_events::{KeyEvent, MouseEvent, TouchEvent};

use crate::error::TreeError;
use crate::id::NodeId;
use crate::tree::UiTree;

/// A bundle of event reactions for one node.
///
/// All methods default to doing nothing. The handler is shared with the tree
/// behind `Rc<RefCell<_>>`, so the caller keeps its own handle and may inspect
/// or mutate the handler between events.
#[allow(unused_variables, reason = "default implementations ignore their arguments")]
pub trait EventHandler<T: 'static> {
    /// The node was enabled.
    fn enabled(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The node was disabled.
    fn disabled(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The node was shown.
    fn shown(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The node was hidden.
    fn hidden(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The host surface was resized.
    fn resized(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The frame tick reached this node.
    fn updated(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The pointer entered this node's subtree.
    fn mouse_over(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// The pointer left this node's subtree.
    fn mouse_out(&mut self, tree: &mut UiTree<T>, id: NodeId) {}
    /// A key was pressed.
    fn key_down(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut KeyEvent) {}
    /// A key was released.
    fn key_up(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut KeyEvent) {}
    /// A mouse button was pressed.
    fn mouse_down(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut MouseEvent) {}
    /// The mouse moved with a button held.
    fn mouse_drag(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut MouseEvent) {}
    /// The mouse moved with no button held.
    fn mouse_move(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut MouseEvent) {}
    /// A mouse button was released.
    fn mouse_up(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut MouseEvent) {}
    /// The wheel scrolled.
    fn mouse_wheel(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut MouseEvent) {}
    /// New touches appeared.
    fn touches_began(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut TouchEvent) {}
    /// Touches lifted.
    fn touches_ended(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut TouchEvent) {}
    /// Touches moved.
    fn touches_moved(&mut self, tree: &mut UiTree<T>, id: NodeId, event: &mut TouchEvent) {}
    /// A touch entered this node's subtree.
    fn touch_over(&mut self, tree: &mut UiTree<T>, id: NodeId, touch: u32) {}
    /// A touch left this node's subtree.
    fn touch_out(&mut self, tree: &mut UiTree<T>, id: NodeId, touch: u32) {}
}

impl<T: 'static> UiTree<T> {
    /// Wire every callback slot of `id` to the corresponding [`EventHandler`]
    /// method.
    ///
    /// Replaces any previously connected callbacks on the node. The handler
    /// stays alive as long as any of the node's slots hold it.
    pub fn connect_handler<H>(
        &mut self,
        id: NodeId,
        handler: Rc<RefCell<H>>,
    ) -> Result<(), TreeError>
    where
        H: EventHandler<T> + 'static,
    {
        let node = self.find_mut(id)?;

        let h = handler.clone();
        node.connect_enable(move |tree, id| h.borrow_mut().enabled(tree, id));
        let h = handler.clone();
        node.connect_disable(move |tree, id| h.borrow_mut().disabled(tree, id));
        let h = handler.clone();
        node.connect_show(move |tree, id| h.borrow_mut().shown(tree, id));
        let h = handler.clone();
        node.connect_hide(move |tree, id| h.borrow_mut().hidden(tree, id));
        let h = handler.clone();
        node.connect_resize(move |tree, id| h.borrow_mut().resized(tree, id));
        let h = handler.clone();
        node.connect_update(move |tree, id| h.borrow_mut().updated(tree, id));
        let h = handler.clone();
        node.connect_mouse_over(move |tree, id| h.borrow_mut().mouse_over(tree, id));
        let h = handler.clone();
        node.connect_mouse_out(move |tree, id| h.borrow_mut().mouse_out(tree, id));
        let h = handler.clone();
        node.connect_key_down(move |tree, id, ev| h.borrow_mut().key_down(tree, id, ev));
        let h = handler.clone();
        node.connect_key_up(move |tree, id, ev| h.borrow_mut().key_up(tree, id, ev));
        let h = handler.clone();
        node.connect_mouse_down(move |tree, id, ev| h.borrow_mut().mouse_down(tree, id, ev));
        let h = handler.clone();
        node.connect_mouse_drag(move |tree, id, ev| h.borrow_mut().mouse_drag(tree, id, ev));
        let h = handler.clone();
        node.connect_mouse_move(move |tree, id, ev| h.borrow_mut().mouse_move(tree, id, ev));
        let h = handler.clone();
        node.connect_mouse_up(move |tree, id, ev| h.borrow_mut().mouse_up(tree, id, ev));
        let h = handler.clone();
        node.connect_mouse_wheel(move |tree, id, ev| h.borrow_mut().mouse_wheel(tree, id, ev));
        let h = handler.clone();
        node.connect_touches_began(move |tree, id, ev| h.borrow_mut().touches_began(tree, id, ev));
        let h = handler.clone();
        node.connect_touches_ended(move |tree, id, ev| h.borrow_mut().touches_ended(tree, id, ev));
        let h = handler.clone();
        node.connect_touches_moved(move |tree, id, ev| h.borrow_mut().touches_moved(tree, id, ev));
        let h = handler.clone();
        node.connect_touch_over(move |tree, id, touch| h.borrow_mut().touch_over(tree, id, touch));
        node.connect_touch_out(move |tree, id, touch| {
            handler.borrow_mut().touch_out(tree, id, touch);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    use canopy_events::MouseButton;

    #[derive(Default)]
    struct Button {
        presses: usize,
        hovered: bool,
    }

    impl EventHandler<()> for Button {
        fn mouse_down(&mut self, _tree: &mut UiTree<()>, _id: NodeId, event: &mut MouseEvent) {
            self.presses += 1;
            event.set_handled(true);
        }

        fn mouse_over(&mut self, _tree: &mut UiTree<()>, _id: NodeId) {
            self.hovered = true;
        }

        fn mouse_out(&mut self, _tree: &mut UiTree<()>, _id: NodeId) {
            self.hovered = false;
        }
    }

    #[test]
    fn handler_receives_the_events_it_overrides() {
        let mut t = UiTree::new(());
        t.set_enabled(NodeId::ROOT, true).unwrap();
        let a = t.create_child(NodeId::ROOT, ()).unwrap();
        t.set_enabled(a, true).unwrap();
        t.find_mut(a)
            .unwrap()
            .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0);

        let button = Rc::new(RefCell::new(Button::default()));
        t.connect_handler(a, button.clone()).unwrap();

        let mut press = MouseEvent::new(Vec2::new(5.0, 5.0), MouseButton::Left);
        t.mouse_down(&mut press);
        assert!(press.is_handled());
        assert_eq!(button.borrow().presses, 1);

        let mut sweep = MouseEvent::new(Vec2::new(5.0, 5.0), MouseButton::Left);
        t.mouse_move(&mut sweep);
        assert!(button.borrow().hovered);

        let mut away = MouseEvent::new(Vec2::new(90.0, 90.0), MouseButton::Left);
        t.mouse_move(&mut away);
        assert!(!button.borrow().hovered);
    }

    #[test]
    fn connect_handler_requires_an_existing_node() {
        let mut t: UiTree<()> = UiTree::new(());
        let ghost = NodeId::new(42);
        let button = Rc::new(RefCell::new(Button::default()));
        assert_eq!(
            t.connect_handler(ghost, button),
            Err(TreeError::IdNotFound(ghost))
        );
    }
}
