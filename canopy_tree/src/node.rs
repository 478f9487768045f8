// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One element of the tree: payload, placement, flags, and callback slots.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;
use canopy_anim::Transform;
use canopy_events::{KeyEvent, MouseEvent, Touch, TouchEvent};
use glam::{Quat, Vec3};

use crate::id::NodeId;
use crate::shape::CollisionShape;
use crate::tree::UiTree;

bitflags! {
    /// Boolean node state.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct NodeFlags: u8 {
        /// Gates event routing into this node and its subtree.
        const ENABLED = 1 << 0;
        /// Rendering hint only; no geometric or routing effect.
        const VISIBLE = 1 << 1;
        /// Derived: the last routed pointer position hit this subtree.
        const MOUSE_OVER = 1 << 2;
    }
}

pub(crate) type NodeFn<T> = Box<dyn FnMut(&mut UiTree<T>, NodeId)>;
pub(crate) type KeyFn<T> = Box<dyn FnMut(&mut UiTree<T>, NodeId, &mut KeyEvent)>;
pub(crate) type MouseFn<T> = Box<dyn FnMut(&mut UiTree<T>, NodeId, &mut MouseEvent)>;
pub(crate) type TouchFn<T> = Box<dyn FnMut(&mut UiTree<T>, NodeId, &mut TouchEvent)>;
pub(crate) type TouchIdFn<T> = Box<dyn FnMut(&mut UiTree<T>, NodeId, u32)>;

/// Selector for the payload-free callback slots.
#[derive(Copy, Clone, Debug)]
pub(crate) enum NodeSlot {
    Enable,
    Disable,
    Show,
    Hide,
    Resize,
    Update,
    MouseOver,
    MouseOut,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum KeySlot {
    Down,
    Up,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum MouseSlot {
    Down,
    Drag,
    Move,
    Up,
    Wheel,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum TouchSlot {
    Began,
    Ended,
    Moved,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum TouchIdSlot {
    Over,
    Out,
}

/// Per-node callback storage: at most one callback per event kind.
///
/// The boxed callbacks erase their captures behind `'static` trait objects,
/// which is what forces the `T: 'static` bound on the whole tree.
pub(crate) struct Handlers<T: 'static> {
    enable: Option<NodeFn<T>>,
    disable: Option<NodeFn<T>>,
    show: Option<NodeFn<T>>,
    hide: Option<NodeFn<T>>,
    resize: Option<NodeFn<T>>,
    update: Option<NodeFn<T>>,
    mouse_over: Option<NodeFn<T>>,
    mouse_out: Option<NodeFn<T>>,
    key_down: Option<KeyFn<T>>,
    key_up: Option<KeyFn<T>>,
    mouse_down: Option<MouseFn<T>>,
    mouse_drag: Option<MouseFn<T>>,
    mouse_move: Option<MouseFn<T>>,
    mouse_up: Option<MouseFn<T>>,
    mouse_wheel: Option<MouseFn<T>>,
    touches_began: Option<TouchFn<T>>,
    touches_ended: Option<TouchFn<T>>,
    touches_moved: Option<TouchFn<T>>,
    touch_over: Option<TouchIdFn<T>>,
    touch_out: Option<TouchIdFn<T>>,
}

impl<T: 'static> Default for Handlers<T> {
    fn default() -> Self {
        Self {
            enable: None,
            disable: None,
            show: None,
            hide: None,
            resize: None,
            update: None,
            mouse_over: None,
            mouse_out: None,
            key_down: None,
            key_up: None,
            mouse_down: None,
            mouse_drag: None,
            mouse_move: None,
            mouse_up: None,
            mouse_wheel: None,
            touches_began: None,
            touches_ended: None,
            touches_moved: None,
            touch_over: None,
            touch_out: None,
        }
    }
}

impl<T: 'static> Handlers<T> {
    pub(crate) fn node_slot(&mut self, slot: NodeSlot) -> &mut Option<NodeFn<T>> {
        match slot {
            NodeSlot::Enable => &mut self.enable,
            NodeSlot::Disable => &mut self.disable,
            NodeSlot::Show => &mut self.show,
            NodeSlot::Hide => &mut self.hide,
            NodeSlot::Resize => &mut self.resize,
            NodeSlot::Update => &mut self.update,
            NodeSlot::MouseOver => &mut self.mouse_over,
            NodeSlot::MouseOut => &mut self.mouse_out,
        }
    }

    pub(crate) fn key_slot(&mut self, slot: KeySlot) -> &mut Option<KeyFn<T>> {
        match slot {
            KeySlot::Down => &mut self.key_down,
            KeySlot::Up => &mut self.key_up,
        }
    }

    pub(crate) fn mouse_slot(&mut self, slot: MouseSlot) -> &mut Option<MouseFn<T>> {
        match slot {
            MouseSlot::Down => &mut self.mouse_down,
            MouseSlot::Drag => &mut self.mouse_drag,
            MouseSlot::Move => &mut self.mouse_move,
            MouseSlot::Up => &mut self.mouse_up,
            MouseSlot::Wheel => &mut self.mouse_wheel,
        }
    }

    pub(crate) fn touch_slot(&mut self, slot: TouchSlot) -> &mut Option<TouchFn<T>> {
        match slot {
            TouchSlot::Began => &mut self.touches_began,
            TouchSlot::Ended => &mut self.touches_ended,
            TouchSlot::Moved => &mut self.touches_moved,
        }
    }

    pub(crate) fn touch_id_slot(&mut self, slot: TouchIdSlot) -> &mut Option<TouchIdFn<T>> {
        match slot {
            TouchIdSlot::Over => &mut self.touch_over,
            TouchIdSlot::Out => &mut self.touch_out,
        }
    }

    fn connected(&self) -> usize {
        let slots = [
            self.enable.is_some(),
            self.disable.is_some(),
            self.show.is_some(),
            self.hide.is_some(),
            self.resize.is_some(),
            self.update.is_some(),
            self.mouse_over.is_some(),
            self.mouse_out.is_some(),
            self.key_down.is_some(),
            self.key_up.is_some(),
            self.mouse_down.is_some(),
            self.mouse_drag.is_some(),
            self.mouse_move.is_some(),
            self.mouse_up.is_some(),
            self.mouse_wheel.is_some(),
            self.touches_began.is_some(),
            self.touches_ended.is_some(),
            self.touches_moved.is_some(),
            self.touch_over.is_some(),
            self.touch_out.is_some(),
        ];
        slots.iter().filter(|occupied| **occupied).count()
    }
}

impl<T: 'static> fmt::Debug for Handlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("connected", &self.connected())
            .finish_non_exhaustive()
    }
}

/// One node of a [`UiTree`]: client payload, animated placement, state flags,
/// collision shape, active touches, and callback slots.
///
/// Nodes are created and destroyed through the owning tree; this type exposes
/// the per-node state that needs no tree context. Enabling, visibility, and
/// structural changes go through [`UiTree`] so their transition callbacks and
/// subscriptions stay consistent.
pub struct Node<T: 'static> {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeSet<NodeId>,
    pub(crate) data: T,
    pub(crate) shape: CollisionShape,
    pub(crate) flags: NodeFlags,
    pub(crate) touches: Vec<Touch>,
    pub(crate) transform: Transform,
    pub(crate) handlers: Handlers<T>,
}

/// Structural equality over the observable node state. Callback slots hold
/// opaque closures and cannot be compared, so they are excluded.
impl<T: PartialEq + 'static> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.parent == other.parent
            && self.children == other.children
            && self.data == other.data
            && self.shape == other.shape
            && self.flags == other.flags
            && self.touches == other.touches
            && self.transform == other.transform
    }
}

macro_rules! slot_methods {
    ($(($connect:ident, $disconnect:ident, $field:ident $(, $arg:ty)*),)+) => {
        $(
            /// Register the callback for this event kind. Replaces any
            /// previously registered callback; the last connect wins.
            pub fn $connect(
                &mut self,
                callback: impl FnMut(&mut UiTree<T>, NodeId $(, $arg)*) + 'static,
            ) -> &mut Self {
                self.handlers.$field = Some(Box::new(callback));
                self
            }

            /// Clear the callback for this event kind.
            pub fn $disconnect(&mut self) -> &mut Self {
                self.handlers.$field = None;
                self
            }
        )+
    };
}

impl<T: 'static> Node<T> {
    pub(crate) fn new(id: NodeId, data: T) -> Self {
        Self {
            id,
            parent: None,
            children: BTreeSet::new(),
            data,
            shape: CollisionShape::default(),
            flags: NodeFlags::empty(),
            touches: Vec::new(),
            transform: Transform::default(),
            handlers: Handlers::default(),
        }
    }

    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The owning parent, absent for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in ascending order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().copied()
    }

    /// The client payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access to the client payload.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replace the client payload.
    pub fn set_data(&mut self, data: T) -> &mut Self {
        self.data = data;
        self
    }

    /// The collision geometry used when hit-testing this node.
    pub fn shape(&self) -> CollisionShape {
        self.shape
    }

    /// Set the collision geometry.
    pub fn set_shape(&mut self, shape: CollisionShape) -> &mut Self {
        self.shape = shape;
        self
    }

    /// Whether events route into this node and its subtree.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(NodeFlags::ENABLED)
    }

    /// Whether the renderer should draw this node. Rendering hint only.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    /// Whether the last routed pointer position hit this node's subtree.
    pub fn is_mouse_over(&self) -> bool {
        self.flags.contains(NodeFlags::MOUSE_OVER)
    }

    /// Touches currently over this node.
    pub fn active_touches(&self) -> &[Touch] {
        &self.touches
    }

    /// The animated placement channels.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the animated placement channels.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Current position in the parent's coordinate space.
    pub fn translate(&self) -> Vec3 {
        self.transform.translate.current()
    }

    /// Current orientation.
    pub fn rotation(&self) -> Quat {
        self.transform.rotate.current()
    }

    /// Current size / hit-test extents.
    pub fn scale(&self) -> Vec3 {
        self.transform.scale.current()
    }

    /// Current pivot point.
    pub fn registration(&self) -> Vec3 {
        self.transform.registration.current()
    }

    /// Animate the position toward `value` at the per-tick blend `speed`.
    pub fn set_translate(&mut self, value: Vec3, speed: f32) -> &mut Self {
        self.transform.translate.set_target(value, speed);
        self
    }

    /// Give the position a decaying per-tick velocity.
    pub fn set_translate_velocity(&mut self, velocity: Vec3, decay: f32) -> &mut Self {
        self.transform.translate.set_velocity(velocity, decay);
        self
    }

    /// Animate the orientation toward `value` at the per-tick blend `speed`.
    pub fn set_rotation(&mut self, value: Quat, speed: f32) -> &mut Self {
        self.transform.rotate.set_target(value, speed);
        self
    }

    /// Give the orientation a decaying per-tick velocity. The velocity
    /// quaternion is accumulated by value, not composed.
    pub fn set_rotation_velocity(&mut self, velocity: Quat, decay: f32) -> &mut Self {
        self.transform.rotate.set_velocity(velocity, decay);
        self
    }

    /// Animate the size toward `value` at the per-tick blend `speed`.
    pub fn set_scale(&mut self, value: Vec3, speed: f32) -> &mut Self {
        self.transform.scale.set_target(value, speed);
        self
    }

    /// Give the size a decaying per-tick velocity.
    pub fn set_scale_velocity(&mut self, velocity: Vec3, decay: f32) -> &mut Self {
        self.transform.scale.set_velocity(velocity, decay);
        self
    }

    /// Animate the pivot toward `value` at the per-tick blend `speed`.
    pub fn set_registration(&mut self, value: Vec3, speed: f32) -> &mut Self {
        self.transform.registration.set_target(value, speed);
        self
    }

    /// Give the pivot a decaying per-tick velocity.
    pub fn set_registration_velocity(&mut self, velocity: Vec3, decay: f32) -> &mut Self {
        self.transform.registration.set_velocity(velocity, decay);
        self
    }

    pub(crate) fn add_touch(&mut self, touch: Touch) -> bool {
        if self.touches.iter().any(|t| t.id() == touch.id()) {
            return false;
        }
        self.touches.push(touch);
        true
    }

    pub(crate) fn remove_touch(&mut self, id: u32) -> bool {
        let before = self.touches.len();
        self.touches.retain(|t| t.id() != id);
        self.touches.len() != before
    }

    slot_methods! {
        (connect_enable, disconnect_enable, enable),
        (connect_disable, disconnect_disable, disable),
        (connect_show, disconnect_show, show),
        (connect_hide, disconnect_hide, hide),
        (connect_resize, disconnect_resize, resize),
        (connect_update, disconnect_update, update),
        (connect_mouse_over, disconnect_mouse_over, mouse_over),
        (connect_mouse_out, disconnect_mouse_out, mouse_out),
        (connect_key_down, disconnect_key_down, key_down, &mut KeyEvent),
        (connect_key_up, disconnect_key_up, key_up, &mut KeyEvent),
        (connect_mouse_down, disconnect_mouse_down, mouse_down, &mut MouseEvent),
        (connect_mouse_drag, disconnect_mouse_drag, mouse_drag, &mut MouseEvent),
        (connect_mouse_move, disconnect_mouse_move, mouse_move, &mut MouseEvent),
        (connect_mouse_up, disconnect_mouse_up, mouse_up, &mut MouseEvent),
        (connect_mouse_wheel, disconnect_mouse_wheel, mouse_wheel, &mut MouseEvent),
        (connect_touches_began, disconnect_touches_began, touches_began, &mut TouchEvent),
        (connect_touches_ended, disconnect_touches_ended, touches_ended, &mut TouchEvent),
        (connect_touches_moved, disconnect_touches_moved, touches_moved, &mut TouchEvent),
        (connect_touch_over, disconnect_touch_over, touch_over, u32),
        (connect_touch_out, disconnect_touch_out, touch_out, u32),
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("data", &self.data)
            .field("shape", &self.shape)
            .field("flags", &self.flags)
            .field("transform", &self.transform)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
