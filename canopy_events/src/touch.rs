// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch event payload.

use alloc::vec::Vec;

use glam::Vec2;

/// A single touch point with its previous position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    id: u32,
    pos: Vec2,
    prev_pos: Vec2,
}

impl Touch {
    /// Create a touch point. `prev_pos` should equal `pos` for a fresh touch.
    pub fn new(id: u32, pos: Vec2, prev_pos: Vec2) -> Self {
        Self { id, pos, prev_pos }
    }

    /// Host-assigned touch identifier, stable for the touch's lifetime.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Current position in the root's coordinate space.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Position at the previous report.
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }
}

/// A batch of touch points routed through the tree in one event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    touches: Vec<Touch>,
    handled: bool,
}

impl TouchEvent {
    /// Create an event carrying the given touches.
    pub fn new(touches: Vec<Touch>) -> Self {
        Self {
            touches,
            handled: false,
        }
    }

    /// The touches carried by this event.
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    /// Whether a callback has consumed this event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the event consumed, halting further propagation.
    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}
