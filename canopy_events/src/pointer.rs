// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse event payload.

use glam::Vec2;

/// The mouse button that initiated an event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Middle button or wheel click.
    Middle,
    /// Secondary button.
    Right,
}

/// A mouse event routed through the tree.
///
/// The position is in the root's coordinate space. Setting `handled` halts
/// further propagation at the level where it is observed.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    pos: Vec2,
    button: MouseButton,
    wheel_increment: f32,
    handled: bool,
}

impl MouseEvent {
    /// Create a button event at `pos`.
    pub fn new(pos: Vec2, button: MouseButton) -> Self {
        Self {
            pos,
            button,
            wheel_increment: 0.0,
            handled: false,
        }
    }

    /// Create a wheel event at `pos` with a signed scroll increment.
    pub fn with_wheel(pos: Vec2, increment: f32) -> Self {
        Self {
            pos,
            button: MouseButton::Left,
            wheel_increment: increment,
            handled: false,
        }
    }

    /// Position in the root's coordinate space.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// The button that initiated the event.
    pub fn button(&self) -> MouseButton {
        self.button
    }

    /// Signed wheel increment; zero for non-wheel events.
    pub fn wheel_increment(&self) -> f32 {
        self.wheel_increment
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unhandled() {
        let ev = MouseEvent::new(Vec2::new(4.0, 2.0), MouseButton::Left);
        assert!(!ev.is_handled());
        assert_eq!(ev.wheel_increment(), 0.0);
    }

    #[test]
    fn handled_round_trip() {
        let mut ev = MouseEvent::with_wheel(Vec2::ZERO, -1.5);
        ev.set_handled(true);
        assert!(ev.is_handled());
        ev.set_handled(false);
        assert!(!ev.is_handled());
        assert_eq!(ev.wheel_increment(), -1.5);
    }
}
