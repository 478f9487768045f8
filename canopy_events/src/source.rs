// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input source with scoped subscriptions.
//!
//! ## Usage
//!
//! 1) The host creates an [`InputSource`] and pushes [`InputEvent`]s into it
//!    from its native input callbacks.
//! 2) A consumer acquires an [`InputConnection`]; the subscription lasts until
//!    the connection is dropped.
//! 3) Once per frame the consumer drains pending events and dispatches them.
//!
//! Events pushed while no connection is live are dropped, and the pending
//! queue is cleared when the last connection goes away. A consumer that
//! subscribes late never observes input from before its subscription.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::keyboard::KeyEvent;
use crate::pointer::MouseEvent;
use crate::touch::TouchEvent;

/// A raw input event as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Key pressed.
    KeyDown(KeyEvent),
    /// Key released.
    KeyUp(KeyEvent),
    /// Mouse button pressed.
    MouseDown(MouseEvent),
    /// Mouse moved with a button held.
    MouseDrag(MouseEvent),
    /// Mouse moved with no button held.
    MouseMove(MouseEvent),
    /// Mouse button released.
    MouseUp(MouseEvent),
    /// Mouse wheel scrolled.
    MouseWheel(MouseEvent),
    /// New touches appeared.
    TouchesBegan(TouchEvent),
    /// Touches lifted.
    TouchesEnded(TouchEvent),
    /// Touches moved.
    TouchesMoved(TouchEvent),
    /// The host surface was resized.
    Resized,
}

#[derive(Debug, Default)]
struct Shared {
    queue: VecDeque<InputEvent>,
    connections: usize,
}

/// A host-owned input event source.
///
/// Cloning is cheap; all clones share one queue and connection count.
#[derive(Clone, Debug, Default)]
pub struct InputSource {
    shared: Rc<RefCell<Shared>>,
}

impl InputSource {
    /// Create an empty source with no live connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for delivery. Dropped if no connection is live.
    pub fn push(&self, event: InputEvent) {
        let mut shared = self.shared.borrow_mut();
        if shared.connections > 0 {
            shared.queue.push_back(event);
        }
    }

    /// Acquire a subscription to this source.
    pub fn connect(&self) -> InputConnection {
        self.shared.borrow_mut().connections += 1;
        InputConnection {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Whether at least one connection is live.
    pub fn is_connected(&self) -> bool {
        self.shared.borrow().connections > 0
    }

    /// Number of queued, undelivered events.
    pub fn pending(&self) -> usize {
        self.shared.borrow().queue.len()
    }
}

/// A live subscription to an [`InputSource`].
///
/// Dropping the connection ends the subscription; when the last connection
/// goes away the pending queue is cleared.
#[derive(Debug)]
pub struct InputConnection {
    shared: Rc<RefCell<Shared>>,
}

impl InputConnection {
    /// Take all pending events, in arrival order.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.shared.borrow_mut().queue.drain(..).collect()
    }
}

impl Drop for InputConnection {
    fn drop(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.connections -= 1;
        if shared.connections == 0 {
            shared.queue.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_without_connection_is_dropped() {
        let source = InputSource::new();
        source.push(InputEvent::Resized);
        assert_eq!(source.pending(), 0);
        assert!(!source.is_connected());
    }

    #[test]
    fn connected_events_arrive_in_order() {
        let source = InputSource::new();
        let connection = source.connect();
        source.push(InputEvent::KeyDown(KeyEvent::new(1)));
        source.push(InputEvent::KeyDown(KeyEvent::new(2)));
        let events = connection.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], InputEvent::KeyDown(KeyEvent::new(1)));
        assert_eq!(source.pending(), 0);
    }

    #[test]
    fn disconnect_clears_queue() {
        let source = InputSource::new();
        let connection = source.connect();
        source.push(InputEvent::Resized);
        assert_eq!(source.pending(), 1);
        drop(connection);
        assert_eq!(source.pending(), 0);
        // A fresh connection starts with an empty queue.
        let connection = source.connect();
        assert!(connection.drain().is_empty());
    }

    #[test]
    fn queue_survives_while_any_connection_lives() {
        let source = InputSource::new();
        let a = source.connect();
        let b = source.connect();
        source.push(InputEvent::Resized);
        drop(a);
        assert_eq!(source.pending(), 1);
        drop(b);
        assert_eq!(source.pending(), 0);
    }
}
