// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard event payload.

/// A key press or release routed through the tree.
///
/// The key code is host-defined; the tree never interprets it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    code: u32,
    handled: bool,
}

impl KeyEvent {
    /// Create an event for the given host key code.
    pub fn new(code: u32) -> Self {
        Self {
            code,
            handled: false,
        }
    }

    /// Host-defined key code.
    pub fn code(&self) -> u32 {
        self.code
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
    fn code_and_handled() {
        let mut ev = KeyEvent::new(27);
        assert_eq!(ev.code(), 27);
        assert!(!ev.is_handled());
        ev.set_handled(true);
        assert!(ev.is_handled());
    }
}
