// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Events: input payloads and host input plumbing for a retained-mode UI tree.
//!
//! ## Overview
//!
//! This crate defines the event payloads routed through a Canopy tree — mouse,
//! keyboard, and multi-touch, each carrying a `handled` flag that is the only
//! cancellation primitive — and the [`InputSource`](crate::source::InputSource)
//! handle through which a host application feeds raw input to a tree root.
//!
//! ## Subscription model
//!
//! The host owns an [`InputSource`](crate::source::InputSource) and pushes
//! [`InputEvent`](crate::source::InputEvent)s into it. A consumer (typically a
//! tree root) acquires an [`InputConnection`](crate::source::InputConnection)
//! and drains pending events while the connection is live. Events pushed while
//! no connection exists are dropped, so a disabled root never sees stale input.
//!
//! ```
//! use canopy_events::{InputEvent, InputSource, KeyEvent};
//!
//! let source = InputSource::new();
//! source.push(InputEvent::KeyDown(KeyEvent::new(13))); // dropped: no connection
//!
//! let connection = source.connect();
//! source.push(InputEvent::KeyDown(KeyEvent::new(27)));
//! assert_eq!(connection.drain().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod keyboard;
pub mod pointer;
pub mod source;
pub mod touch;

pub use keyboard::KeyEvent;
pub use pointer::{MouseButton, MouseEvent};
pub use source::{InputConnection, InputEvent, InputSource};
pub use touch::{Touch, TouchEvent};
