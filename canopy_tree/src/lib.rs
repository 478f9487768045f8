// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: a generic retained-mode UI tree with event routing,
//! hierarchical hit testing, and animated placement.
//!
//! ## Overview
//!
//! A [`UiTree`] owns a set of [`Node`]s in an arena keyed by stable
//! [`NodeId`]s, with the root fixed at id `0`. Each node carries a client
//! payload `T`, four animated placement channels (translate, rotate, scale,
//! registration), a [`CollisionShape`] for hit testing, enabled/visible
//! flags, and one optional callback per event kind.
//!
//! Events enter at the root and walk the tree depth-first, children in
//! ascending-id order, skipping disabled subtrees. Callbacks receive the
//! whole tree mutably and may restructure it mid-dispatch; marking an event
//! handled stops propagation. A component that reacts to several event kinds
//! implements [`EventHandler`] and is wired up with
//! [`UiTree::connect_handler`].
//!
//! Host input arrives through a [`canopy_events::InputSource`]: the root
//! subscribes while enabled and [`UiTree::pump_input`] dispatches whatever
//! queued since the previous frame.
//!
//! ```
//! use canopy_tree::{CollisionShape, NodeId, UiTree};
//! use glam::{Vec2, Vec3};
//!
//! let mut tree: UiTree<&str> = UiTree::new("root");
//! let panel = tree.create_child(NodeId::ROOT, "panel")?;
//! tree.find_mut(panel)?
//!     .set_translate(Vec3::new(20.0, 20.0, 0.0), 1.0)
//!     .set_scale(Vec3::new(10.0, 10.0, 0.0), 1.0)
//!     .connect_mouse_down(|_, _, event| event.set_handled(true));
//!
//! assert_eq!(
//!     tree.contains(Vec3::new(25.0, 25.0, 0.0), CollisionShape::Rect),
//!     Some(panel),
//! );
//! # Ok::<(), canopy_tree::TreeError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dispatch;

pub mod error;
pub mod handler;
pub mod id;
pub mod node;
pub mod shape;
pub mod tree;

pub use error::TreeError;
pub use handler::EventHandler;
pub use id::NodeId;
pub use node::Node;
pub use shape::CollisionShape;
pub use tree::UiTree;
