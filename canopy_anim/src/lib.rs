// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Anim: per-channel animation state machines for a retained-mode UI tree.
//!
//! ## Overview
//!
//! A [`Channel`](crate::channel::Channel) carries one animated value with
//! *current*, *target*, *velocity*, *velocity decay*, and *speed* state, and
//! advances by exactly one step per [`tick`](crate::channel::Channel::tick).
//! Two mutually exclusive driving modes exist; engaging one cancels the other:
//!
//! - **Target mode**: `current` blends toward a fixed `target` by `speed`
//!   (a per-tick blend factor in `0..=1`, not a physical rate; `1.0` snaps
//!   immediately).
//! - **Velocity mode**: `target` drifts by a `velocity` that is attenuated
//!   multiplicatively by `decay` each tick, while `current` tracks it exactly.
//!   Once the velocity magnitude falls below `0.01` the decay is forced to
//!   zero and the residual velocity freezes.
//!
//! [`Transform`](crate::transform::Transform) bundles the four channels a tree
//! node animates — translate, rotate, scale, and registration (pivot) — and
//! composes them into a model matrix.
//!
//! ```
//! use canopy_anim::Channel;
//! use glam::Vec3;
//!
//! let mut x = Channel::new(Vec3::ZERO);
//! x.set_target(Vec3::new(10.0, 0.0, 0.0), 0.5);
//! x.tick();
//! assert_eq!(x.current().x, 5.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod channel;
pub mod transform;
pub mod value;

pub use channel::{Channel, VELOCITY_EPSILON};
pub use transform::Transform;
pub use value::Animatable;
