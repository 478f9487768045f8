// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value abstraction for animated channels.

use glam::{Quat, Vec3};

/// A value a [`Channel`](crate::channel::Channel) can animate.
///
/// The trait captures the minimal operations the channel state machine needs:
/// a zero element, a magnitude for the velocity-freeze test, addition and
/// scalar attenuation for momentum, and an interpolating blend.
pub trait Animatable: Copy {
    /// The additive identity (zero velocity).
    const ZERO: Self;

    /// Euclidean magnitude of the value.
    fn magnitude(self) -> f32;

    /// Component-wise sum.
    fn add(self, other: Self) -> Self;

    /// Component-wise scaling by `factor`.
    fn scale(self, factor: f32) -> Self;

    /// Interpolate from `a` toward `b` by `t`.
    fn blend(a: Self, b: Self, t: f32) -> Self;
}

impl Animatable for Vec3 {
    const ZERO: Self = Self::ZERO;

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    #[inline]
    fn blend(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

/// Quaternion rotation: blends by spherical interpolation, while velocity is
/// accumulated by plain component addition (not composition), matching the
/// momentum semantics of the vector channels.
impl Animatable for Quat {
    const ZERO: Self = Self::from_xyzw(0.0, 0.0, 0.0, 0.0);

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    #[inline]
    fn blend(a: Self, b: Self, t: f32) -> Self {
        a.slerp(b, t)
    }
}
