// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four animated channels of a tree node, composed into a model matrix.

use glam::{Mat4, Quat, Vec3};

use crate::channel::Channel;

/// Animated placement of one node: translate, rotate, scale, and
/// registration (the pivot subtracted from the translation before rotation
/// and scale apply).
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Position, in the parent's coordinate space.
    pub translate: Channel<Vec3>,
    /// Orientation.
    pub rotate: Channel<Quat>,
    /// Size. Doubles as the hit-test extents.
    pub scale: Channel<Vec3>,
    /// Pivot point subtracted from the translation.
    pub registration: Channel<Vec3>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Channel::new(Vec3::ZERO),
            rotate: Channel::new(Quat::IDENTITY),
            scale: Channel::new(Vec3::ONE),
            registration: Channel::new(Vec3::ZERO),
        }
    }
}

impl Transform {
    /// Advance all four channels by one tick.
    pub fn tick(&mut self) {
        self.registration.tick();
        self.rotate.tick();
        self.scale.tick();
        self.translate.tick();
    }

    /// The resolved origin: `translate - registration`.
    pub fn origin(&self) -> Vec3 {
        self.translate.current() - self.registration.current()
    }

    /// Compose the current channel values into a model matrix: translate to
    /// the origin, then rotate, then scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale.current(),
            self.rotate.current(),
            self.origin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.origin(), Vec3::ZERO);
        assert!(t.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn origin_subtracts_registration() {
        let mut t = Transform::default();
        t.translate.set_target(Vec3::new(10.0, 6.0, 0.0), 1.0);
        t.registration.set_target(Vec3::new(2.0, 1.0, 0.0), 1.0);
        assert_eq!(t.origin(), Vec3::new(8.0, 5.0, 0.0));
    }

    #[test]
    fn matrix_applies_scale_then_rotation_then_translation() {
        let mut t = Transform::default();
        t.translate.set_target(Vec3::new(5.0, 0.0, 0.0), 1.0);
        t.rotate.set_target(Quat::from_rotation_z(FRAC_PI_2), 1.0);
        t.scale.set_target(Vec3::new(2.0, 2.0, 2.0), 1.0);

        // A unit x point is scaled to 2, rotated onto +y, then translated.
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(5.0, 2.0, 0.0), 1e-5));
    }

    #[test]
    fn tick_advances_every_channel() {
        let mut t = Transform::default();
        t.translate.set_target(Vec3::new(4.0, 0.0, 0.0), 0.5);
        t.scale.set_target(Vec3::new(3.0, 3.0, 3.0), 0.5);
        t.tick();
        assert_eq!(t.translate.current(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t.scale.current(), Vec3::new(2.0, 2.0, 2.0));
    }
}
