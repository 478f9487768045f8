// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision geometry for hierarchical hit testing.

use glam::Vec3;

/// The geometric test used when hit-testing a node.
///
/// A node's placement is resolved as `origin = translate - registration` with
/// the scale supplying the extents. `Rect` is corner-anchored at the origin
/// while `Cube` is centered on it; the circle and sphere radii are the
/// minimum of the relevant scale axes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CollisionShape {
    /// 2D disc centered on the origin, radius `min(scale.x, scale.y)`.
    Circle,
    /// Axis-aligned box centered on the origin with extents `scale`.
    Cube,
    /// Axis-aligned rectangle from the origin to `origin + scale.xy`.
    #[default]
    Rect,
    /// Ball centered on the origin, radius `min(scale.x, scale.y, scale.z)`.
    Sphere,
}

impl CollisionShape {
    /// Test `point` against a node placed at `origin` with the given `scale`.
    pub fn hit(self, origin: Vec3, scale: Vec3, point: Vec3) -> bool {
        match self {
            Self::Circle => {
                origin.truncate().distance(point.truncate()) < scale.x.min(scale.y)
            }
            Self::Cube => {
                let half = scale * 0.5;
                let min = origin - half;
                let max = origin + half;
                point.x >= min.x
                    && point.x <= max.x
                    && point.y >= min.y
                    && point.y <= max.y
                    && point.z >= min.z
                    && point.z <= max.z
            }
            Self::Rect => {
                point.x >= origin.x
                    && point.x <= origin.x + scale.x
                    && point.y >= origin.y
                    && point.y <= origin.y + scale.y
            }
            Self::Sphere => origin.distance(point) < scale.x.min(scale.y).min(scale.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_corner_anchored() {
        let scale = Vec3::new(10.0, 10.0, 0.0);
        assert!(CollisionShape::Rect.hit(Vec3::ZERO, scale, Vec3::new(5.0, 5.0, 0.0)));
        assert!(!CollisionShape::Rect.hit(Vec3::ZERO, scale, Vec3::new(11.0, 5.0, 0.0)));
        // Bounds are inclusive.
        assert!(CollisionShape::Rect.hit(Vec3::ZERO, scale, Vec3::new(10.0, 10.0, 0.0)));
    }

    #[test]
    fn circle_uses_min_scale_axis_as_radius() {
        let scale = Vec3::new(5.0, 5.0, 0.0);
        // Distance ~4.24 from the origin: inside a radius-5 disc.
        assert!(CollisionShape::Circle.hit(Vec3::ZERO, scale, Vec3::new(3.0, 3.0, 0.0)));
        // Distance ~5.66: outside.
        assert!(!CollisionShape::Circle.hit(Vec3::ZERO, scale, Vec3::new(4.0, 4.0, 0.0)));
        // Radius is the smaller axis.
        let lopsided = Vec3::new(2.0, 100.0, 0.0);
        assert!(!CollisionShape::Circle.hit(Vec3::ZERO, lopsided, Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn cube_is_centered() {
        let scale = Vec3::splat(10.0);
        assert!(CollisionShape::Cube.hit(Vec3::ZERO, scale, Vec3::new(-4.0, 4.0, 4.0)));
        assert!(!CollisionShape::Cube.hit(Vec3::ZERO, scale, Vec3::new(-6.0, 0.0, 0.0)));
    }

    #[test]
    fn sphere_uses_min_of_three_axes() {
        let scale = Vec3::new(5.0, 5.0, 1.0);
        // Radius is 1, not 5.
        assert!(!CollisionShape::Sphere.hit(Vec3::ZERO, scale, Vec3::new(2.0, 0.0, 0.0)));
        assert!(CollisionShape::Sphere.hit(Vec3::ZERO, scale, Vec3::new(0.5, 0.0, 0.0)));
    }
}
