// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One animated value with target and momentum driving modes.

use crate::value::Animatable;

/// Velocity magnitudes below this freeze the momentum state.
pub const VELOCITY_EPSILON: f32 = 0.01;

/// Interpolation state for one animated value.
///
/// See the crate docs for the two driving modes. `speed` is a per-tick blend
/// factor: `current = blend(current, target, speed)` every tick, so `1.0`
/// tracks the target exactly and values in `(0, 1)` ease toward it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Channel<V> {
    current: V,
    target: V,
    velocity: V,
    speed: f32,
    decay: f32,
}

impl<V: Animatable> Channel<V> {
    /// Create a settled channel at `initial`.
    pub fn new(initial: V) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: V::ZERO,
            speed: 1.0,
            decay: 0.0,
        }
    }

    /// Engage target mode: blend toward `value` by `speed` each tick.
    ///
    /// Cancels any momentum. A `speed >= 1.0` snaps `current` immediately.
    pub fn set_target(&mut self, value: V, speed: f32) {
        self.speed = speed;
        self.target = value;
        self.velocity = V::ZERO;
        self.decay = 0.0;
        if speed >= 1.0 {
            self.current = value;
        }
    }

    /// Engage velocity mode: drift the target by `velocity` each tick,
    /// attenuating the velocity by `decay` multiplicatively.
    ///
    /// Forces `speed` to `1.0` and re-anchors the target at `current`, so
    /// `current` tracks the drifting target exactly.
    pub fn set_velocity(&mut self, velocity: V, decay: f32) {
        self.speed = 1.0;
        self.target = self.current;
        self.velocity = velocity;
        self.decay = decay;
    }

    /// Jump `current` without touching the target or momentum state.
    pub fn set_current(&mut self, value: V) {
        self.current = value;
    }

    /// Advance the channel by one tick.
    ///
    /// A velocity magnitude below [`VELOCITY_EPSILON`] forces the decay to
    /// zero and freezes the residual velocity; otherwise the target drifts by
    /// the velocity and the velocity is attenuated. `current` then blends
    /// toward the target by `speed`.
    pub fn tick(&mut self) {
        let magnitude = self.velocity.magnitude();
        if magnitude < VELOCITY_EPSILON {
            self.decay = 0.0;
        } else {
            self.target = self.target.add(self.velocity);
            self.velocity = self.velocity.scale(self.decay);
        }
        self.current = V::blend(self.current, self.target, self.speed);
    }

    /// The interpolated value.
    pub fn current(&self) -> V {
        self.current
    }

    /// The value the channel is moving toward.
    pub fn target(&self) -> V {
        self.target
    }

    /// The per-tick target increment in velocity mode.
    pub fn velocity(&self) -> V {
        self.velocity
    }

    /// The per-tick blend factor.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The multiplicative per-tick velocity attenuation.
    pub fn decay(&self) -> f32 {
        self.decay
    }
}
