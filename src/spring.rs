//! Damped spring pulling a control point toward its target.
//!
//! One call to [`spring_step`] is one frame. There is no timestep term, so
//! the motion is tied to the frame rate.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::vector::Vec2;

/// Fraction of the displacement added to the velocity each step.
pub const SPRING_K: f32 = 0.06;
/// Fraction of the velocity kept after the force is applied.
pub const DAMPING: f32 = 0.88;

/// Stiffness `k` and damping `d` of the spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    /// Rejects constants for which the recurrence does not settle.
    ///
    /// Requires `0 < stiffness < 1` and `0 <= damping < 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stiffness_ok = self.stiffness.is_finite() && self.stiffness > 0.0 && self.stiffness < 1.0;
        let damping_ok = self.damping.is_finite() && self.damping >= 0.0 && self.damping < 1.0;
        if stiffness_ok && damping_ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidSpring {
                stiffness: self.stiffness,
                damping: self.damping,
            })
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_K,
            damping: DAMPING,
        }
    }
}

/// Position and velocity after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Advances one step:
///
/// ```text
/// force     = (target - position) * k
/// velocity' = (velocity + force) * d
/// position' = position + velocity'
/// ```
pub fn spring_step(position: Vec2, velocity: Vec2, target: Vec2, params: &SpringParams) -> SpringStep {
    let force = (target - position) * params.stiffness;
    let velocity = (velocity + force) * params.damping;
    SpringStep {
        position: position + velocity,
        velocity,
    }
}

/// A dynamic control point: where it is, how fast it moves, and where it is headed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl SpringPoint {
    /// Motionless point whose target is its own position.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
        }
    }

    /// Replaces the target. Position and velocity are untouched until the next step.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advances one frame with [`spring_step`].
    ///
    /// # Arguments
    ///
    /// * `params` - Stiffness and damping to step with
    pub fn step(&mut self, params: &SpringParams) {
        let next = spring_step(self.position, self.velocity, self.target, params);
        self.position = next.position;
        self.velocity = next.velocity;
    }

    /// Whether both the distance to the target and the speed are within `tolerance`.
    pub fn is_settled(&self, tolerance: f32) -> bool {
        (self.target - self.position).length() <= tolerance && self.velocity.length() <= tolerance
    }
}
