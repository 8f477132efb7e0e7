//! Cubic Bézier evaluation in the Bernstein basis.
//!
//! Both evaluators accept any `t`; values outside `[0, 1]` extrapolate the
//! polynomial and choosing the range is up to the caller.

use crate::vector::Vec2;

/// Parameters closer than this to 1 are snapped onto it when sampling.
const END_SNAP: f32 = 1e-4;

/// Smallest sampling step; caps a sweep at 10 001 samples.
pub const MIN_SAMPLE_STEP: f32 = 1e-4;

/// Position on the curve at `t`: `u³·p0 + 3u²t·p1 + 3ut²·p2 + t³·p3` with `u = 1 − t`.
pub fn evaluate_position(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// First derivative with respect to `t`. Not normalized.
pub fn evaluate_tangent(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

/// Parameters `0, step, 2·step, …` up to and including 1.
///
/// The last sample snaps to exactly 1.0 when it lands within [`END_SNAP`]
/// of it. A step that does not divide 1 stops at the last multiple below 1.
/// Steps below [`MIN_SAMPLE_STEP`] (and NaN) are raised to it, so one sweep
/// never exceeds a fixed number of samples.
pub fn sample_params(step: f32) -> impl Iterator<Item = f32> {
    let step = step.max(MIN_SAMPLE_STEP);
    let count = ((1.0 / step) + END_SNAP).floor() as usize;
    (0..=count).map(move |i| {
        let t = i as f32 * step;
        if (1.0 - t).abs() < END_SNAP { 1.0 } else { t }
    })
}

/// The four control points of one curve, P0 through P3.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn position(&self, t: f32) -> Vec2 {
        evaluate_position(t, self.p0, self.p1, self.p2, self.p3)
    }

    pub fn tangent(&self, t: f32) -> Vec2 {
        evaluate_tangent(t, self.p0, self.p1, self.p2, self.p3)
    }

    /// Polyline approximation sampled every `step`, from P0 to P3 inclusive.
    pub fn polyline(&self, step: f32) -> Vec<Vec2> {
        sample_params(step).map(|t| self.position(t)).collect()
    }

    /// Start and end of a fixed-length tangent indicator at every `step`.
    pub fn tangent_markers(&self, step: f32, length: f32) -> Vec<(Vec2, Vec2)> {
        sample_params(step)
            .map(|t| {
                let origin = self.position(t);
                let offset = self.tangent(t).normalize() * length;
                (origin, origin + offset)
            })
            .collect()
    }
}
