//! Frame-rate independent smoothing helpers.

use glam::Vec3;

/// Values closer than this to their target snap onto it.
pub const SNAP_EPSILON: f32 = 0.001;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Critically damped spring toward `target`, reaching it in roughly
/// `smooth_time` seconds. `velocity` persists between calls.
///
/// Uses the cubic approximation of `exp(-omega * dt)` and never overshoots
/// the target.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if (current - target).abs() <= SNAP_EPSILON {
        *velocity = 0.0;
        return target;
    }
    if dt <= 0.0 || !dt.is_finite() {
        return current;
    }
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Per-axis [`smooth_damp`] for a point, carrying its own velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DampedVec3 {
    pub velocity: Vec3,
}

impl DampedVec3 {
    pub fn step(&mut self, current: Vec3, target: Vec3, smooth_time: f32, dt: f32) -> Vec3 {
        Vec3::new(
            smooth_damp(current.x, target.x, &mut self.velocity.x, smooth_time, dt),
            smooth_damp(current.y, target.y, &mut self.velocity.y, smooth_time, dt),
            smooth_damp(current.z, target.z, &mut self.velocity.z, smooth_time, dt),
        )
    }

    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }
}

/// One step of a clamped first-order low-pass: `current + (target - current) * min(1, dt * rate)`.
#[inline]
pub fn low_pass_step(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    let alpha = (dt.max(0.0) * rate.max(0.0)).min(1.0);
    if !alpha.is_finite() {
        return current;
    }
    current + (target - current) * alpha
}
