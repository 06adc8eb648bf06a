// Frame-rate independent smoothing helpers.
//
// All of these use single-pole exponential decay: the same fraction of the
// remaining distance is closed per unit of time, so varying frame deltas
// produce the same trajectory.

use nalgebra_glm as glm;

/// Exponentially approach `target` from `current`.
/// A non-positive speed disables smoothing and returns the target directly.
pub fn interp_to(current: f32, target: f32, delta_time: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-speed * delta_time).exp();
    current + (target - current) * alpha
}

/// Component-wise exponential approach for vectors.
pub fn interp_vec3_to(
    current: glm::Vec3,
    target: glm::Vec3,
    delta_time: f32,
    speed: f32,
) -> glm::Vec3 {
    if speed <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-speed * delta_time).exp();
    current + (target - current) * alpha
}

/// Wrap an angle in degrees into the [-180, 180) range.
pub fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Exponentially approach a target angle along the shortest arc, in degrees.
pub fn interp_angle_to(current: f32, target: f32, delta_time: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    let delta = normalize_angle(target - current);
    let alpha = 1.0 - (-speed * delta_time).exp();
    normalize_angle(current + delta * alpha)
}
