//! Ballistic preview under constant acceleration.

use bevy::prelude::*;

/// Position after `t` seconds of flight.
#[inline]
pub fn point_at(origin: Vec3, velocity: Vec3, gravity: Vec3, t: f32) -> Vec3 {
    origin + velocity * t + 0.5 * gravity * t * t
}

/// Sample `samples` points over `horizon` seconds, starting at `origin`.
///
/// Sample `i` sits at `t = i * horizon / samples`, so the last point stops one
/// step short of the horizon.
pub fn predict(origin: Vec3, velocity: Vec3, gravity: Vec3, horizon: f32, samples: usize) -> Vec<Vec3> {
    if samples == 0 {
        return Vec::new();
    }
    let step = horizon / samples as f32;
    (0..samples)
        .map(|i| point_at(origin, velocity, gravity, i as f32 * step))
        .collect()
}
