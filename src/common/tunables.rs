//! Tunable gameplay constants.
//!
//! Distances are metres, times are seconds. Wander values are per fixed tick:
//! target motion runs in `FixedUpdate`, so its feel is independent of frame rate.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub gravity: f32,

    pub projectile_radius: f32,
    pub projectile_mass: f32,
    pub projectile_lifetime: f32,
    /// Cosmetic spin in degrees per second.
    pub projectile_spin: f32,

    pub force_multiplier: f32,
    pub force_scalar: f32,
    pub reload_delay: f32,

    pub trajectory_horizon: f32,
    pub trajectory_samples: usize,

    pub wander_speed: f32,
    pub wander_turn_factor: f32,
    pub arrival_epsilon: f32,
    pub ray_offset: f32,

    pub target_half_height: f32,
    pub target_base_points: u32,
    pub target_hit_points: i32,
    pub target_count: u32,

    pub ammo_count: u32,
    pub launcher_offset: Vec3,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            projectile_radius: 0.05,
            projectile_mass: 1.0,
            projectile_lifetime: 3.0,
            projectile_spin: 360.0,
            force_multiplier: 15.0,
            force_scalar: 3.0,
            reload_delay: 1.5,
            trajectory_horizon: 2.0,
            trajectory_samples: 20,
            wander_speed: 0.005,
            wander_turn_factor: 9.0,
            arrival_epsilon: 0.01,
            ray_offset: 0.5,
            target_half_height: 0.1,
            target_base_points: 10,
            target_hit_points: 1,
            target_count: 5,
            ammo_count: 7,
            launcher_offset: Vec3::new(0.0, -0.1, -0.3),
        }
    }
}

impl Tunables {
    /// Gravity as an acceleration vector.
    #[inline]
    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::NEG_Y * self.gravity
    }
}
