//! Drag-to-launch mapping.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Launch force for a projectile pulled back from `anchor`.
///
/// A base pull term plus a forward boost scaled by the pull magnitude, so
/// longer pulls gain disproportionately more forward push.
#[inline]
pub fn launch_force(anchor: Vec3, projectile: Vec3, forward: Vec3, multiplier: f32, scalar: f32) -> Vec3 {
    let pull = (anchor - projectile) * multiplier;
    pull + forward * pull.length() * scalar
}

/// Velocity the launch impulse gives a projectile at `projectile`.
pub fn launch_velocity(anchor: &Transform, projectile: Vec3, tunables: &Tunables) -> Vec3 {
    let force = launch_force(
        anchor.translation,
        projectile,
        *anchor.forward(),
        tunables.force_multiplier,
        tunables.force_scalar,
    );
    force / tunables.projectile_mass.max(f32::EPSILON)
}
