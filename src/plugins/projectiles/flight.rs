//! Per-tick flight: cosmetic spin and lifetime backstop.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{LoadedBy, Projectile};
use super::messages::{ProjectileSpent, SpentCause};
use super::spawn::inactive_projectile_layers;

pub fn projectile_flight(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q: Query<(Entity, &mut Projectile, &mut Transform, &mut CollisionLayers, Option<&LoadedBy>)>,
    mut spent: MessageWriter<ProjectileSpent>,
) {
    let dt = time.delta_secs();
    let spin = tunables.projectile_spin.to_radians() * dt;

    for (e, mut projectile, mut tf, mut layers, loaded_by) in &mut q {
        if !projectile.is_flying() {
            continue;
        }

        tf.rotate_local_x(spin);

        if projectile.tick_lifetime(dt) {
            debug!("projectile {e} expired without a hit");
            *layers = inactive_projectile_layers();
            spent.write(ProjectileSpent {
                projectile: e,
                launcher: loaded_by.map(|l| l.0),
                cause: SpentCause::Expired,
            });
        }
    }
}
