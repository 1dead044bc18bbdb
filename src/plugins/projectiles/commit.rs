//! Spent projectiles leave the world.
//!
//! Runs in PostUpdate so despawns never land in the middle of a fixed step.

use bevy::prelude::*;

use super::components::{Projectile, ProjectileState};

pub fn despawn_spent_projectiles(mut commands: Commands, q: Query<(Entity, &Projectile)>) {
    for (e, projectile) in &q {
        if projectile.state() == ProjectileState::Spent {
            commands.entity(e).despawn();
        }
    }
}
