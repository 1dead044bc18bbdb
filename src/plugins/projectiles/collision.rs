//! Hit resolution.
//!
//! A flying projectile is consumed by the first collider it touches. If that
//! collider is a target, the target takes one point of damage scored from the
//! launch position; anything else (the surface, scenery) just eats the shot.

use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::plugins::targets::{PendingDespawn, Target, TargetDestroyed, WanderingTarget};

use super::components::{LoadedBy, Projectile};
use super::messages::{ProjectileSpent, SpentCause};
use super::spawn::inactive_projectile_layers;

pub const PROJECTILE_DAMAGE: i32 = 1;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

pub fn process_projectile_collisions(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut q_projectiles: Query<(&mut Projectile, &mut CollisionLayers, Option<&LoadedBy>)>,
    mut q_targets: Query<(&mut Target, &Transform, Option<&mut WanderingTarget>), Without<PendingDespawn>>,
    mut spent: MessageWriter<ProjectileSpent>,
    mut destroyed: MessageWriter<TargetDestroyed>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_projectiles.contains(t1.collider);
        let p2 = q_projectiles.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        if !seen.insert(projectile_side.collider) {
            continue;
        }

        let Ok((mut projectile, mut layers, loaded_by)) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };

        // Held or already spent projectiles never hit.
        let Some(launch_position) = projectile.consume() else {
            continue;
        };
        *layers = inactive_projectile_layers();

        let other = other_side.gameplay_owner();
        if let Ok((mut target, tf, wander)) = q_targets.get_mut(other) {
            if let Some(points) = target.receive_damage(PROJECTILE_DAMAGE, tf.translation, launch_position) {
                info!("target {} destroyed for {points} points", target.id());
                destroyed.write(TargetDestroyed { id: target.id(), points });
                if let Some(mut wander) = wander {
                    wander.stop_moving();
                }
                commands.entity(other).insert(PendingDespawn);
            }
        }

        spent.write(ProjectileSpent {
            projectile: projectile_side.collider,
            launcher: loaded_by.map(|l| l.0),
            cause: SpentCause::Collision,
        });
    }
}
