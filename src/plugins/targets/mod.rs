//! Targets plugin: damageable targets that wander a surface.
//!
//! FACTS live in components: `Target` (hit points, terminal flag) and
//! `WanderingTarget` (destination, heading). RULES mutate them in two places:
//! - `wander_targets` (FixedUpdate) moves live targets,
//! - projectile collision resolution (elsewhere) applies damage and marks
//!   `PendingDespawn`.
//!
//! Despawn is deferred to PostUpdate so structural changes never land in the
//! middle of a fixed step.

mod components;
mod messages;
pub mod wander;

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::surface::Surface;
use crate::plugins::visuals::VisualAssets;

pub use components::{shot_score, PendingDespawn, Target};
pub use messages::TargetDestroyed;
pub use wander::WanderingTarget;

pub fn plugin(app: &mut App) {
    app.add_message::<TargetDestroyed>();

    app.add_systems(
        FixedUpdate,
        wander::wander_targets.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_targets.run_if(in_state(GameState::InGame)),
    );
}

/// Spawn target `id` on `surface` and start it wandering.
pub fn spawn_target(
    commands: &mut Commands,
    id: u32,
    surface_entity: Entity,
    surface: &Surface,
    tunables: &Tunables,
    visuals: Option<&VisualAssets>,
    sample: impl FnOnce() -> Option<Vec3>,
) -> Entity {
    let half_height = tunables.target_half_height;
    let radius = half_height * 0.5;

    let mut tf = Transform::from_translation(surface.center);
    let mut wander = WanderingTarget::new(half_height);
    wander.start_moving(surface_entity, surface, &mut tf, sample);

    let mut e = commands.spawn((
        Name::new(format!("Target{id}")),
        Target::new(id, tunables.target_hit_points, tunables.target_base_points),
        wander,
        tf,
        RigidBody::Kinematic,
        Collider::capsule(radius, half_height * 2.0 - radius * 2.0),
        CollisionLayers::new(Layer::Target, [Layer::Projectile]),
        DespawnOnExit(GameState::InGame),
    ));

    if let Some(visuals) = visuals {
        e.insert((
            Mesh3d(visuals.target_mesh.clone()),
            MeshMaterial3d(visuals.target_material.clone()),
        ));
    }

    e.id()
}

/// Despawn targets marked for removal.
fn despawn_marked_targets(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
