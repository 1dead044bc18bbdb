//! Projectile construction and collision filters.
//!
//! Held projectiles keep their collider but collide with nothing (empty filters),
//! the same body switches to the active filters on launch. No structural toggles.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::visuals::VisualAssets;

use super::components::{LoadedBy, Projectile, TrajectoryPreview};

#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::Surface, Layer::Target])
}

#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

/// Spawn an idle projectile resting at `at`, owned by `launcher`.
pub fn spawn_projectile(
    commands: &mut Commands,
    launcher: Entity,
    at: Transform,
    tunables: &Tunables,
    visuals: Option<&VisualAssets>,
) -> Entity {
    let mut e = commands.spawn((
        Name::new("Projectile"),
        Projectile::default(),
        TrajectoryPreview::default(),
        LoadedBy(launcher),
        at,
        RigidBody::Kinematic,
        Collider::sphere(tunables.projectile_radius),
        Sensor,
        Mass(tunables.projectile_mass),
        inactive_projectile_layers(),
        LinearVelocity::ZERO,
        // Opt-in collision events: Avian only emits CollisionStart if one collider has this marker.
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));

    if let Some(visuals) = visuals {
        e.insert((
            Mesh3d(visuals.projectile_mesh.clone()),
            MeshMaterial3d(visuals.projectile_material.clone()),
        ));
    }

    e.id()
}
