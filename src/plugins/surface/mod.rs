//! Surface plugin: the bounded horizontal plane targets live on.
//!
//! Plane detection is someone else's job. This module only knows the shape of
//! a selected surface and gives it a static collider, whose entity id is what
//! the target movement checks ray hits against.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::visuals::VisualAssets;

const SURFACE_THICKNESS: f32 = 0.01;

/// A selected planar region. Immutable once spawned.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub center: Vec3,
    /// Full extents along world X and Z.
    pub size: Vec2,
}

impl Surface {
    pub fn new(center: Vec3, size: Vec2) -> Self {
        Self {
            center,
            size: size.abs(),
        }
    }

    /// Radius of the sampling sphere around `center`.
    #[inline]
    pub fn range(&self) -> f32 {
        self.size.x.max(self.size.y)
    }

    /// Whether `point` projects inside the surface rectangle.
    #[inline]
    pub fn contains_xz(&self, point: Vec3) -> bool {
        let d = point - self.center;
        d.x.abs() <= self.size.x * 0.5 && d.z.abs() <= self.size.y * 0.5
    }
}

/// The plane-selection collaborator picked a surface.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSelected(pub Entity);

/// Currently selected surface, if any.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SelectedSurface(pub Option<Entity>);

pub fn plugin(app: &mut App) {
    app.add_message::<SurfaceSelected>()
        .init_resource::<SelectedSurface>();
}

/// Stand-in for AR plane detection in the desktop build: one fixed surface,
/// selected as soon as it exists.
pub fn demo_plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_demo_surface);
}

pub const DEMO_SURFACE_CENTER: Vec3 = Vec3::new(0.0, 0.0, -1.5);
pub const DEMO_SURFACE_SIZE: Vec2 = Vec2::new(2.0, 1.5);

fn spawn_demo_surface(
    mut commands: Commands,
    visuals: Option<Res<VisualAssets>>,
    mut selected: MessageWriter<SurfaceSelected>,
) {
    let e = spawn_surface(
        &mut commands,
        Surface::new(DEMO_SURFACE_CENTER, DEMO_SURFACE_SIZE),
        visuals.as_deref(),
    );
    selected.write(SurfaceSelected(e));
}

/// Spawn a surface with its collider. Visuals are attached when available.
pub fn spawn_surface(commands: &mut Commands, surface: Surface, visuals: Option<&VisualAssets>) -> Entity {
    let e = commands
        .spawn((
            Name::new("Surface"),
            surface,
            Transform::from_translation(surface.center),
            RigidBody::Static,
            Collider::cuboid(surface.size.x, SURFACE_THICKNESS, surface.size.y),
            CollisionLayers::new(Layer::Surface, [Layer::Projectile]),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    // Visual lives on a child so its scale never reaches the collider.
    if let Some(visuals) = visuals {
        commands.spawn((
            Name::new("SurfaceVisual"),
            Mesh3d(visuals.surface_mesh.clone()),
            MeshMaterial3d(visuals.surface_material.clone()),
            Transform::from_scale(Vec3::new(surface.size.x, 1.0, surface.size.y)),
            ChildOf(e),
        ));
    }

    e
}
