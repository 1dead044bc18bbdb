//! Shared meshes and materials (render-only).
//!
//! Spawn code takes `Option<&VisualAssets>`: headless apps never insert this
//! resource, so their entities carry physics only.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

#[derive(Resource, Debug, Clone)]
pub struct VisualAssets {
    /// Unit plane; surfaces scale it to their size.
    pub surface_mesh: Handle<Mesh>,
    pub surface_material: Handle<StandardMaterial>,
    pub target_mesh: Handle<Mesh>,
    pub target_material: Handle<StandardMaterial>,
    pub projectile_mesh: Handle<Mesh>,
    pub projectile_material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(PreStartup, load_visuals);
}

fn load_visuals(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hh = tunables.target_half_height;
    let radius = hh * 0.5;

    commands.insert_resource(VisualAssets {
        surface_mesh: meshes.add(Plane3d::default().mesh().size(1.0, 1.0)),
        surface_material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.3, 0.6, 0.9, 0.35),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        target_mesh: meshes.add(Capsule3d::new(radius, hh * 2.0 - radius * 2.0)),
        target_material: materials.add(Color::srgb(0.9, 0.25, 0.2)),
        projectile_mesh: meshes.add(Sphere::new(tunables.projectile_radius)),
        projectile_material: materials.add(Color::srgb(1.0, 0.85, 0.3)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::run_system_once;

    #[test]
    fn visuals_are_sized_from_tunables() {
        let mut world = World::new();
        world.insert_resource(Tunables::default());
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();

        run_system_once(&mut world, load_visuals);

        let visuals = world.resource::<VisualAssets>().clone();
        assert_eq!(world.resource::<Assets<Mesh>>().len(), 3);
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 3);
        assert!(world.resource::<Assets<Mesh>>().contains(&visuals.projectile_mesh));
    }
}
