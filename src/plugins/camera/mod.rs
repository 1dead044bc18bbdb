//! Camera plugin (render-only).
//!
//! The camera stands in for the AR device pose; the launcher anchor rides
//! along at `launcher_offset` in camera space.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera looking at the demo surface
//! Update:          anchor_launcher (before LauncherSystems)
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::launcher::{Launcher, LauncherSystems};
use crate::plugins::surface::DEMO_SURFACE_CENTER;

#[derive(Component)]
pub struct MainCamera;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.6, 0.6);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            Update,
            anchor_launcher
                .before(LauncherSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        MainCamera,
        Transform::from_translation(CAMERA_POSITION).looking_at(DEMO_SURFACE_CENTER, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Launcher anchor = camera pose composed with the camera-space offset.
pub fn anchor_pose(camera: &Transform, offset: Vec3) -> Transform {
    Transform {
        translation: camera.transform_point(offset),
        rotation: camera.rotation,
        scale: Vec3::ONE,
    }
}

fn anchor_launcher(
    tunables: Res<Tunables>,
    // Disjointness proof: camera entities are not launchers.
    q_cam: Query<&Transform, (With<MainCamera>, Without<Launcher>)>,
    mut q_launcher: Query<&mut Transform, (With<Launcher>, Without<MainCamera>)>,
) {
    let Ok(cam) = q_cam.single() else {
        return;
    };
    for mut tf in &mut q_launcher {
        *tf = anchor_pose(cam, tunables.launcher_offset);
    }
}
