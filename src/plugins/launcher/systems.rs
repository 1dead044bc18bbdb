use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::projectiles::spawn::{active_projectile_layers, spawn_projectile};
use crate::plugins::projectiles::trajectory::predict;
use crate::plugins::projectiles::{Projectile, ProjectileSpent, TrajectoryPreview};
use crate::plugins::visuals::VisualAssets;

use super::components::{DragState, Launcher};
use super::force::launch_velocity;
use super::gesture::{ray_hits_sphere, DragGesture};
use super::messages::{AmmoChanged, LauncherCommand};

/// Anchor used until something (the camera rig) moves the launcher.
pub const DEFAULT_ANCHOR: Vec3 = Vec3::new(0.0, 1.5, 0.0);

pub fn spawn_launcher(mut commands: Commands) {
    commands.spawn((
        Name::new("Launcher"),
        Launcher::default(),
        Transform::from_translation(DEFAULT_ANCHOR),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Load one projectile onto the anchor if the launcher allows it.
fn load_projectile(
    commands: &mut Commands,
    launcher_e: Entity,
    launcher: &mut Launcher,
    anchor: &Transform,
    tunables: &Tunables,
    visuals: Option<&VisualAssets>,
    ammo_changed: &mut MessageWriter<AmmoChanged>,
) -> bool {
    let loaded = launcher.try_load(|| spawn_projectile(commands, launcher_e, *anchor, tunables, visuals));
    let Some((projectile, remaining)) = loaded else {
        match launcher.in_flight() {
            Some(shot) => debug!("launcher {launcher_e} refused load: {shot} still in flight"),
            None => debug!("launcher {launcher_e} refused load (ammo {})", launcher.ammo()),
        }
        return false;
    };
    debug!("launcher {launcher_e} loaded {projectile}, {remaining} left");
    ammo_changed.write(AmmoChanged { remaining });
    true
}

pub fn apply_launcher_commands(
    mut commands: Commands,
    mut incoming: MessageReader<LauncherCommand>,
    tunables: Res<Tunables>,
    visuals: Option<Res<VisualAssets>>,
    mut q: Query<(Entity, &mut Launcher, &Transform)>,
    mut ammo_changed: MessageWriter<AmmoChanged>,
) {
    for cmd in incoming.read() {
        for (e, mut launcher, anchor) in &mut q {
            match *cmd {
                LauncherCommand::InitializeAmmo(n) => {
                    launcher.initialize_ammo(n);
                    if n > 0 {
                        load_projectile(
                            &mut commands,
                            e,
                            &mut launcher,
                            anchor,
                            &tunables,
                            visuals.as_deref(),
                            &mut ammo_changed,
                        );
                    }
                }
                LauncherCommand::Reset => {
                    if let Some(held) = launcher.reset() {
                        commands.entity(held).despawn();
                    }
                }
            }
        }
    }
}

pub fn schedule_reloads(
    tunables: Res<Tunables>,
    mut spent: MessageReader<ProjectileSpent>,
    mut q: Query<&mut Launcher>,
) {
    for ev in spent.read() {
        let Some(launcher_e) = ev.launcher else {
            continue;
        };
        let Ok(mut launcher) = q.get_mut(launcher_e) else {
            continue;
        };
        if launcher.on_spent(ev.projectile) {
            launcher.schedule_reload(tunables.reload_delay);
        }
    }
}

pub fn tick_reloads(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    visuals: Option<Res<VisualAssets>>,
    mut q: Query<(Entity, &mut Launcher, &Transform)>,
    mut ammo_changed: MessageWriter<AmmoChanged>,
) {
    for (e, mut launcher, anchor) in &mut q {
        if launcher.tick_reload(time.delta()) {
            load_projectile(
                &mut commands,
                e,
                &mut launcher,
                anchor,
                &tunables,
                visuals.as_deref(),
                &mut ammo_changed,
            );
        }
    }
}

type HeldProjectile = (
    &'static mut Projectile,
    &'static mut Transform,
    &'static mut TrajectoryPreview,
    &'static mut LinearVelocity,
    &'static mut CollisionLayers,
);

pub fn handle_drag_gestures(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut gestures: MessageReader<DragGesture>,
    mut q_launchers: Query<(Entity, &mut Launcher, &Transform), Without<Projectile>>,
    mut q_projectiles: Query<HeldProjectile, Without<Launcher>>,
) {
    for gesture in gestures.read() {
        for (launcher_e, mut launcher, anchor) in &mut q_launchers {
            let Some(held) = launcher.held() else {
                continue;
            };
            let Ok((mut projectile, mut tf, mut preview, mut velocity, mut layers)) =
                q_projectiles.get_mut(held)
            else {
                if launcher.is_dragging() {
                    warn!("launcher {launcher_e} is dragging {held}, which no longer exists");
                    launcher.cancel_drag();
                }
                continue;
            };

            match *gesture {
                DragGesture::Began(ray) => {
                    if launcher.is_dragging() {
                        continue;
                    }
                    if !ray_hits_sphere(ray, tf.translation, tunables.projectile_radius) {
                        debug!("grab missed the held projectile");
                        continue;
                    }
                    let Some(drag) = DragState::grab(ray, tf.translation) else {
                        continue;
                    };
                    if launcher.begin_drag(drag) {
                        projectile.aim();
                    }
                }
                DragGesture::Moved(ray) => {
                    let Some(pos) = launcher.drag().and_then(|d| d.follow(ray)) else {
                        continue;
                    };
                    tf.translation = pos;
                }
                DragGesture::Ended(ray) => {
                    let Some(drag) = launcher.drag().copied() else {
                        continue;
                    };
                    if let Some(pos) = drag.follow(ray) {
                        tf.translation = pos;
                    }
                    if launcher.release().is_none() {
                        continue;
                    }

                    let v = launch_velocity(anchor, tf.translation, &tunables);
                    projectile.launch(tf.translation, tunables.projectile_lifetime);
                    // `RigidBody` is immutable in avian 0.5; replace it via insert.
                    commands.entity(held).insert(RigidBody::Dynamic);
                    // Impulse: adds to whatever the body already carries.
                    velocity.0 += v;
                    *layers = active_projectile_layers();
                    preview.hide();
                    debug!("launcher {launcher_e} fired {held} at {v}");
                }
            }
        }
    }
}

/// Orient the aimed projectile along its launch velocity and refresh the preview.
pub fn update_aim(
    tunables: Res<Tunables>,
    gravity: Res<Gravity>,
    q_launchers: Query<(&Launcher, &Transform), Without<Projectile>>,
    mut q_projectiles: Query<(&mut Transform, &mut TrajectoryPreview), (With<Projectile>, Without<Launcher>)>,
) {
    for (launcher, anchor) in &q_launchers {
        if !launcher.is_dragging() {
            continue;
        }
        let Some(held) = launcher.held() else {
            continue;
        };
        let Ok((mut tf, mut preview)) = q_projectiles.get_mut(held) else {
            continue;
        };

        let v = launch_velocity(anchor, tf.translation, &tunables);
        if let Ok(dir) = Dir3::new(v) {
            tf.rotation = Transform::IDENTITY.looking_to(dir, Vec3::Y).rotation;
        }
        preview.show(predict(
            tf.translation,
            v,
            gravity.0,
            tunables.trajectory_horizon,
            tunables.trajectory_samples,
        ));
    }
}

/// Keep a resting projectile on the anchor.
pub fn follow_anchor(
    q_launchers: Query<(&Launcher, &Transform), Without<Projectile>>,
    mut q_projectiles: Query<&mut Transform, (With<Projectile>, Without<Launcher>)>,
) {
    for (launcher, anchor) in &q_launchers {
        if launcher.is_dragging() {
            continue;
        }
        let Some(held) = launcher.held() else {
            continue;
        };
        if let Ok(mut tf) = q_projectiles.get_mut(held) {
            *tf = *anchor;
        }
    }
}
