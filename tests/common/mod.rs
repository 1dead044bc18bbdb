//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `slingshot::game::configure_headless` to install gameplay plugins.
//! - time advances by exactly one fixed step per `app.update()`.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use slingshot::plugins::launcher::{DragGesture, Launcher, LauncherSystems};
use slingshot::plugins::surface::{spawn_surface, Surface, SurfaceSelected};

pub const STEP: f32 = 1.0 / 64.0;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists; Avian's collider
    // cache also looks up mesh assets.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();

    slingshot::game::configure_headless(&mut app);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(STEP)));
    // `App::run` normally does this; plugins (e.g. Avian) register resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

/// Every message of type `M` seen so far, with the elapsed time it was seen at.
#[derive(Resource)]
pub struct Recorded<M: Message>(pub Vec<(f32, M)>);

impl<M: Message> Default for Recorded<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<M: Message + Clone> Recorded<M> {
    pub fn messages(&self) -> Vec<M> {
        self.0.iter().map(|(_, m)| m.clone()).collect()
    }
}

fn record<M: Message + Clone>(time: Res<Time>, mut reader: MessageReader<M>, mut log: ResMut<Recorded<M>>) {
    for m in reader.read() {
        log.0.push((time.elapsed_secs(), m.clone()));
    }
}

/// Record `M` at the end of `Update`, after the launcher has run.
pub fn record_messages<M: Message + Clone>(app: &mut App) {
    app.init_resource::<Recorded<M>>();
    app.add_systems(Update, record::<M>.after(LauncherSystems));
}

pub fn recorded<M: Message + Clone>(app: &App) -> Vec<M> {
    app.world().resource::<Recorded<M>>().messages()
}

/// Spawn the stand-in AR surface and announce it.
pub fn select_surface(app: &mut App, center: Vec3, size: Vec2) -> Entity {
    let world = app.world_mut();
    let mut commands = world.commands();
    let e = spawn_surface(&mut commands, Surface::new(center, size), None);
    world.flush();
    world.write_message(SurfaceSelected(e));
    e
}

pub fn run_frames(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}

/// Update until `done` holds. Returns `false` if `max_frames` ran out first.
pub fn run_until(app: &mut App, max_frames: u32, mut done: impl FnMut(&mut World) -> bool) -> bool {
    for _ in 0..max_frames {
        app.update();
        if done(app.world_mut()) {
            return true;
        }
    }
    false
}

pub fn launcher(world: &mut World) -> (Entity, Launcher, Transform) {
    let (e, l, tf) = world
        .query::<(Entity, &Launcher, &Transform)>()
        .single(world)
        .expect("exactly one launcher");
    (e, l.clone(), *tf)
}

fn toward_anchor(anchor: &Transform, offset: Vec3) -> Ray3d {
    let at = anchor.translation + offset;
    Ray3d::new(at + *anchor.back(), anchor.forward())
}

/// Grab the held projectile and release it `pull` below the anchor.
pub fn drag_and_release(app: &mut App, pull: f32) {
    let (_, _, anchor) = launcher(app.world_mut());
    let down = Vec3::NEG_Y * pull;

    app.world_mut().write_message(DragGesture::Began(toward_anchor(&anchor, Vec3::ZERO)));
    app.update();
    app.world_mut().write_message(DragGesture::Moved(toward_anchor(&anchor, down)));
    app.update();
    app.world_mut().write_message(DragGesture::Ended(toward_anchor(&anchor, down)));
    app.update();
}
