//! Launcher plugin: ammo, grab/drag/release, launch force, reload.
//!
//! ```text
//!   LauncherCommand::InitializeAmmo ──> load ──> Idle projectile on the anchor
//!   DragGesture::Began  (ray hits it)  ──> Aimed, preview on
//!   DragGesture::Moved                 ──> follow the drag plane
//!   DragGesture::Ended                 ──> impulse, Flying, preview off
//!   ProjectileSpent (ours)             ──> reload timer ──> load
//!   LauncherCommand::Reset             ──> drop held projectile, ammo 0
//! ```
//!
//! All launcher systems run in `Update` as one chain under `LauncherSystems`;
//! producers of commands and gestures order themselves before it.

pub mod components;
pub mod force;
pub mod gesture;
pub mod input;
pub mod messages;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{DragState, Launcher};
pub use gesture::DragGesture;
pub use messages::{AmmoChanged, LauncherCommand};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LauncherSystems;

pub fn plugin(app: &mut App) {
    app.add_message::<AmmoChanged>()
        .add_message::<LauncherCommand>()
        .add_message::<DragGesture>();

    app.add_systems(OnEnter(GameState::InGame), systems::spawn_launcher);

    app.add_systems(
        Update,
        (
            systems::apply_launcher_commands,
            // A reload scheduled this frame starts ticking next frame.
            systems::tick_reloads,
            systems::schedule_reloads,
            systems::handle_drag_gestures,
            systems::update_aim,
            systems::follow_anchor,
        )
            .chain()
            .in_set(LauncherSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
