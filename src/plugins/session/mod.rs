//! Session plugin: score, target roster, round lifecycle.
//!
//! ```text
//!   AwaitingSurface ──SurfaceSelected──> Ready ──StartRound──> Playing
//!                                          ^                      │
//!                     SurfaceSelected ─────┘   last target down,  │
//!                                              or final shot spent v
//!                                   StartRound <──────────────── Ended
//! ```
//!
//! The session only talks to the launcher through `LauncherCommand` and only
//! hears about shots through messages, so its systems run in `Update` before
//! `LauncherSystems` and see gameplay messages one frame after they are written.

mod systems;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::launcher::LauncherSystems;

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    #[default]
    AwaitingSurface,
    Ready,
    Playing,
    Ended,
}

/// Live targets by id.
#[derive(Resource, Default, Debug)]
pub struct TargetRoster(HashMap<u32, Entity>);

impl TargetRoster {
    pub fn insert(&mut self, id: u32, e: Entity) {
        self.0.insert(id, e);
    }

    pub fn remove(&mut self, id: u32) -> Option<Entity> {
        self.0.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<Entity> {
        self.0.get(&id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.values().copied()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.0.drain().map(|(_, e)| e)
    }
}

/// The launcher reported zero ammo this round; the next spent shot is the last.
#[derive(Resource, Default, Debug)]
struct FinalShot(bool);

/// Start (or restart) a round.
#[derive(Message, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartRound;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEndReason {
    AllTargetsDestroyed,
    OutOfAmmo,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundEnded {
    pub score: u32,
    pub reason: RoundEndReason,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>()
        .init_resource::<RoundPhase>()
        .init_resource::<TargetRoster>()
        .init_resource::<FinalShot>()
        .add_message::<StartRound>()
        .add_message::<RoundEnded>();

    app.add_systems(
        Update,
        (
            systems::start_on_input,
            systems::select_surface,
            systems::start_round,
            systems::track_round,
        )
            .chain()
            .before(LauncherSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
