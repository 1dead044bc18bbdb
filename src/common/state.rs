//! Global state machine.
//!
//! Round-level progress (waiting for a surface, playing, ended) lives in the
//! session's `RoundPhase` resource; `GameState` only scopes gameplay entities.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
