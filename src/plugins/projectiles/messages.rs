//! Projectile notifications.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpentCause {
    /// Touched any collider while flying.
    Collision,
    /// Lifetime ran out without touching anything.
    Expired,
}

/// A flying projectile was consumed. Written exactly once per projectile.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileSpent {
    pub projectile: Entity,
    pub launcher: Option<Entity>,
    pub cause: SpentCause,
}
