use bevy::prelude::*;

/// Ammo left after a load.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmmoChanged {
    pub remaining: u32,
}

/// Round lifecycle hooks.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LauncherCommand {
    /// Set the ammo counter and load if possible.
    InitializeAmmo(u32),
    /// Drop the held projectile, zero ammo, stop aiming.
    Reset,
}
