use bevy::prelude::*;

/// A target was destroyed. Written once per target.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetDestroyed {
    pub id: u32,
    pub points: u32,
}
