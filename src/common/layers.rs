//! Collision layers.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Surface,
    Target,
    Projectile,
}
