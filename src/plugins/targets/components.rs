use bevy::prelude::*;

/// Damageable target.
///
/// Hit points only go down. The first damage call that takes them to zero
/// flips the target terminal and yields its score; every later call is a no-op.
#[derive(Component, Debug, Clone)]
pub struct Target {
    id: u32,
    hit_points: i32,
    base_points: u32,
    destroyed: bool,
}

impl Target {
    pub fn new(id: u32, hit_points: i32, base_points: u32) -> Self {
        Self {
            id,
            hit_points: hit_points.max(1),
            base_points,
            destroyed: false,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Apply `amount` damage from a shot fired at `source`.
    ///
    /// Returns the score exactly once, on the call that destroys the target.
    pub fn receive_damage(&mut self, amount: i32, position: Vec3, source: Vec3) -> Option<u32> {
        if self.destroyed {
            return None;
        }

        self.hit_points -= amount.max(0);
        if self.hit_points > 0 {
            return None;
        }

        self.destroyed = true;
        Some(shot_score(self.base_points, position.distance(source)))
    }
}

/// Longer shots score more: one bonus point per whole metre.
#[inline]
pub fn shot_score(base_points: u32, distance: f32) -> u32 {
    base_points + distance.max(0.0).floor() as u32
}

/// Marker: target should be removed from the world.
///
/// We don't despawn inside the fixed step; we mark and despawn later in PostUpdate.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;
