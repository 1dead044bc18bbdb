//! Random bounded motion on a surface.
//!
//! ```text
//!   start_moving ──> Seeking ──(within arrival_epsilon)──> Idle ──(sample hit)──> Seeking
//!                                                          │
//!                                                          └─(sample miss: retry next tick)
//! ```
//!
//! Destinations are drawn inside a sphere around the surface center and
//! accepted only when a downward ray from above them lands on *this* surface.
//! A run of misses leaves the target standing still until a sample lands.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::common::tunables::Tunables;
use crate::plugins::surface::Surface;

use super::components::PendingDespawn;

/// Per-tick motion constants. Frame-rate independence comes from running in
/// `FixedUpdate`, not from scaling by dt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderParams {
    /// Metres per tick.
    pub speed: f32,
    /// Fraction of the remaining heading error closed per tick.
    pub turn_fraction: f32,
    pub arrival_epsilon: f32,
}

impl WanderParams {
    pub fn from_tunables(t: &Tunables) -> Self {
        Self {
            speed: t.wander_speed,
            turn_fraction: (t.wander_speed * t.wander_turn_factor).clamp(0.0, 1.0),
            arrival_epsilon: t.arrival_epsilon,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct WanderingTarget {
    surface: Option<Entity>,
    half_height: f32,
    destination: Option<Vec3>,
    facing: Quat,
    moving: bool,
}

impl WanderingTarget {
    pub fn new(half_height: f32) -> Self {
        Self {
            surface: None,
            half_height,
            destination: None,
            facing: Quat::IDENTITY,
            moving: false,
        }
    }

    #[inline]
    pub fn surface(&self) -> Option<Entity> {
        self.surface
    }

    #[inline]
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Stand on the surface center and pick a first destination.
    pub fn start_moving(
        &mut self,
        surface_entity: Entity,
        surface: &Surface,
        tf: &mut Transform,
        sample: impl FnOnce() -> Option<Vec3>,
    ) {
        self.surface = Some(surface_entity);
        tf.translation = surface.center + Vec3::Y * self.half_height;
        self.retarget(tf.translation, sample());
        self.moving = true;
    }

    pub fn stop_moving(&mut self) {
        self.moving = false;
    }

    /// Advance one tick. `sample` is only called when a new destination is needed.
    pub fn tick(&mut self, tf: &mut Transform, params: WanderParams, sample: impl FnOnce() -> Option<Vec3>) {
        if !self.moving {
            return;
        }

        let Some(dest) = self.destination else {
            self.retarget(tf.translation, sample());
            return;
        };

        tf.rotation = tf.rotation.slerp(self.facing, params.turn_fraction);
        tf.translation = move_towards(tf.translation, dest, params.speed);

        if tf.translation.distance(dest) < params.arrival_epsilon {
            self.destination = None;
        }
    }

    fn retarget(&mut self, from: Vec3, destination: Option<Vec3>) {
        self.destination = destination;
        if let Some(dest) = destination {
            if let Some(facing) = facing_towards(from, dest) {
                self.facing = facing;
            }
        }
    }
}

/// Step from `from` toward `to` by at most `max_step`, never overshooting.
#[inline]
pub fn move_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist <= f32::EPSILON {
        return to;
    }
    from + delta / dist * max_step
}

/// Rotation looking from `from` to `to` with +Y up. `None` if the points coincide.
pub fn facing_towards(from: Vec3, to: Vec3) -> Option<Quat> {
    let dir = Dir3::new(to - from).ok()?;
    Some(Transform::IDENTITY.looking_to(dir, Vec3::Y).rotation)
}

/// Uniform point inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

/// Draw one candidate destination.
///
/// `cast_down` is the scene probe: given a ray origin it returns the first
/// collider hit straight below and the hit point. The candidate is rejected
/// unless that collider is `surface_entity`.
pub fn random_destination<R: Rng + ?Sized>(
    rng: &mut R,
    surface_entity: Entity,
    surface: &Surface,
    half_height: f32,
    ray_offset: f32,
    cast_down: impl FnOnce(Vec3) -> Option<(Entity, Vec3)>,
) -> Option<Vec3> {
    let candidate = surface.center + random_in_unit_sphere(rng) * surface.range();
    let (hit, point) = cast_down(candidate + Vec3::Y * ray_offset)?;
    (hit == surface_entity).then(|| point + Vec3::Y * half_height)
}

/// Downward ray cast against every collider in the scene.
pub fn cast_down(spatial: &SpatialQuery, origin: Vec3) -> Option<(Entity, Vec3)> {
    spatial
        .cast_ray(origin, Dir3::NEG_Y, f32::MAX, true, &SpatialQueryFilter::default())
        .map(|hit| (hit.entity, origin + Vec3::NEG_Y * hit.distance))
}

pub fn wander_targets(
    tunables: Res<Tunables>,
    spatial: SpatialQuery,
    q_surfaces: Query<&Surface>,
    mut q: Query<(&mut WanderingTarget, &mut Transform), Without<PendingDespawn>>,
) {
    let params = WanderParams::from_tunables(&tunables);
    let mut rng = rand::rng();

    for (mut wander, mut tf) in &mut q {
        let Some(surface_entity) = wander.surface() else {
            continue;
        };
        let Ok(surface) = q_surfaces.get(surface_entity) else {
            continue;
        };
        let half_height = wander.half_height();

        wander.tick(&mut tf, params, || {
            let dest = random_destination(
                &mut rng,
                surface_entity,
                surface,
                half_height,
                tunables.ray_offset,
                |origin| cast_down(&spatial, origin),
            );
            if dest.is_none() {
                debug!("destination sample missed surface {surface_entity}, retrying next tick");
            }
            dest
        });
    }
}
