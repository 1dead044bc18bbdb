use std::time::Duration;

use bevy::prelude::*;

use super::gesture::ray_plane_point;

/// Launcher state.
///
/// ```text
///   Empty ──try_load──> Loaded ──begin_drag──> Aiming ──release──> InFlight
///     ^                                                              │
///     └──────────── tick_reload <── reload scheduled <── on_spent ───┘
/// ```
///
/// `held` is the idle/aimed projectile resting on the anchor, `in_flight` the
/// one it last fired. A new projectile is only created while both are empty,
/// so at most one live projectile belongs to a launcher.
#[derive(Component, Debug, Clone, Default)]
pub struct Launcher {
    ammo: u32,
    held: Option<Entity>,
    in_flight: Option<Entity>,
    drag: Option<DragState>,
    reload: Option<Timer>,
}

impl Launcher {
    #[inline]
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    #[inline]
    pub fn held(&self) -> Option<Entity> {
        self.held
    }

    #[inline]
    pub fn in_flight(&self) -> Option<Entity> {
        self.in_flight
    }

    #[inline]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn reload_pending(&self) -> bool {
        self.reload.is_some()
    }

    pub fn initialize_ammo(&mut self, n: u32) {
        self.ammo = n;
    }

    /// Create a projectile through `spawn` if the launcher is empty and has ammo.
    ///
    /// Returns the new projectile and the ammo left after taking it.
    pub fn try_load(&mut self, spawn: impl FnOnce() -> Entity) -> Option<(Entity, u32)> {
        if self.held.is_some() || self.in_flight.is_some() || self.ammo == 0 {
            return None;
        }
        let e = spawn();
        self.held = Some(e);
        self.ammo -= 1;
        Some((e, self.ammo))
    }

    /// Start aiming the held projectile. Refused while empty or already dragging.
    pub fn begin_drag(&mut self, drag: DragState) -> bool {
        if self.held.is_none() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(drag);
        true
    }

    /// Drop the drag without firing.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// End the drag and hand the projectile over to flight.
    pub fn release(&mut self) -> Option<Entity> {
        self.drag.take()?;
        let e = self.held.take()?;
        self.in_flight = Some(e);
        Some(e)
    }

    /// The fired projectile is gone. Returns `true` if it was ours.
    pub fn on_spent(&mut self, projectile: Entity) -> bool {
        if self.in_flight != Some(projectile) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn schedule_reload(&mut self, delay: f32) {
        self.reload = Some(Timer::from_seconds(delay.max(0.0), TimerMode::Once));
    }

    /// Returns `true` once, on the tick the reload delay elapses.
    pub fn tick_reload(&mut self, dt: Duration) -> bool {
        let Some(timer) = self.reload.as_mut() else {
            return false;
        };
        timer.tick(dt);
        if !timer.is_finished() {
            return false;
        }
        self.reload = None;
        true
    }

    /// Round end: zero ammo, stop aiming, give up the held projectile.
    ///
    /// A pending reload keeps running and loads nothing when it fires. A shot
    /// still in flight stays tracked, so loads are refused until it is spent.
    pub fn reset(&mut self) -> Option<Entity> {
        self.ammo = 0;
        self.drag = None;
        self.held.take()
    }
}

/// Grab-time drag frame.
///
/// The projectile moves on the plane through its grab position that faces
/// the grab ray, keeping the grab offset so it never jumps to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub plane_origin: Vec3,
    pub plane_normal: Vec3,
    pub offset: Vec3,
}

impl DragState {
    /// Build the frame for a grab along `ray` of a projectile at `position`.
    pub fn grab(ray: Ray3d, position: Vec3) -> Option<Self> {
        let plane_normal = -*ray.direction;
        let point = ray_plane_point(ray, position, plane_normal)?;
        Some(Self {
            plane_origin: position,
            plane_normal,
            offset: position - point,
        })
    }

    /// Projectile position for a pointer ray, or `None` if the ray misses the plane.
    pub fn follow(&self, ray: Ray3d) -> Option<Vec3> {
        ray_plane_point(ray, self.plane_origin, self.plane_normal).map(|p| p + self.offset)
    }
}
