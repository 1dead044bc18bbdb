use bevy::prelude::*;

/// Projectile lifecycle.
///
/// `Idle` rests in the launcher, `Aimed` is held in a drag, `Flying` belongs to
/// physics, `Spent` is terminal and waits for despawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Idle,
    Aimed,
    Flying,
    Spent,
}

/// Flight object state.
///
/// Every transition goes through a method that reports whether it happened, so
/// callers emit side effects (hit notification, damage) at most once.
#[derive(Component, Debug, Clone, Default)]
pub struct Projectile {
    state: ProjectileState,
    launch_position: Option<Vec3>,
    remaining_lifetime: f32,
}

impl Projectile {
    #[inline]
    pub fn state(&self) -> ProjectileState {
        self.state
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.state == ProjectileState::Flying
    }

    #[inline]
    pub fn launch_position(&self) -> Option<Vec3> {
        self.launch_position
    }

    #[inline]
    pub fn remaining_lifetime(&self) -> f32 {
        self.remaining_lifetime
    }

    /// Idle -> Aimed.
    pub fn aim(&mut self) -> bool {
        if self.state != ProjectileState::Idle {
            return false;
        }
        self.state = ProjectileState::Aimed;
        true
    }

    /// Idle/Aimed -> Flying. Records where the shot started.
    pub fn launch(&mut self, start: Vec3, lifetime: f32) -> bool {
        if !matches!(self.state, ProjectileState::Idle | ProjectileState::Aimed) {
            return false;
        }
        self.state = ProjectileState::Flying;
        self.launch_position = Some(start);
        self.remaining_lifetime = lifetime.max(0.0);
        true
    }

    /// Count down the flight lifetime. Returns `true` on the tick that expires it.
    pub fn tick_lifetime(&mut self, dt: f32) -> bool {
        if self.state != ProjectileState::Flying {
            return false;
        }
        self.remaining_lifetime = (self.remaining_lifetime - dt).max(0.0);
        if self.remaining_lifetime > 0.0 {
            return false;
        }
        self.state = ProjectileState::Spent;
        true
    }

    /// Flying -> Spent on contact. Returns the launch position the first time only.
    pub fn consume(&mut self) -> Option<Vec3> {
        if self.state != ProjectileState::Flying {
            return None;
        }
        self.state = ProjectileState::Spent;
        self.launch_position
    }
}

/// Launcher that loaded this projectile and wants its spent notification.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedBy(pub Entity);

/// Preview path shown while a projectile is aimed.
#[derive(Component, Debug, Clone, Default)]
pub struct TrajectoryPreview {
    points: Vec<Vec3>,
    visible: bool,
}

impl TrajectoryPreview {
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, points: Vec<Vec3>) {
        self.points = points;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.points.clear();
        self.visible = false;
    }
}
