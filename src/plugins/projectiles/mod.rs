//! Projectiles plugin: flight, lifetime backstop, hit resolution, cleanup.
//!
//! # Data flow
//! ```text
//!   Update (launcher, elsewhere)
//!     spawn Idle projectile -> Aimed while dragged -> launch() -> Flying
//!                 │
//!                 v
//!   FixedUpdate
//!     projectile_flight: spin + lifetime countdown
//!       - expiry: Flying -> Spent, writes ProjectileSpent { Expired }
//!
//!   FixedPostUpdate (after Avian collision events)
//!     process_projectile_collisions
//!       - reads: CollisionStart messages
//!       - Flying -> Spent, damages a Target if one was touched
//!       - writes: ProjectileSpent { Collision }, TargetDestroyed
//!
//!   PostUpdate
//!     despawn_spent_projectiles
//! ```
//!
//! Both exit paths go through the `Projectile` state machine, so the spent
//! notification fires exactly once no matter which happens first.

pub mod collision;
pub mod commit;
pub mod components;
pub mod flight;
pub mod messages;
pub mod preview;
pub mod spawn;
pub mod trajectory;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{LoadedBy, Projectile, ProjectileState, TrajectoryPreview};
pub use messages::{ProjectileSpent, SpentCause};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ProjectileSpent>();

        app.add_systems(
            FixedUpdate,
            flight::projectile_flight.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_projectile_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            PostUpdate,
            commit::despawn_spent_projectiles.run_if(in_state(GameState::InGame)),
        );
    }
}
