//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally handled
//! by schedule boundaries. We call `world.flush()` after running so queued commands are
//! applied before assertions.

use std::time::Duration;

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Register the message storage a system under test reads or writes.
pub fn init_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Take every pending message of type `M` out of the world.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}

/// A `Time<Fixed>` whose last delta is `dt`.
pub fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// A generic `Time` whose last delta is `dt`.
pub fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}
