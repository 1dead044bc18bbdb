use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Avian with gravity from the tunables. Requires the core plugin first.
pub fn plugin(app: &mut App) {
    let gravity = app.world().resource::<Tunables>().gravity_vector();
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(gravity));
}
