//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod launcher;
pub mod physics;
pub mod projectiles;
pub mod session;
pub mod surface;
pub mod targets;

// Render-only
pub mod camera;
pub mod lighting;
pub mod visuals;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    surface::plugin(app);
    targets::plugin(app);
    app.add_plugins(ProjectilesPlugin);
    launcher::plugin(app);
    session::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    visuals::plugin(app);
    lighting::plugin(app);
    camera::plugin(app);
    launcher::input::plugin(app);
    surface::demo_plugin(app);
    projectiles::preview::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
