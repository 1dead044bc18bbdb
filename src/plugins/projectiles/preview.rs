//! Trajectory preview drawing (render-only).

use bevy::prelude::*;

use super::components::TrajectoryPreview;

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, draw_trajectory_previews);
}

fn draw_trajectory_previews(mut gizmos: Gizmos, q: Query<&TrajectoryPreview>) {
    for preview in &q {
        if !preview.is_visible() || preview.points().len() < 2 {
            continue;
        }
        gizmos.linestrip(preview.points().iter().copied(), Color::srgb(1.0, 0.85, 0.3));
    }
}
