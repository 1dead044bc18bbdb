//! Pointer input -> `DragGesture` (render-only).
//!
//! First touch wins over the mouse. Screen positions go through the main
//! camera, so the gesture carries world-space rays. If the pointer leaves the
//! window mid-drag, the release reuses the last ray we saw.

use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

use super::gesture::DragGesture;
use super::LauncherSystems;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, emit_drag_gestures.before(LauncherSystems));
}

#[derive(Clone, Copy)]
enum Phase {
    Began,
    Moved,
    Ended,
}

fn pointer(mouse: Option<&ButtonInput<MouseButton>>, touches: Option<&Touches>, window: &Window) -> Option<(Phase, Option<Vec2>)> {
    if let Some(touches) = touches {
        if let Some(t) = touches.iter_just_pressed().next() {
            return Some((Phase::Began, Some(t.position())));
        }
        if let Some(t) = touches.iter_just_released().next() {
            return Some((Phase::Ended, Some(t.position())));
        }
        if let Some(t) = touches.iter().next() {
            return Some((Phase::Moved, Some(t.position())));
        }
    }

    let mouse = mouse?;
    let cursor = window.cursor_position();
    if mouse.just_pressed(MouseButton::Left) {
        Some((Phase::Began, cursor))
    } else if mouse.just_released(MouseButton::Left) {
        Some((Phase::Ended, cursor))
    } else if mouse.pressed(MouseButton::Left) {
        Some((Phase::Moved, cursor))
    } else {
        None
    }
}

fn emit_drag_gestures(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    window: Option<Single<&Window>>,
    camera: Option<Single<(&Camera, &GlobalTransform), With<MainCamera>>>,
    mut gestures: MessageWriter<DragGesture>,
    mut last_ray: Local<Option<Ray3d>>,
) {
    let (Some(window), Some(camera)) = (window, camera) else {
        return;
    };
    let Some((phase, screen)) = pointer(mouse.as_deref(), touches.as_deref(), &window) else {
        return;
    };

    let (camera, camera_tf) = camera.into_inner();
    let ray = screen
        .and_then(|p| camera.viewport_to_world(camera_tf, p).ok())
        .or(*last_ray);
    let Some(ray) = ray else {
        debug!("pointer has no world ray yet");
        return;
    };

    let gesture = match phase {
        Phase::Began => DragGesture::Began(ray),
        Phase::Moved => DragGesture::Moved(ray),
        Phase::Ended => DragGesture::Ended(ray),
    };
    *last_ray = match phase {
        Phase::Ended => None,
        _ => Some(ray),
    };
    gestures.write(gesture);
}
