use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::launcher::{AmmoChanged, LauncherCommand};
use crate::plugins::projectiles::ProjectileSpent;
use crate::plugins::surface::{SelectedSurface, Surface, SurfaceSelected};
use crate::plugins::targets::wander::{cast_down, random_destination};
use crate::plugins::targets::{spawn_target, TargetDestroyed, WanderingTarget};
use crate::plugins::visuals::VisualAssets;

use super::{FinalShot, RoundEndReason, RoundEnded, RoundPhase, Score, StartRound, TargetRoster};

/// Enter/Space, or a click/tap while no round is running.
pub(super) fn start_on_input(
    phase: Res<RoundPhase>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut start: MessageWriter<StartRound>,
) {
    if !matches!(*phase, RoundPhase::Ready | RoundPhase::Ended) {
        return;
    }

    let key = keys.is_some_and(|k| k.any_just_pressed([KeyCode::Enter, KeyCode::Space]));
    let click = mouse.is_some_and(|m| m.just_pressed(MouseButton::Left));
    let tap = touches.is_some_and(|t| t.any_just_pressed());

    if key || click || tap {
        start.write(StartRound);
    }
}

/// Replace the roster with `tunables.target_count` fresh targets on `surface`.
fn respawn_targets(
    commands: &mut Commands,
    roster: &mut TargetRoster,
    surface_entity: Entity,
    surface: &Surface,
    tunables: &Tunables,
    visuals: Option<&VisualAssets>,
    spatial: &SpatialQuery,
) {
    for e in roster.drain() {
        if let Ok(mut ec) = commands.get_entity(e) {
            ec.despawn();
        }
    }

    let mut rng = rand::rng();
    for id in 1..=tunables.target_count {
        let e = spawn_target(commands, id, surface_entity, surface, tunables, visuals, || {
            random_destination(
                &mut rng,
                surface_entity,
                surface,
                tunables.target_half_height,
                tunables.ray_offset,
                |origin| cast_down(spatial, origin),
            )
        });
        roster.insert(id, e);
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn select_surface(
    mut commands: Commands,
    mut selected_msgs: MessageReader<SurfaceSelected>,
    tunables: Res<Tunables>,
    visuals: Option<Res<VisualAssets>>,
    spatial: SpatialQuery,
    q_surfaces: Query<&Surface>,
    mut selected: ResMut<SelectedSurface>,
    mut roster: ResMut<TargetRoster>,
    mut phase: ResMut<RoundPhase>,
    mut launcher: MessageWriter<LauncherCommand>,
) {
    let Some(SurfaceSelected(surface_entity)) = selected_msgs.read().last().copied() else {
        return;
    };
    let Ok(surface) = q_surfaces.get(surface_entity) else {
        debug!("selected surface {surface_entity} has no Surface component");
        return;
    };

    if *phase == RoundPhase::Playing {
        launcher.write(LauncherCommand::Reset);
    }

    selected.0 = Some(surface_entity);
    respawn_targets(
        &mut commands,
        &mut roster,
        surface_entity,
        surface,
        &tunables,
        visuals.as_deref(),
        &spatial,
    );
    *phase = RoundPhase::Ready;
    info!("surface {surface_entity} selected, {} targets placed", roster.len());
}

#[allow(clippy::too_many_arguments)]
pub(super) fn start_round(
    mut commands: Commands,
    mut starts: MessageReader<StartRound>,
    tunables: Res<Tunables>,
    visuals: Option<Res<VisualAssets>>,
    spatial: SpatialQuery,
    q_surfaces: Query<&Surface>,
    selected: Res<SelectedSurface>,
    mut roster: ResMut<TargetRoster>,
    mut phase: ResMut<RoundPhase>,
    mut score: ResMut<Score>,
    mut final_shot: ResMut<FinalShot>,
    mut launcher: MessageWriter<LauncherCommand>,
) {
    if starts.read().count() == 0 {
        return;
    }
    if !matches!(*phase, RoundPhase::Ready | RoundPhase::Ended) {
        debug!("start ignored in phase {:?}", *phase);
        return;
    }

    if *phase == RoundPhase::Ended {
        let Some(surface_entity) = selected.0 else {
            return;
        };
        let Ok(surface) = q_surfaces.get(surface_entity) else {
            return;
        };
        respawn_targets(
            &mut commands,
            &mut roster,
            surface_entity,
            surface,
            &tunables,
            visuals.as_deref(),
            &spatial,
        );
    }

    score.0 = 0;
    final_shot.0 = false;
    launcher.write(LauncherCommand::InitializeAmmo(tunables.ammo_count));
    *phase = RoundPhase::Playing;
    info!("round started: {} targets, {} ammo", roster.len(), tunables.ammo_count);
}

#[allow(clippy::too_many_arguments)]
pub(super) fn track_round(
    mut destroyed: MessageReader<TargetDestroyed>,
    mut ammo: MessageReader<AmmoChanged>,
    mut spent: MessageReader<ProjectileSpent>,
    mut roster: ResMut<TargetRoster>,
    mut phase: ResMut<RoundPhase>,
    mut score: ResMut<Score>,
    mut final_shot: ResMut<FinalShot>,
    mut q_wander: Query<&mut WanderingTarget>,
    mut launcher: MessageWriter<LauncherCommand>,
    mut ended: MessageWriter<RoundEnded>,
) {
    let playing = *phase == RoundPhase::Playing;

    for ev in destroyed.read() {
        roster.remove(ev.id);
        if playing {
            score.0 += ev.points;
        }
    }

    for ev in ammo.read() {
        if playing && ev.remaining == 0 {
            final_shot.0 = true;
        }
    }

    let any_spent = spent.read().count() > 0;
    if !playing {
        return;
    }

    let reason = if roster.is_empty() {
        RoundEndReason::AllTargetsDestroyed
    } else if final_shot.0 && any_spent {
        RoundEndReason::OutOfAmmo
    } else {
        return;
    };

    for e in roster.entities() {
        if let Ok(mut wander) = q_wander.get_mut(e) {
            wander.stop_moving();
        }
    }
    launcher.write(LauncherCommand::Reset);
    ended.write(RoundEnded {
        score: score.0,
        reason,
    });
    final_shot.0 = false;
    *phase = RoundPhase::Ended;
    info!("round ended ({reason:?}) with score {}", score.0);
}
