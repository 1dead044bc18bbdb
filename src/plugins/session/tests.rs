use bevy::prelude::*;

use crate::common::test_utils::{drain_messages, init_messages, run_system_once};
use crate::plugins::launcher::{AmmoChanged, LauncherCommand};
use crate::plugins::projectiles::{ProjectileSpent, SpentCause};
use crate::plugins::surface::Surface;
use crate::plugins::targets::{TargetDestroyed, WanderingTarget};

use super::systems::{start_on_input, track_round};
use super::{FinalShot, RoundEndReason, RoundEnded, RoundPhase, Score, StartRound, TargetRoster};

fn session_world(phase: RoundPhase) -> World {
    let mut world = World::new();
    world.insert_resource(phase);
    world.init_resource::<Score>();
    world.init_resource::<TargetRoster>();
    world.init_resource::<FinalShot>();
    init_messages::<TargetDestroyed>(&mut world);
    init_messages::<AmmoChanged>(&mut world);
    init_messages::<ProjectileSpent>(&mut world);
    init_messages::<LauncherCommand>(&mut world);
    init_messages::<RoundEnded>(&mut world);
    init_messages::<StartRound>(&mut world);
    world
}

/// Add `n` moving targets with ids `1..=n` to the roster.
fn add_targets(world: &mut World, n: u32) -> Vec<Entity> {
    let surface = Surface::new(Vec3::ZERO, Vec2::ONE);
    let surface_e = world.spawn(surface).id();
    let mut out = Vec::new();
    for id in 1..=n {
        let mut tf = Transform::default();
        let mut wander = WanderingTarget::new(0.1);
        wander.start_moving(surface_e, &surface, &mut tf, || None);
        let e = world.spawn((wander, tf)).id();
        world.resource_mut::<TargetRoster>().insert(id, e);
        out.push(e);
    }
    out
}

fn spent(world: &mut World) {
    let projectile = world.spawn_empty().id();
    world.write_message(ProjectileSpent {
        projectile,
        launcher: None,
        cause: SpentCause::Expired,
    });
}

#[test]
fn roster_tracks_ids() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    let mut roster = TargetRoster::default();
    roster.insert(1, a);
    roster.insert(2, b);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(2), Some(b));
    assert_eq!(roster.remove(1), Some(a));
    assert_eq!(roster.remove(1), None);

    let drained: Vec<_> = roster.drain().collect();
    assert_eq!(drained, vec![b]);
    assert!(roster.is_empty());
}

#[test]
fn destroying_every_target_ends_the_round() {
    let mut world = session_world(RoundPhase::Playing);
    add_targets(&mut world, 2);

    world.write_message(TargetDestroyed { id: 1, points: 12 });
    run_system_once(&mut world, track_round);
    assert_eq!(world.resource::<Score>().0, 12);
    assert_eq!(*world.resource::<RoundPhase>(), RoundPhase::Playing);
    assert!(drain_messages::<RoundEnded>(&mut world).is_empty());

    world.write_message(TargetDestroyed { id: 2, points: 10 });
    run_system_once(&mut world, track_round);

    assert_eq!(
        drain_messages::<RoundEnded>(&mut world),
        vec![RoundEnded {
            score: 22,
            reason: RoundEndReason::AllTargetsDestroyed,
        }]
    );
    assert_eq!(drain_messages::<LauncherCommand>(&mut world), vec![LauncherCommand::Reset]);
    assert_eq!(*world.resource::<RoundPhase>(), RoundPhase::Ended);
}

#[test]
fn round_ends_when_the_final_shot_is_spent() {
    let mut world = session_world(RoundPhase::Playing);
    let targets = add_targets(&mut world, 3);

    // A spent shot while ammo remains changes nothing.
    world.write_message(AmmoChanged { remaining: 1 });
    spent(&mut world);
    run_system_once(&mut world, track_round);
    assert!(drain_messages::<RoundEnded>(&mut world).is_empty());

    // Last projectile loaded: the round waits for it.
    world.write_message(AmmoChanged { remaining: 0 });
    run_system_once(&mut world, track_round);
    assert!(drain_messages::<RoundEnded>(&mut world).is_empty());

    world.write_message(TargetDestroyed { id: 3, points: 11 });
    spent(&mut world);
    run_system_once(&mut world, track_round);

    assert_eq!(
        drain_messages::<RoundEnded>(&mut world),
        vec![RoundEnded {
            score: 11,
            reason: RoundEndReason::OutOfAmmo,
        }]
    );
    for e in &targets[..2] {
        assert!(!world.get::<WanderingTarget>(*e).unwrap().is_moving());
    }
}

#[test]
fn final_shot_on_the_last_target_counts_as_a_clear() {
    let mut world = session_world(RoundPhase::Playing);
    add_targets(&mut world, 1);

    world.write_message(AmmoChanged { remaining: 0 });
    run_system_once(&mut world, track_round);

    world.write_message(TargetDestroyed { id: 1, points: 13 });
    spent(&mut world);
    run_system_once(&mut world, track_round);

    let ended = drain_messages::<RoundEnded>(&mut world);
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].reason, RoundEndReason::AllTargetsDestroyed);
    assert_eq!(ended[0].score, 13);
}

#[test]
fn nothing_scores_outside_a_round() {
    let mut world = session_world(RoundPhase::Ended);
    add_targets(&mut world, 1);

    world.write_message(AmmoChanged { remaining: 0 });
    world.write_message(TargetDestroyed { id: 1, points: 10 });
    spent(&mut world);
    run_system_once(&mut world, track_round);

    assert_eq!(world.resource::<Score>().0, 0);
    assert!(world.resource::<TargetRoster>().is_empty());
    assert!(drain_messages::<RoundEnded>(&mut world).is_empty());
    assert!(drain_messages::<LauncherCommand>(&mut world).is_empty());
}

#[test]
fn enter_starts_a_round_only_between_rounds() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Enter);

    let mut world = session_world(RoundPhase::Ready);
    world.insert_resource(keys.clone());
    run_system_once(&mut world, start_on_input);
    assert_eq!(drain_messages::<StartRound>(&mut world).len(), 1);

    let mut world = session_world(RoundPhase::Playing);
    world.insert_resource(keys);
    run_system_once(&mut world, start_on_input);
    assert!(drain_messages::<StartRound>(&mut world).is_empty());
}

#[test]
fn no_input_devices_means_no_start() {
    let mut world = session_world(RoundPhase::Ended);
    run_system_once(&mut world, start_on_input);
    assert!(drain_messages::<StartRound>(&mut world).is_empty());
}
