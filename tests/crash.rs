mod common;

use approx::assert_relative_eq;
use common::{step_for, TestSimBuilder};
use nalgebra::Vector3;
use skycatch::{GamePhase, SimConfig, SurfaceTag};

#[test]
fn hazard_collision_crashes_and_freezes() {
    for surface in [SurfaceTag::Floor, SurfaceTag::Tower, SurfaceTag::CatchArms] {
        let (mut sim, body) = TestSimBuilder::new().build_with_shared_body();
        body.set_velocity(Vector3::new(0.5, -2.0, 0.1));

        sim.inject_collision(surface);
        sim.step(0.016);

        assert_eq!(sim.phase(), GamePhase::Crashed, "{} must crash", surface);
        assert!(sim.is_crashed());
        assert!(!sim.is_landed());
        let snapshot = body.snapshot();
        assert_relative_eq!(snapshot.velocity, Vector3::zeros());
        assert_relative_eq!(snapshot.angular_velocity, Vector3::zeros());
        assert!(snapshot.velocity_zeroed >= 1);
    }
}

#[test]
fn crash_notification_carries_net_flags() {
    let (mut sim, _body) = TestSimBuilder::new().build_with_shared_body();

    sim.inject_collision(SurfaceTag::Floor);
    sim.step(0.016);

    let transitions = sim.drain_transitions();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].from, GamePhase::Playing);
    assert_eq!(transitions[0].to, GamePhase::Crashed);
    assert!(transitions[0].crashed && !transitions[0].landed);
    assert!(sim.status().starts_with("CRASHED on floor"));
}

#[test]
fn non_hazard_contact_is_ignored() {
    let (mut sim, _body) = TestSimBuilder::new().build_with_shared_body();

    sim.inject_collision(SurfaceTag::Booster);
    sim.step(0.016);

    assert_eq!(sim.phase(), GamePhase::Playing);
    assert!(sim.drain_transitions().is_empty());
}

#[test]
fn collisions_after_crash_change_nothing() {
    let (mut sim, _body) = TestSimBuilder::new().build_with_shared_body();

    sim.inject_collision(SurfaceTag::Floor);
    sim.step(0.016);
    assert_eq!(sim.phase(), GamePhase::Crashed);
    sim.drain_transitions();

    sim.inject_collision(SurfaceTag::Tower);
    sim.step(0.016);
    assert_eq!(sim.phase(), GamePhase::Crashed);
    assert!(sim.drain_transitions().is_empty());
}

#[test]
fn falling_below_scene_bottom_is_lost_in_space() {
    let (mut sim, body) = TestSimBuilder::new().build_with_shared_body();
    let scene_bottom = SimConfig::default().episode.scene_bottom;

    body.set_position(Vector3::new(0.0, scene_bottom - 1.0, 0.0));
    sim.step(0.016);

    assert_eq!(sim.phase(), GamePhase::Crashed);
    assert_eq!(sim.status(), "Lost in space... Press R.");
}

#[test]
fn fall_out_signal_fires_once_per_descent() {
    let (mut sim, body) = TestSimBuilder::new().build_with_shared_body();
    body.set_position(Vector3::new(0.0, -30.0, 0.0));

    sim.step(0.016);
    assert_eq!(sim.phase(), GamePhase::Crashed);
    sim.drain_transitions();

    // The body keeps sitting below the bound; no repeated notifications
    step_for(&mut sim, 0.5, 0.016);
    assert!(sim.drain_transitions().is_empty());
}

#[test]
fn collision_during_reset_settle_is_ignored() {
    let (mut sim, _body) = TestSimBuilder::new()
        .with_settle_delay(0.2)
        .build_with_shared_body();

    sim.request_reset();
    sim.step(0.016);
    assert_eq!(sim.phase(), GamePhase::Resetting);

    // Stale contact from the spawn teleport arrives mid-settle
    sim.inject_collision(SurfaceTag::Floor);
    sim.step(0.016);
    assert_eq!(sim.phase(), GamePhase::Resetting);

    step_for(&mut sim, 0.3, 0.016);
    assert_eq!(sim.phase(), GamePhase::Playing);
    assert!(!sim.is_crashed());
}
