//! Projectile boxes running inside the headless scene.

use tundra_core::prelude::*;
use tundra_demo::projectile_box::{TARGET_COLOUR, THROWN_COLOUR};
use tundra_demo::HeadlessScene;
use tundra_tests::{directional, init_tracing, place, position, throw};

const DT: f32 = 1.0 / 64.0;
const EAST: Vec3 = Vec3::new(1.0, 0.0, 0.0);

#[test]
fn thrown_box_destroys_target_it_reaches() -> anyhow::Result<()> {
    init_tracing();
    let mut scene = HeadlessScene::new();
    let target = place(&mut scene, Vec3::new(1.0, 0.0, 0.0))?;
    let bullet = throw(&mut scene, Vec3::new(-1.0, 0.0, 0.0), EAST)?;

    let mut g = NullGraphics;
    for _ in 0..16 {
        scene.step(DT, &mut g)?;
    }
    // 16 ticks at 5 u/s covers 1.25; not in reach yet.
    assert!(scene.contains(target));

    for _ in 0..16 {
        scene.step(DT, &mut g)?;
    }
    assert!(!scene.contains(target));
    assert!(scene.contains(bullet));
    assert_eq!(scene.killed(), 1);
    Ok(())
}

#[test]
fn thrown_boxes_pass_through_each_other() -> anyhow::Result<()> {
    let mut scene = HeadlessScene::new();
    let a = throw(&mut scene, Vec3::new(-1.0, 0.0, 0.0), EAST)?;
    let b = throw(&mut scene, Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))?;

    for _ in 0..32 {
        scene.step(DT, &mut NullGraphics)?;
    }
    assert!(scene.contains(a));
    assert!(scene.contains(b));
    let pa = position(&scene, a).expect("a alive");
    assert!(pa.x > 1.0, "a kept moving, at {pa:?}");
    Ok(())
}

#[test]
fn resting_boxes_ignore_each_other() -> anyhow::Result<()> {
    let mut scene = HeadlessScene::new();
    let a = place(&mut scene, Vec3::ZERO)?;
    let b = place(&mut scene, Vec3::new(0.1, 0.0, 0.0))?;
    scene.inject_contact(a, b);

    for _ in 0..4 {
        scene.step(DT, &mut NullGraphics)?;
    }
    assert_eq!(scene.alive(), 2);
    Ok(())
}

#[test]
fn duplicate_contacts_kill_once() -> anyhow::Result<()> {
    let mut scene = HeadlessScene::new();
    let target = place(&mut scene, Vec3::ZERO)?;
    let bullet = throw(&mut scene, Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO)?;
    scene.inject_contact(target, bullet);
    scene.inject_contact(bullet, target);
    scene.inject_contact(target, bullet);

    scene.step(DT, &mut NullGraphics)?;
    assert!(!scene.contains(target));
    assert_eq!(scene.killed(), 1);
    assert!(!scene.kill(target));
    Ok(())
}

#[test]
fn external_kill_is_terminal() -> anyhow::Result<()> {
    let mut scene = HeadlessScene::new();
    let bullet = throw(&mut scene, Vec3::ZERO, EAST)?;
    assert!(scene.kill(bullet));
    assert!(scene.kill(bullet));

    let mut g = RecordingGraphics::default();
    scene.step(DT, &mut g)?;
    assert!(g.calls.is_empty());
    assert_eq!(scene.alive(), 0);
    Ok(())
}

#[test]
fn mode_and_colour_hold_for_whole_lifetime() -> anyhow::Result<()> {
    let mut scene = HeadlessScene::new();
    let target = place(&mut scene, Vec3::new(0.0, 10.0, 0.0))?;
    let bullet = throw(&mut scene, Vec3::ZERO, EAST)?;

    let mut g = RecordingGraphics::default();
    for _ in 0..8 {
        scene.step(DT, &mut g)?;
        assert_eq!(directional(&scene, target), Some(false));
        assert_eq!(directional(&scene, bullet), Some(true));
    }

    assert_eq!(g.frames, 8);
    assert_eq!(g.calls.len(), 16);
    for pair in g.calls.chunks(2) {
        assert_eq!(pair[0].colour, TARGET_COLOUR);
        assert_eq!(pair[1].colour, THROWN_COLOUR);
    }

    // The draw transform follows the body, not the spawn point.
    let last = g.last().expect("drawn").transform.translation();
    let expected = 8.0 * DT * 5.0;
    assert!((last.x - expected).abs() < 1e-4);
    Ok(())
}

#[test]
fn invalid_spawn_leaves_scene_untouched() {
    let mut scene = HeadlessScene::new();
    let bad = Vec3::new(0.0, f32::INFINITY, 0.0);
    assert!(place(&mut scene, bad).is_err());
    assert!(throw(&mut scene, bad, EAST).is_err());
    assert_eq!(scene.spawned(), 0);
    assert!(scene.physics().is_empty());
}
