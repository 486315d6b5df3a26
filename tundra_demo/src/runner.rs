//! Demo scene and fixed-timestep run loop.
//!
//! A row of target boxes sits along +x; one box is thrown down the row and
//! knocks out every target it passes through.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tokio::time::Instant;
use tracing::info;
use tundra_core::{config::SceneConfig, math::Vec3, render::RecordingGraphics};

use crate::{headless::HeadlessScene, projectile_box::ProjectileBox};

/// Spacing between targets along x.
const TARGET_SPACING: f32 = 0.8;
/// Max sideways offset of a target. Keeps every target in the throw line.
const TARGET_JITTER: f32 = 0.1;
const THROW_ORIGIN: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
const THROW_DIRECTION: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub spawned: u64,
    pub killed: u64,
    pub alive: usize,
    pub draw_calls: usize,
}

/// Builds the demo scene described by `cfg`.
pub fn build_scene(cfg: &SceneConfig) -> anyhow::Result<HeadlessScene> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut scene = HeadlessScene::new();

    for i in 0..cfg.targets {
        let at = Vec3::new(
            1.0 + i as f32 * TARGET_SPACING,
            rng.gen_range(-TARGET_JITTER..=TARGET_JITTER),
            rng.gen_range(-TARGET_JITTER..=TARGET_JITTER),
        );
        scene.spawn(|host, game| ProjectileBox::placed(host, game, at))?;
    }
    scene.spawn(|host, game| ProjectileBox::thrown(host, game, THROW_ORIGIN, THROW_DIRECTION))?;

    info!(targets = cfg.targets, seed = cfg.seed, "Scene built");
    Ok(scene)
}

/// Steps `scene` for `cfg.ticks` ticks at `1 / cfg.tick_hz`.
///
/// With `cfg.realtime` each tick waits for its wall-clock slot.
pub async fn run_for_ticks(
    scene: &mut HeadlessScene,
    cfg: &SceneConfig,
) -> anyhow::Result<RunSummary> {
    let dt = cfg.tick_dt();
    let interval = Duration::from_secs_f32(dt);
    let mut graphics = RecordingGraphics::default();
    let mut draw_calls = 0;
    let mut next = Instant::now();

    for _ in 0..cfg.ticks {
        scene.step(dt, &mut graphics)?;
        draw_calls += graphics.calls.len();
        graphics.clear();

        if cfg.realtime {
            next += interval;
            tokio::time::sleep_until(next).await;
        }
    }

    let summary = RunSummary {
        ticks: scene.game().tick(),
        spawned: scene.spawned(),
        killed: scene.killed(),
        alive: scene.alive(),
        draw_calls,
    };
    info!(?summary, "Run finished");
    Ok(summary)
}
