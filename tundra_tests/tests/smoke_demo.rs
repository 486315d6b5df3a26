use tundra_core::config::SceneConfig;
use tundra_demo::runner::{build_scene, run_for_ticks};

/// Smoke test: the demo scene runs to completion and clears every target.
#[tokio::test]
async fn demo_runs_to_completion() -> anyhow::Result<()> {
    tundra_tests::init_tracing();
    let cfg = SceneConfig::from_json_str(r#"{"ticks": 96, "targets": 3, "seed": 11}"#)?;
    let mut scene = build_scene(&cfg)?;
    let summary = run_for_ticks(&mut scene, &cfg).await?;

    assert_eq!(summary.ticks, 96);
    assert_eq!(summary.spawned, 4);
    assert_eq!(summary.killed, 3);
    assert_eq!(summary.alive, 1);
    assert!(summary.draw_calls >= 96);
    Ok(())
}

/// Realtime pacing only changes timing, not outcome.
#[tokio::test]
async fn realtime_run_matches_fast_run() -> anyhow::Result<()> {
    let fast = SceneConfig {
        ticks: 8,
        tick_hz: 200,
        ..Default::default()
    };
    let paced = SceneConfig {
        realtime: true,
        ..fast.clone()
    };

    let a = run_for_ticks(&mut build_scene(&fast)?, &fast).await?;
    let b = run_for_ticks(&mut build_scene(&paced)?, &paced).await?;
    assert_eq!(a, b);
    Ok(())
}
