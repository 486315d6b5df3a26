//! Headless box demo.
//!
//! Usage:
//!   cargo run -p tundra_demo -- [--config scene.json] [--tick-hz 64] [--ticks 128]
//!                               [--targets 4] [--seed 7] [--realtime]
//!
//! Places a row of target boxes, throws one box through them, and prints a
//! JSON summary of what survived.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tundra_core::config::SceneConfig;
use tundra_demo::runner::{build_scene, run_for_ticks};

fn parse_args() -> anyhow::Result<SceneConfig> {
    let args: Vec<String> = env::args().collect();

    let mut cfg = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a path")?;
            SceneConfig::from_path(&PathBuf::from(path))?
        }
        None => SceneConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tick-hz" if i + 1 < args.len() => {
                cfg.tick_hz = args[i + 1].parse().unwrap_or(cfg.tick_hz);
                i += 2;
            }
            "--ticks" if i + 1 < args.len() => {
                cfg.ticks = args[i + 1].parse().unwrap_or(cfg.ticks);
                i += 2;
            }
            "--targets" if i + 1 < args.len() => {
                cfg.targets = args[i + 1].parse().unwrap_or(cfg.targets);
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                cfg.seed = args[i + 1].parse().unwrap_or(cfg.seed);
                i += 2;
            }
            "--realtime" => {
                cfg.realtime = true;
                i += 1;
            }
            _ => i += 1,
        }
    }
    Ok(cfg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = parse_args()?;
    info!(
        tick_hz = cfg.tick_hz,
        ticks = cfg.ticks,
        targets = cfg.targets,
        realtime = cfg.realtime,
        "Starting box demo"
    );

    let mut scene = build_scene(&cfg).context("build scene")?;
    let summary = run_for_ticks(&mut scene, &cfg).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
