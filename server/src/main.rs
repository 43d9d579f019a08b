use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use server::{load_config, Args, Config, LogSink, Session, SnapshotSink};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    info!(?cfg, "Session config loaded");

    run(cfg)
}

fn run(cfg: Config) -> Result<()> {
    let dt = 1.0 / cfg.tick_hz.max(1) as f32;
    let tick_period = Duration::from_secs_f32(dt);
    let mut session = Session::new(&cfg);
    let mut sink = LogSink;
    info!(
        tick_hz = cfg.tick_hz,
        snapshot_hz = cfg.snapshot_hz,
        "Session running"
    );

    let mut next_tick = Instant::now() + tick_period;
    loop {
        if let Some(delta) = session.tick(dt) {
            sink.publish(&delta);
        }
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        }
        next_tick += tick_period;
    }
}
