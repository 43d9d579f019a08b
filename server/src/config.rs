use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(name = "sail-server", about = "Authoritative sailing simulation host")]
pub struct Args {
    /// Path to the TOML config file.
    #[arg(long, default_value = "server.toml")]
    pub config: String,
    /// Override the environment RNG seed from the config.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation tick rate, Hz.
    pub tick_hz: u32,
    /// Snapshot broadcast rate, Hz. Realized as a whole tick divider.
    pub snapshot_hz: u32,
    /// Environment RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub wind_direction_deg: f32,
    pub wind_speed: f32,
    pub waves_active: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            snapshot_hz: 20,
            seed: None,
            wind_direction_deg: 45.0,
            wind_speed: 5.0,
            waves_active: true,
        }
    }
}

/// Load the session config, falling back to defaults when the file is
/// absent. A present-but-malformed file is an error.
pub fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        warn!(path, "Config file not found; using defaults");
        return Ok(Config::default());
    }
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
    let cfg = toml::from_str(&raw).with_context(|| format!("parsing config file {path}"))?;
    Ok(cfg)
}
