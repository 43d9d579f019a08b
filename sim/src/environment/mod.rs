//! Ambient ocean environment: wind plus a multi-component wave field.
//!
//! The environment is advanced once per frame, before any vessel step, and
//! hands out value snapshots so every vessel in a frame observes the same
//! wind and wave phases.

mod waves;
mod wind;

pub use waves::{Axis, WaveComponent, Waves};
pub use wind::Wind;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::math::{lerp_angle_deg, normalize_deg, smoothing_alpha};

/// Probability per second of a gust event, independent of drift.
const GUST_PROBABILITY_PER_S: f32 = 0.1;

/// Time constant for the slow wave-field tracking filters (amplitude toward
/// wind, component direction toward aggregate). Calibrated to the historical
/// per-frame factor of 0.01 at 60 Hz.
const WAVE_TRACKING_TAU: f32 = 1.66;

/// Per-event pull of the aggregate wave direction toward a freshly drifted
/// wind direction.
const WAVE_DIRECTION_NUDGE: f32 = 0.01;

/// Value snapshot handed to vessels and serialized for synchronization.
/// Consumers must treat it as immutable; it is a plain copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub wind: Wind,
    pub waves: Waves,
}

/// External override for the wind state; absent fields are left untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WindOverride {
    pub direction_deg: Option<f32>,
    pub speed: Option<f32>,
}

/// External override for the wave field. If any aggregate parameter changes
/// and `components` is absent, the component set is regenerated from the new
/// aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WavesOverride {
    pub active: Option<bool>,
    pub amplitude: Option<f32>,
    pub frequency: Option<f32>,
    pub direction_deg: Option<f32>,
    pub speed: Option<f32>,
    pub components: Option<Vec<WaveComponent>>,
}

/// Owns wind and wave state plus the RNG driving the stochastic paths.
/// A given seed reproduces the exact same weather evolution.
#[derive(Debug, Clone)]
pub struct Environment {
    pub wind: Wind,
    pub waves: Waves,
    rng: StdRng,
}

impl Environment {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let wind = Wind::default();
        // The sea starts aligned with the wind and keeps tracking it with lag.
        let mut waves = Waves {
            direction_deg: wind.direction_deg,
            ..Waves::default()
        };
        waves.regenerate_components(&mut rng);
        Self { wind, waves, rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Advance wind and waves by `dt` seconds and return a snapshot.
    /// `advance(0.0)` is a pure peek: no state mutation, no RNG draws.
    pub fn advance(&mut self, dt: f32) -> EnvironmentSnapshot {
        if dt > 0.0 {
            if self.rng.gen::<f32>() < self.wind.change_rate * dt {
                self.wind.drift(&mut self.rng);
                self.waves.direction_deg = lerp_angle_deg(
                    self.waves.direction_deg,
                    self.wind.direction_deg,
                    WAVE_DIRECTION_NUDGE,
                );
                trace!(
                    direction = self.wind.direction_deg,
                    speed = self.wind.speed,
                    "wind drift"
                );
            }
            if self.rng.gen::<f32>() < GUST_PROBABILITY_PER_S * dt {
                self.wind.gust(&mut self.rng);
                trace!(speed = self.wind.speed, "wind gust");
            }

            let alpha = smoothing_alpha(dt, WAVE_TRACKING_TAU);
            self.waves.amplitude += (self.wind.speed * 0.1 - self.waves.amplitude) * alpha;
            let aggregate_dir = self.waves.direction_deg;
            for c in &mut self.waves.components {
                c.phase += c.speed * dt;
                c.direction_deg = lerp_angle_deg(c.direction_deg, aggregate_dir, alpha);
            }
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            wind: self.wind.clone(),
            waves: self.waves.clone(),
        }
    }

    pub fn height_at(&self, pos: Vec3) -> f32 {
        self.waves.height_at(pos)
    }

    pub fn slope_at(&self, pos: Vec3, axis: Axis) -> f32 {
        self.waves.slope_at(pos, axis)
    }

    /// Server/scenario-driven wind override; clamps and renormalizes exactly
    /// like the autonomous path.
    pub fn set_wind(&mut self, ovr: WindOverride) {
        self.wind.apply_override(ovr.direction_deg, ovr.speed);
    }

    /// Server/scenario-driven wave override. A change to any aggregate
    /// parameter without explicit components rebuilds the component set.
    pub fn set_waves(&mut self, ovr: WavesOverride) {
        if let Some(active) = ovr.active {
            self.waves.active = active;
        }
        let mut parameters_changed = false;
        if let Some(a) = ovr.amplitude {
            self.waves.amplitude = a.max(0.0);
            parameters_changed = true;
        }
        if let Some(f) = ovr.frequency {
            self.waves.frequency = f.max(0.0);
            parameters_changed = true;
        }
        if let Some(d) = ovr.direction_deg {
            self.waves.direction_deg = normalize_deg(d);
            parameters_changed = true;
        }
        if let Some(s) = ovr.speed {
            self.waves.speed = s.max(0.0);
            parameters_changed = true;
        }
        match ovr.components {
            Some(components) => self.waves.components = components,
            None if parameters_changed => self.waves.regenerate_components(&mut self.rng),
            None => {}
        }
    }
}
