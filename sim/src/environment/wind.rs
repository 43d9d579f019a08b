use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::{compass_to_world, normalize_deg};

/// Operational wind speed bounds in m/s. Absolute observed range is 0..30;
/// the autonomous model never leaves this band.
pub(super) const WIND_SPEED_MIN: f32 = 1.0;
pub(super) const WIND_SPEED_MAX: f32 = 15.0;

/// Ambient wind state. `vector` is derived and recomputed whenever
/// direction or speed change; it always lies in the XZ plane with
/// `|vector| == speed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Meteorological direction in degrees, [0, 360): the bearing the wind
    /// blows FROM (0 = from north).
    pub direction_deg: f32,
    /// Speed in m/s, clamped to the operational band.
    pub speed: f32,
    /// World-space wind velocity (points where the air is going).
    pub vector: Vec3,
    /// Relative magnitude of gusts, as a fraction of current speed.
    pub gust_factor: f32,
    /// Probability per second of a direction/speed drift event.
    pub change_rate: f32,
}

impl Default for Wind {
    fn default() -> Self {
        let mut wind = Self {
            direction_deg: 45.0,
            speed: 5.0,
            vector: Vec3::ZERO,
            gust_factor: 0.3,
            change_rate: 0.1,
        };
        wind.refresh_vector();
        wind
    }
}

impl Wind {
    /// Recompute the derived velocity vector. The air moves toward the
    /// reciprocal of the meteorological direction.
    pub(super) fn refresh_vector(&mut self) {
        self.vector = compass_to_world(self.direction_deg + 180.0) * self.speed;
    }

    /// Apply external overrides with the same normalization/clamping as the
    /// autonomous path.
    pub(super) fn apply_override(&mut self, direction_deg: Option<f32>, speed: Option<f32>) {
        if let Some(d) = direction_deg {
            self.direction_deg = normalize_deg(d);
        }
        if let Some(s) = speed {
            self.speed = s.clamp(WIND_SPEED_MIN, WIND_SPEED_MAX);
        }
        self.refresh_vector();
    }

    /// One drift event: small uniform perturbation of direction and speed.
    pub(super) fn drift(&mut self, rng: &mut StdRng) {
        self.direction_deg = normalize_deg(self.direction_deg + rng.gen_range(-5.0..5.0));
        self.speed = (self.speed + rng.gen_range(-0.5..0.5)).clamp(WIND_SPEED_MIN, WIND_SPEED_MAX);
        self.refresh_vector();
    }

    /// One gust event: multiplicative speed kick within ±gust_factor.
    pub(super) fn gust(&mut self, rng: &mut StdRng) {
        if self.gust_factor <= 0.0 {
            return;
        }
        let kick = rng.gen_range(-self.gust_factor..self.gust_factor);
        self.speed = (self.speed * (1.0 + kick)).clamp(WIND_SPEED_MIN, WIND_SPEED_MAX);
        self.refresh_vector();
    }
}
