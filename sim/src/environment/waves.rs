use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::math::normalize_deg;

/// Number of independent sinusoid components in the field.
pub(super) const WAVE_COMPONENT_COUNT: usize = 5;

/// Step used for the central-difference slope estimate, in meters.
const SLOPE_DELTA: f32 = 0.1;

/// Axis along which a surface slope is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

/// One sinusoidal term of the additive surface model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveComponent {
    pub amplitude: f32,
    pub frequency: f32,
    /// Travel direction as a plane angle in the XZ plane, degrees.
    pub direction_deg: f32,
    /// Running phase in radians, integrated by `speed * dt` each tick.
    pub phase: f32,
    pub speed: f32,
}

/// The ocean wave field: aggregate reference parameters plus the jittered
/// components actually summed by `height_at`. Deterministic given the
/// components and their integrated phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waves {
    /// When false the field contributes zero height and slope.
    pub active: bool,
    pub amplitude: f32,
    pub frequency: f32,
    /// Aggregate travel direction; tracks the wind direction with lag.
    pub direction_deg: f32,
    pub speed: f32,
    pub components: Vec<WaveComponent>,
}

impl Default for Waves {
    fn default() -> Self {
        Self {
            active: true,
            amplitude: 0.5,
            frequency: 0.2,
            direction_deg: 0.0,
            speed: 1.0,
            components: Vec::new(),
        }
    }
}

impl Waves {
    /// Rebuild the component set by jittering each parameter around the
    /// aggregate values. Phases start uniformly distributed so components
    /// never align at creation.
    pub(super) fn regenerate_components(&mut self, rng: &mut StdRng) {
        self.components = (0..WAVE_COMPONENT_COUNT)
            .map(|_| WaveComponent {
                amplitude: self.amplitude * rng.gen_range(0.6..1.4),
                frequency: self.frequency * rng.gen_range(0.5..1.5),
                direction_deg: normalize_deg(self.direction_deg + rng.gen_range(-30.0..30.0)),
                phase: rng.gen_range(0.0..TAU),
                speed: self.speed * rng.gen_range(0.8..1.2),
            })
            .collect();
    }

    /// Surface height at a world position: the sum of every component's
    /// sinusoid. Pure; the only time dependence is the integrated phase.
    pub fn height_at(&self, pos: Vec3) -> f32 {
        if !self.active {
            return 0.0;
        }
        self.components
            .iter()
            .map(|c| {
                let dir = c.direction_deg.to_radians();
                let proj = pos.x * dir.cos() + pos.z * dir.sin();
                c.amplitude * (c.frequency * proj + c.phase).sin()
            })
            .sum()
    }

    /// Local surface slope along `axis`, estimated by central difference.
    pub fn slope_at(&self, pos: Vec3, axis: Axis) -> f32 {
        let offset = match axis {
            Axis::X => Vec3::new(SLOPE_DELTA, 0.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, SLOPE_DELTA),
        };
        (self.height_at(pos + offset) - self.height_at(pos - offset)) / (2.0 * SLOPE_DELTA)
    }

    /// Upper bound on `|height_at|` anywhere in the field.
    pub fn max_height(&self) -> f32 {
        if !self.active {
            return 0.0;
        }
        self.components.iter().map(|c| c.amplitude.abs()).sum()
    }
}
