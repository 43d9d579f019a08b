use serde::{Deserialize, Serialize};

/// Precomputed physics parameters for a vessel hull class. Shared by every
/// instance of the class; per-vessel state lives in `VesselState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub mass: f32,   // kg
    pub length: f32, // m
    pub width: f32,  // m
    /// Quadratic hull drag coefficient (with linear correction), tuned.
    pub drag_coeff: f32,
    /// Thrust at full throttle, N. Zero for pure sail hulls.
    pub engine_power: f32,
    /// Sail drive per m/s of apparent wind at ideal trim, N.
    pub sail_force_coeff: f32,
    pub rudder_force_coeff: f32,
    pub lateral_resistance_coeff: f32,
    /// Divisor applied to the hull yaw inertia; larger turns quicker.
    pub yaw_agility: f32,
    /// Yaw rate clamp, rad/s.
    pub max_yaw_rate: f32,
    pub max_rudder_deg: f32,
}

pub mod presets {
    use super::VesselSpec;

    /// Small coastal motor launch (engine drive), prototype scale, SI units.
    pub fn motor_launch_spec() -> VesselSpec {
        VesselSpec {
            mass: 2000.0,
            length: 8.0,
            width: 2.6,
            drag_coeff: 65.0,
            engine_power: 6000.0,
            sail_force_coeff: 0.0,
            rudder_force_coeff: 400.0,
            lateral_resistance_coeff: 3000.0,
            yaw_agility: 6.0,
            max_yaw_rate: 1.0,
            max_rudder_deg: 45.0,
        }
    }

    /// Single-masted sloop (sail drive). Lighter hull, more keel.
    pub fn sloop_spec() -> VesselSpec {
        VesselSpec {
            mass: 1500.0,
            length: 9.5,
            width: 3.0,
            drag_coeff: 55.0,
            engine_power: 0.0,
            sail_force_coeff: 450.0,
            rudder_force_coeff: 320.0,
            lateral_resistance_coeff: 3500.0,
            yaw_agility: 6.0,
            max_yaw_rate: 0.9,
            max_rudder_deg: 45.0,
        }
    }
}
