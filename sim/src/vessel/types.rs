use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::normalize_deg;

/// Propulsion strategy, selected per vessel instance. Rudder, drag and
/// lateral resistance are shared across variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Drive {
    /// Motor drive; throttle in [-1, 1], negative is astern.
    Engine { throttle: f32 },
    /// Sail drive. `sheet: None` trims the boom automatically toward the
    /// apparent wind; `Some(deg)` pins it for manual trim, in [-90, 90].
    Sail { sheet: Option<f32> },
}

impl Default for Drive {
    fn default() -> Self {
        Drive::Engine { throttle: 0.0 }
    }
}

/// Helm and drive inputs for one step. Out-of-range values are clamped at
/// use, never rejected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VesselInputs {
    /// Rudder deflection in degrees; positive turns the bow to starboard
    /// when moving ahead.
    pub rudder_deg: f32,
    pub drive: Drive,
}

/// Kinematic state of one vessel.
/// Frame conventions: body +Z forward, +Y up; world +Y up, compass heading
/// 0 = world +Z. Only the y component of `angular_velocity` is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    pub position: Vec3,
    /// Orientation as quaternion (body to world).
    pub orientation: Quat,
    /// World velocity in m/s.
    pub velocity: Vec3,
    /// Yaw rate lives in `.y`, rad/s.
    pub angular_velocity: Vec3,
    /// Compass heading in degrees [0, 360), derived from orientation yaw.
    pub heading_deg: f32,
    /// Speed over ground in knots.
    pub speed_kn: f32,
    /// Current boom angle for sail drives, degrees; smoothed toward the
    /// trim target each step.
    pub sail_angle_deg: f32,
}

impl VesselState {
    pub fn new(position: Vec3, heading_deg: f32) -> Self {
        let heading_deg = normalize_deg(heading_deg);
        Self {
            position,
            orientation: Quat::from_rotation_y(-heading_deg.to_radians()),
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            heading_deg,
            speed_kn: 0.0,
            sail_angle_deg: 0.0,
        }
    }
}

/// Per-step telemetry, filled by `step_vessel_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f32,
    pub rudder_deg: f32,
    // Horizontal body basis used by the force model
    pub forward: Vec3,
    pub right: Vec3,
    // Velocity decomposition
    pub surge: f32,
    pub speed_kn: f32,
    // Sail diagnostics (zero for engine drives)
    pub apparent_wind: Vec3,
    pub rel_wind_deg: f32,
    pub sail_target_deg: f32,
    // Forces (world frame)
    pub f_drive: Vec3,
    pub f_rudder_lat: Vec3,
    pub f_lateral_res: Vec3,
    pub f_drag: Vec3,
    pub f_net: Vec3,
    // Yaw dynamics
    pub turn_efficiency: f32,
    pub torque: f32,
    pub yaw_acc: f32,
    pub yaw_rate: f32,
    pub heading_deg: f32,
    // Wave coupling
    pub wave_height: f32,
    pub slope_x: f32,
    pub slope_z: f32,
}
