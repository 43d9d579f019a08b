use glam::{EulerRot, Quat, Vec3};

use super::terms::*;
use super::types::{Drive, StepDebug, VesselInputs, VesselState};
use crate::environment::{Axis, EnvironmentSnapshot};
use crate::math::{bearing_of, compass_to_world, heading_of, normalize_deg, smoothing_alpha, MS_TO_KNOTS};
use crate::VesselSpec;

/// Hard cap on the integration step. Larger frame gaps (pause, tab hide)
/// are clamped, not rejected.
pub(super) const MAX_STEP_DT: f32 = 0.1;

/// Boom trim filter time constant (0.1 per frame at the historical 60 Hz).
const SAIL_TRIM_TAU: f32 = 0.16;

/// Yaw-rate free-decay time constant with the helm centered (~0.975 per
/// frame at 60 Hz).
const YAW_DECAY_TAU: f32 = 0.66;

/// Attitude follows the local wave surface with this gain, 1/s.
const WAVE_ATTITUDE_RATE: f32 = 2.0;

/// Advance one vessel by `dt` seconds against an environment snapshot.
/// See `step_vessel_dbg` for full details and telemetry.
pub fn step_vessel(
    env: &EnvironmentSnapshot,
    spec: &VesselSpec,
    inputs: VesselInputs,
    state: &mut VesselState,
    dt: f32,
) {
    step_vessel_dbg(env, spec, inputs, state, dt, None);
}

/// Variant of `step_vessel` that fills out an optional telemetry struct.
///
/// Fixed step order: force accumulation, linear integration, yaw dynamics,
/// orientation update, heading/speed derivation, wave coupling. Controls are
/// clamped here rather than at the call site so any input source gets the
/// same treatment.
pub fn step_vessel_dbg(
    env: &EnvironmentSnapshot,
    spec: &VesselSpec,
    inputs: VesselInputs,
    state: &mut VesselState,
    dt: f32,
    mut dbg: Option<&mut StepDebug>,
) {
    let dt = dt.min(MAX_STEP_DT);
    if dt <= 0.0 {
        return;
    }

    let heading_deg = heading_of(state.orientation);
    // Horizontal body basis; wave pitch/roll never feeds the force model.
    let forward = compass_to_world(heading_deg);
    let right = forward.cross(Vec3::Y);

    let surge = state.velocity.dot(forward);
    let motion_sign = if surge >= 0.0 { 1.0 } else { -1.0 };
    let speed_kn = state.velocity.length() * MS_TO_KNOTS;
    let efficiency = turn_efficiency(speed_kn);

    let rudder_deg = inputs
        .rudder_deg
        .clamp(-spec.max_rudder_deg, spec.max_rudder_deg);
    let rudder_rad = rudder_deg.to_radians();

    let mut apparent_wind = Vec3::ZERO;
    let mut rel_wind_deg = 0.0;
    let mut sail_target_deg = 0.0;
    let f_drive = match inputs.drive {
        Drive::Engine { throttle } => force_engine(spec, throttle.clamp(-1.0, 1.0), forward),
        Drive::Sail { sheet } => {
            apparent_wind = env.wind.vector - state.velocity;
            let apparent_speed = apparent_wind.length();
            // Bearing the apparent wind comes from, relative to the bow.
            rel_wind_deg = normalize_deg(bearing_of(-apparent_wind) - heading_deg);
            sail_target_deg = match sheet {
                Some(s) => s.clamp(-90.0, 90.0),
                None => sail_trim_target(rel_wind_deg),
            };
            let alpha = smoothing_alpha(dt, SAIL_TRIM_TAU);
            state.sail_angle_deg += (sail_target_deg - state.sail_angle_deg) * alpha;
            force_sail(
                spec,
                state.sail_angle_deg.to_radians(),
                apparent_speed,
                forward,
            )
        }
    };

    let f_rudder_lat = force_rudder_lateral(spec, rudder_rad, efficiency, surge, right);
    let f_lateral_res = force_lateral_resistance(spec, state.velocity, right);
    let f_drag = force_drag(spec, state.velocity);
    let f_net = f_drive + f_rudder_lat + f_lateral_res + f_drag;

    let accel = f_net / spec.mass.max(1e-3);
    state.velocity += accel * dt;
    state.position += state.velocity * dt;

    // Yaw dynamics: rudder torque integrates the yaw rate; a centered helm
    // lets it decay instead of snapping to zero.
    let torque;
    let yaw_acc;
    if rudder_rad.abs() > 1e-4 {
        torque = rudder_torque(spec, rudder_rad, efficiency, motion_sign);
        yaw_acc = torque / yaw_inertia(spec);
        state.angular_velocity.y = (state.angular_velocity.y + yaw_acc * dt)
            .clamp(-spec.max_yaw_rate, spec.max_yaw_rate);
    } else {
        torque = 0.0;
        yaw_acc = 0.0;
        state.angular_velocity.y *= (-dt / YAW_DECAY_TAU).exp();
    }

    let delta = Quat::from_axis_angle(Vec3::Y, state.angular_velocity.y * dt);
    state.orientation = (delta * state.orientation).normalize();

    state.heading_deg = heading_of(state.orientation);
    state.speed_kn = state.velocity.length() * MS_TO_KNOTS;

    let (wave_height, slope_x, slope_z) = apply_wave_attitude(env, state, dt);

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.rudder_deg = rudder_deg;
        d.forward = forward;
        d.right = right;
        d.surge = surge;
        d.speed_kn = state.speed_kn;
        d.apparent_wind = apparent_wind;
        d.rel_wind_deg = rel_wind_deg;
        d.sail_target_deg = sail_target_deg;
        d.f_drive = f_drive;
        d.f_rudder_lat = f_rudder_lat;
        d.f_lateral_res = f_lateral_res;
        d.f_drag = f_drag;
        d.f_net = f_net;
        d.turn_efficiency = efficiency;
        d.torque = torque;
        d.yaw_acc = yaw_acc;
        d.yaw_rate = state.angular_velocity.y;
        d.heading_deg = state.heading_deg;
        d.wave_height = wave_height;
        d.slope_x = slope_x;
        d.slope_z = slope_z;
    }
}

/// Ride the wave surface: the hull takes the local height exactly (no
/// buoyancy spring) and the attitude eases toward the local surface tilt.
fn apply_wave_attitude(
    env: &EnvironmentSnapshot,
    state: &mut VesselState,
    dt: f32,
) -> (f32, f32, f32) {
    let height = env.waves.height_at(state.position);
    state.position.y = height;
    let slope_x = env.waves.slope_at(state.position, Axis::X);
    let slope_z = env.waves.slope_at(state.position, Axis::Z);
    let yaw = -state.heading_deg.to_radians();
    let target = Quat::from_euler(EulerRot::YXZ, yaw, -slope_z * 0.5, slope_x * 0.5);
    let blend = (WAVE_ATTITUDE_RATE * dt).min(1.0);
    state.orientation = state.orientation.slerp(target, blend);
    (height, slope_x, slope_z)
}
