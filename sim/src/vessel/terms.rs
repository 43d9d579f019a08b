use glam::Vec3;

use crate::VesselSpec;

// ----- Steering -----

/// Speed-dependent rudder effectiveness. Peaks in the 5-10 kn band and
/// falls off at very low speed (little water over the rudder) and at high
/// speed (reduced control authority).
pub(super) fn turn_efficiency(speed_kn: f32) -> f32 {
    let s = speed_kn.abs();
    if s < 1.0 {
        0.5 + 0.3 * s
    } else if s < 5.0 {
        0.8 + (s - 1.0) * 0.05
    } else if s < 10.0 {
        1.0
    } else {
        1.0 - 0.3f32.min((s - 10.0) * 0.03)
    }
}

/// Yaw torque from rudder deflection, N*m. Negative torque yaws the nose to
/// starboard (heading increases); `motion_sign` flips the response when
/// making sternway.
pub(super) fn rudder_torque(
    spec: &VesselSpec,
    rudder_rad: f32,
    efficiency: f32,
    motion_sign: f32,
) -> f32 {
    -rudder_rad * efficiency * motion_sign * spec.rudder_force_coeff * spec.length * 0.5
}

/// Hull yaw inertia about +Y, with the agility divisor folded in.
pub(super) fn yaw_inertia(spec: &VesselSpec) -> f32 {
    spec.mass * (spec.length * spec.length + spec.width * spec.width)
        / 12.0
        / spec.yaw_agility.max(1e-3)
}

// ----- Forces -----

pub(super) fn force_engine(spec: &VesselSpec, throttle: f32, forward: Vec3) -> Vec3 {
    forward * (spec.engine_power * throttle)
}

/// Auto-trim target for the boom, degrees. `rel_wind_deg` is the bearing the
/// apparent wind comes from relative to the bow, [0, 360): 0 = dead ahead,
/// 90 = over the starboard beam. The boom eases out as the wind goes aft,
/// capped at 80 degrees; its sign follows the windward side.
pub(super) fn sail_trim_target(rel_wind_deg: f32) -> f32 {
    if rel_wind_deg <= 180.0 {
        rel_wind_deg.clamp(0.0, 80.0)
    } else {
        (rel_wind_deg - 360.0).clamp(-80.0, 0.0)
    }
}

/// Sail drive along the bow. The sin(2a) factor kills drive both when the
/// sail is sheeted flat and when it is fully eased.
pub(super) fn force_sail(
    spec: &VesselSpec,
    sail_angle_rad: f32,
    apparent_speed: f32,
    forward: Vec3,
) -> Vec3 {
    let drive = (2.0 * sail_angle_rad.abs()).sin().max(0.0);
    forward * (spec.sail_force_coeff * drive * apparent_speed)
}

/// Lateral push from rudder deflection; makes the hull drift into the turn,
/// scaled by the same efficiency curve as the torque.
pub(super) fn force_rudder_lateral(
    spec: &VesselSpec,
    rudder_rad: f32,
    efficiency: f32,
    surge: f32,
    right: Vec3,
) -> Vec3 {
    right * (spec.rudder_force_coeff * rudder_rad * efficiency * surge)
}

/// Keel/hull resistance to sideways motion. Opposes the velocity component
/// along the right vector; this is what prevents pure lateral sliding.
pub(super) fn force_lateral_resistance(spec: &VesselSpec, velocity: Vec3, right: Vec3) -> Vec3 {
    let lateral = velocity.dot(right);
    right * (-spec.lateral_resistance_coeff * lateral)
}

/// Quadratic hull drag with a linear correction term, opposite velocity.
pub(super) fn force_drag(spec: &VesselSpec, velocity: Vec3) -> Vec3 {
    let v = velocity.length();
    if v < 1e-5 {
        return Vec3::ZERO;
    }
    let magnitude = spec.drag_coeff * (1.0 + v * 0.05) * v * v;
    velocity * (-magnitude / v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::motor_launch_spec;

    #[test]
    fn turn_efficiency_matches_table() {
        assert!((turn_efficiency(0.0) - 0.5).abs() < 1e-6);
        assert!((turn_efficiency(0.5) - 0.65).abs() < 1e-6);
        assert!((turn_efficiency(3.0) - 0.9).abs() < 1e-6);
        assert!((turn_efficiency(7.0) - 1.0).abs() < 1e-6);
        assert!((turn_efficiency(15.0) - 0.85).abs() < 1e-6);
        // Falloff saturates at -0.3
        assert!((turn_efficiency(40.0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn turn_efficiency_is_continuous_at_band_edges() {
        for edge in [1.0f32, 5.0, 10.0] {
            let below = turn_efficiency(edge - 1e-4);
            let above = turn_efficiency(edge + 1e-4);
            assert!((below - above).abs() < 1e-3, "jump at {edge} kn");
        }
    }

    #[test]
    fn drag_opposes_velocity_and_grows_superquadratically() {
        let spec = motor_launch_spec();
        let slow = force_drag(&spec, Vec3::new(0.0, 0.0, 2.0));
        let fast = force_drag(&spec, Vec3::new(0.0, 0.0, 4.0));
        assert!(slow.z < 0.0 && fast.z < 0.0);
        assert!(fast.z.abs() > 4.0 * slow.z.abs());
        assert_eq!(force_drag(&spec, Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn trim_target_is_symmetric_across_tacks() {
        assert_eq!(sail_trim_target(0.0), 0.0);
        assert_eq!(sail_trim_target(45.0), 45.0);
        assert_eq!(sail_trim_target(120.0), 80.0);
        assert_eq!(sail_trim_target(180.0), 80.0);
        assert_eq!(sail_trim_target(240.0), -80.0);
        assert_eq!(sail_trim_target(315.0), -45.0);
        for rel in [10.0f32, 60.0, 140.0, 179.0] {
            assert!(
                (sail_trim_target(rel) + sail_trim_target(360.0 - rel)).abs() < 1e-5,
                "asymmetric trim at rel={rel}"
            );
        }
    }

    #[test]
    fn lateral_resistance_opposes_sideslip_only() {
        let spec = motor_launch_spec();
        let right = Vec3::new(-1.0, 0.0, 0.0);
        let f = force_lateral_resistance(&spec, Vec3::new(0.5, 0.0, 3.0), right);
        // Sideslip of -0.5 along right; restoring force points along +right
        assert!(f.x < 0.0);
        assert_eq!(f.z, 0.0);
        let aligned = force_lateral_resistance(&spec, Vec3::new(0.0, 0.0, 3.0), right);
        assert!(aligned.length() < 1e-6);
    }
}
