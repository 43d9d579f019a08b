use glam::{Quat, Vec3};

/// Conversion from m/s to knots used for the speed readout.
pub const MS_TO_KNOTS: f32 = 1.94;

/// Normalize an angle in degrees to [0, 360).
#[inline]
pub fn normalize_deg(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Unit vector pointing toward a compass bearing, in the world XZ plane.
/// Convention: bearing 0 = +Z, bearing 90 = -X (compass turns clockwise,
/// which is the negated mathematical yaw).
#[inline]
pub fn compass_to_world(deg: f32) -> Vec3 {
    let r = deg.to_radians();
    Vec3::new(-r.sin(), 0.0, r.cos())
}

/// Compass bearing of the horizontal part of a world vector, in [0, 360).
/// Returns 0 for vectors with no horizontal component.
#[inline]
pub fn bearing_of(v: Vec3) -> f32 {
    if v.x.abs() < 1e-6 && v.z.abs() < 1e-6 {
        return 0.0;
    }
    normalize_deg((-v.x).atan2(v.z).to_degrees())
}

/// Compass heading of an orientation, derived from its forward vector
/// (body +Z) projected into the world XZ plane.
#[inline]
pub fn heading_of(q: Quat) -> f32 {
    let fwd = q * Vec3::Z;
    if fwd.x.abs() < 1e-6 && fwd.z.abs() < 1e-6 {
        // Pitched straight up or down; heading is undefined.
        return 0.0;
    }
    normalize_deg((-fwd.x).atan2(fwd.z).to_degrees())
}

/// Blend `from` toward `to` along the shortest arc, both in degrees.
#[inline]
pub fn lerp_angle_deg(from: f32, to: f32, alpha: f32) -> f32 {
    let diff = (to - from + 540.0).rem_euclid(360.0) - 180.0;
    normalize_deg(from + diff * alpha)
}

/// Fraction of the remaining gap a first-order filter closes over `dt`.
/// `tau` is the filter time constant in seconds.
#[inline]
pub fn smoothing_alpha(dt: f32, tau: f32) -> f32 {
    if tau <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / tau).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_covers_full_turns() {
        for k in -3i32..=3 {
            let base = 123.5;
            let n = normalize_deg(base + 360.0 * k as f32);
            assert!(
                (n - base).abs() < 1e-3,
                "normalize_deg({} + {k}*360) = {n}",
                base
            );
        }
        assert_eq!(normalize_deg(360.0), 0.0);
        let n = normalize_deg(-45.0);
        assert!((n - 315.0).abs() < 1e-4);
        assert!((0.0..360.0).contains(&normalize_deg(-0.0001)));
    }

    #[test]
    fn compass_frame_round_trips() {
        for deg in [0.0f32, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let v = compass_to_world(deg);
            assert!((v.length() - 1.0).abs() < 1e-5);
            assert_eq!(v.y, 0.0);
            assert!((bearing_of(v) - deg).abs() < 1e-2, "bearing({deg})");
        }
        // North is +Z, east is -X in this frame.
        assert!(compass_to_world(0.0).z > 0.99);
        assert!(compass_to_world(90.0).x < -0.99);
    }

    #[test]
    fn heading_matches_yaw_sign_convention() {
        for heading in [0.0f32, 30.0, 90.0, 200.0, 345.0] {
            let q = Quat::from_rotation_y(-heading.to_radians());
            assert!(
                (heading_of(q) - heading).abs() < 1e-2,
                "heading_of(yaw for {heading})"
            );
        }
    }

    #[test]
    fn angle_lerp_takes_shortest_arc() {
        let mid = lerp_angle_deg(350.0, 10.0, 0.5);
        assert!((mid - 0.0).abs() < 1e-3 || (mid - 360.0).abs() < 1e-3);
        let mid = lerp_angle_deg(10.0, 350.0, 0.5);
        assert!((mid - 0.0).abs() < 1e-3 || (mid - 360.0).abs() < 1e-3);
        assert!((lerp_angle_deg(90.0, 90.0, 0.3) - 90.0).abs() < 1e-5);
    }

    #[test]
    fn smoothing_alpha_is_zero_at_zero_dt() {
        assert_eq!(smoothing_alpha(0.0, 1.0), 0.0);
        let a1 = smoothing_alpha(1.0 / 60.0, 1.66);
        assert!((a1 - 0.01).abs() < 2e-3, "alpha at 60 Hz = {a1}");
        assert!(smoothing_alpha(10.0, 0.5) > 0.999);
    }
}
