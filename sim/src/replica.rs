//! Smoothing filter for authoritative state snapshots.
//!
//! Remote consumers do not re-simulate: they blend their displayed state
//! toward the last received snapshot each frame, snapping only on
//! teleport-scale errors. This is a fixed-rate catch-up, not prediction or
//! rollback.

use glam::{Quat, Vec3};

use crate::math::smoothing_alpha;

/// Position error beyond which the filter snaps instead of blending, m.
const SNAP_POSITION_ERROR: f32 = 10.0;
/// Orientation error beyond which the filter snaps, rad.
const SNAP_ANGLE_ERROR: f32 = 1.0;

/// Authoritative kinematic target extracted from a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaTarget {
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
}

/// Low-pass filter over authoritative targets.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaFilter {
    initialized: bool,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    /// Smoothing time constant, seconds.
    pub tau: f32,
}

impl Default for ReplicaFilter {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl ReplicaFilter {
    pub fn new(tau: f32) -> Self {
        Self {
            initialized: false,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            tau,
        }
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Blend toward `target` over `dt` seconds. The first target and any
    /// teleport-scale error snap immediately.
    pub fn apply(&mut self, target: &ReplicaTarget, dt: f32) {
        if !self.initialized {
            self.snap(target);
            return;
        }
        let pos_err = self.position.distance(target.position);
        let ang_err = self.orientation.angle_between(target.orientation);
        if pos_err > SNAP_POSITION_ERROR || ang_err > SNAP_ANGLE_ERROR {
            self.snap(target);
            return;
        }
        let alpha = smoothing_alpha(dt.max(1e-3), self.tau);
        self.position = self.position.lerp(target.position, alpha);
        self.orientation = self.orientation.slerp(target.orientation, alpha);
        self.velocity = self.velocity.lerp(target.velocity, alpha);
    }

    fn snap(&mut self, target: &ReplicaTarget) {
        self.position = target.position;
        self.orientation = target.orientation;
        self.velocity = target.velocity;
        self.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(pos: Vec3) -> ReplicaTarget {
        ReplicaTarget {
            position: pos,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
        }
    }

    #[test]
    fn first_target_snaps() {
        let mut filter = ReplicaFilter::default();
        filter.apply(&target(Vec3::new(3.0, 0.0, 4.0)), 1.0 / 60.0);
        assert!(filter.initialized());
        assert_eq!(filter.position, Vec3::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn teleport_snaps_instead_of_blending() {
        let mut filter = ReplicaFilter::default();
        filter.apply(&target(Vec3::ZERO), 1.0 / 60.0);
        filter.apply(&target(Vec3::new(50.0, 0.0, 0.0)), 1.0 / 60.0);
        assert_eq!(filter.position.x, 50.0);
    }

    #[test]
    fn converges_to_static_target() {
        let mut filter = ReplicaFilter::default();
        filter.apply(&target(Vec3::ZERO), 1.0 / 60.0);
        let goal = target(Vec3::new(2.0, 0.0, -1.0));
        for _ in 0..120 {
            filter.apply(&goal, 1.0 / 60.0);
        }
        assert!(filter.position.distance(goal.position) < 1e-2);
    }
}
