//! Shared simulation core for the sailing game.
//!
//! This crate intentionally avoids any rendering or transport types. It
//! exposes the ocean environment (wind + wave field), the vessel integrator,
//! and the snapshot-smoothing filter used by remote consumers. The server
//! drives it authoritatively; presentation layers only read snapshots.

mod math;
pub use math::{
    bearing_of, compass_to_world, heading_of, lerp_angle_deg, normalize_deg, smoothing_alpha,
    MS_TO_KNOTS,
};

pub mod environment;
pub use environment::{
    Axis, Environment, EnvironmentSnapshot, WaveComponent, Waves, WavesOverride, Wind,
    WindOverride,
};

pub mod vessel;
pub use vessel::{step_vessel, step_vessel_dbg, Drive, StepDebug, VesselInputs, VesselState};

mod vessel_specs;
pub use vessel_specs::presets;
pub use vessel_specs::VesselSpec;

pub mod replica;
pub use replica::{ReplicaFilter, ReplicaTarget};
