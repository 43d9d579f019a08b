mod dynamics;
mod terms;
mod types;

pub use dynamics::{step_vessel, step_vessel_dbg};
pub use types::{Drive, StepDebug, VesselInputs, VesselState};
