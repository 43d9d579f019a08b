//! Authoritative session host for the sailing simulation.
//!
//! Owns the environment and every vessel, advances them at a fixed tick, and
//! emits `protocol::StateDelta` snapshots at the broadcast cadence. The
//! concrete transport is out of scope; snapshots go to a pluggable sink.

mod config;
mod session;
mod sink;

pub use config::{load_config, Args, Config};
pub use session::{Player, Session};
pub use sink::{BufferSink, LogSink, SnapshotSink};
