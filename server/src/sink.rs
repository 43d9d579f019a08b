use protocol::StateDelta;
use tracing::debug;

/// Receives each broadcast-ready snapshot. The real pub/sub transport lives
/// outside this crate; tests and tooling plug in their own sink.
pub trait SnapshotSink {
    fn publish(&mut self, delta: &StateDelta);
}

/// Default sink: log and drop.
#[derive(Debug, Default)]
pub struct LogSink;

impl SnapshotSink for LogSink {
    fn publish(&mut self, delta: &StateDelta) {
        debug!(
            tick = delta.tick,
            vessels = delta.vessels.len(),
            "state delta ready"
        );
    }
}

/// Keeps every published delta in memory.
#[derive(Debug, Default)]
pub struct BufferSink(pub Vec<StateDelta>);

impl SnapshotSink for BufferSink {
    fn publish(&mut self, delta: &StateDelta) {
        self.0.push(delta.clone());
    }
}
