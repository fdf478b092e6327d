//! In-memory snapshot source
//!
//! Hands out clones of a fixed snapshot. Used by embedders that already hold
//! the records and by tests.

use crate::domain::entities::Snapshot;
use crate::domain::ports::SnapshotSource;
use crate::error::MissionResult;

#[derive(Debug, Clone)]
pub struct InMemorySnapshot {
    snapshot: Snapshot,
}

impl InMemorySnapshot {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for InMemorySnapshot {
    fn load(&self) -> MissionResult<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} founders)", self.snapshot.founders.len())
    }
}
