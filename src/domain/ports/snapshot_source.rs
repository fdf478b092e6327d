//! SnapshotSource port - abstraction over where domain records come from
//!
//! The engine never fetches anything itself. Whatever sits behind this
//! trait (a JSON export, a database client, a test fixture) hands over one
//! internally consistent snapshot per call.

use crate::domain::entities::Snapshot;
use crate::error::MissionResult;

/// Supplies a fresh, read-only snapshot of all dashboard records
pub trait SnapshotSource {
    /// Fetch every collection as of one point in time
    fn load(&self) -> MissionResult<Snapshot>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}
