//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `snapshot/` - Snapshot sources (JSON export file, in-memory)
//! - `settings` - Sprint settings from the key/value config table

pub mod settings;
pub mod snapshot;

// Re-export for convenience
pub use settings::{resolve_settings, ConfigRow};
pub use snapshot::{InMemorySnapshot, JsonSnapshotFile, SnapshotDocument};
