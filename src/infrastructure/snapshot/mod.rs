//! Snapshot source implementations

mod json_file;
mod memory;

pub use json_file::{JsonSnapshotFile, SnapshotDocument};
pub use memory::InMemorySnapshot;
