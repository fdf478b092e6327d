//! Domain Layer
//!
//! The derivation engine - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records supplied by the data source (Founder, RevenueEntry, Snapshot)
//! - `value_objects/` - Immutable value types (SprintConfig, YearMonth, PacingTier)
//! - `services/` - Progress, pacing, aggregation and allocation functions
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and total over valid input
//! 3. **Ports & Adapters** - Snapshots arrive through the `SnapshotSource` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
