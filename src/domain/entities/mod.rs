//! Domain Entities
//!
//! Records supplied by the data source. The engine only ever reads them.
//! - `Founder` - A founder and their personal target
//! - `RevenueEntry` - A recorded amount for one revenue stream
//! - `SecondaryMission` / `MissionAssignment` - Secondary mission and shares
//! - `Post` - A win or blocker update
//! - `Snapshot` - All of the above at one point in time

mod founder;
mod mission;
mod post;
mod revenue;
mod snapshot;

pub use founder::Founder;
pub use mission::{MissionAssignment, SecondaryMission};
pub use post::{Post, PostKind};
pub use revenue::{RevenueEntry, RevenueSource};
pub use snapshot::Snapshot;
