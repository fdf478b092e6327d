//! Secondary-mission target allocation

use crate::domain::entities::{MissionAssignment, SecondaryMission};
use crate::domain::value_objects::MissionSelector;

/// The active secondary mission, if any mission satisfies `selector`
///
/// First match wins. `None` disables secondary-mission figures.
pub fn select_mission<'a>(
    missions: &'a [SecondaryMission],
    selector: &MissionSelector,
) -> Option<&'a SecondaryMission> {
    missions.iter().find(|m| selector.matches(m))
}

/// The founder's share assignment for `mission`, if one exists
pub fn find_assignment<'a>(
    assignments: &'a [MissionAssignment],
    founder_id: u64,
    mission: &SecondaryMission,
) -> Option<&'a MissionAssignment> {
    assignments.iter().find(|a| a.links(founder_id, mission.id))
}

/// `target_arr * share_percentage / 100`
pub fn allocated_target(mission: &SecondaryMission, assignment: &MissionAssignment) -> f64 {
    mission.target_arr * (assignment.share_percentage / 100.0)
}

/// A founder's personal ARR target for `mission`
///
/// `None` when the founder holds no share of the mission.
pub fn founder_target(
    mission: &SecondaryMission,
    assignments: &[MissionAssignment],
    founder_id: u64,
) -> Option<f64> {
    find_assignment(assignments, founder_id, mission).map(|a| allocated_target(mission, a))
}
