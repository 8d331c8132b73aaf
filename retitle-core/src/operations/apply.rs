use crate::apply::apply_renames;
use crate::mover::Mover;
use crate::output::ApplyResult;
use crate::planner::RenamePlan;

/// Apply operation - runs every planned move through `mover`.
///
/// The returned errors start with the planning errors, so the final report
/// covers every entry that was not renamed.
pub fn apply_operation(plan: &RenamePlan, mover: &mut dyn Mover) -> ApplyResult {
    let report = apply_renames(plan, mover);

    let mut errors = plan.error_messages();
    errors.extend(report.failure_messages());

    ApplyResult {
        renamed: report.applied,
        errors,
    }
}
