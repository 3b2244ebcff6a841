//! The backtracking search driver (§4.8).
//!
//! A single recursive function, mutating one [`Assignment`] in place for the
//! whole search: every tentative assignment and every inference it triggers
//! is undone on the way back out of a failed branch, so the assignment
//! handed back to the caller either is a genuine solution or has been
//! restored to exactly the state it was found in.

use crate::solver::assignment::Assignment;
use crate::solver::consistency::consistent;
use crate::solver::constraint::VariableId;
use crate::solver::engine::SearchStats;
use crate::solver::heuristics::value::ValueOrderingHeuristic;
use crate::solver::heuristics::variable::VariableSelectionHeuristic;
use crate::solver::inference::{undo, InferenceEngine};
use crate::solver::problem::Problem;

/// Runs backtracking search over `assignment` (already unary- and
/// AC-3-preprocessed). Returns `true` iff a complete, consistent assignment
/// was found — in which case `assignment` now holds it.
pub fn backtrack(
    assignment: &mut Assignment,
    problem: &Problem,
    variable_heuristic: &dyn VariableSelectionHeuristic,
    value_heuristic: &dyn ValueOrderingHeuristic,
    inference: &dyn InferenceEngine,
    stats: &mut SearchStats,
) -> bool {
    stats.nodes_visited += 1;

    if assignment.is_complete() {
        return true;
    }

    let var: VariableId = variable_heuristic
        .select(assignment, problem)
        .expect("an incomplete assignment always has an unassigned variable");

    for value in value_heuristic.order(&var, assignment, problem) {
        if !consistent(assignment, problem, &var, &value) {
            continue;
        }

        assignment.assign(&var, value.clone());

        if assignment.is_complete() {
            return true;
        }

        if let Some(inferences) = inference.infer(assignment, problem, &var, &value) {
            stats.values_pruned_by_inference += inferences.len() as u64;
            if backtrack(assignment, problem, variable_heuristic, value_heuristic, inference, stats) {
                return true;
            }
            undo(assignment, &inferences);
        }

        assignment.unassign(&var);
        stats.backtracks += 1;
    }

    false
}
