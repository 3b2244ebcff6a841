//! The point consistency check (§4.2).

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

/// `true` iff assigning `value` to `var` would not immediately violate any
/// binary constraint against an already-assigned neighbor.
///
/// Unary constraints are not rechecked here: they were already enforced once
/// during preprocessing (`solver::unary`) and every value remaining in a
/// domain already satisfies them. Pure function — does not mutate `assignment`.
pub fn consistent(assignment: &Assignment, problem: &Problem, var: &VariableId, value: &Value) -> bool {
    for constraint in problem.binary_constraints_affecting(var) {
        let other = constraint.other(var);
        if let Some(other_value) = assignment.value_of(&other) {
            if !constraint.valid(value, other_value) {
                return false;
            }
        }
    }
    true
}
