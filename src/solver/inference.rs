//! Inference engines (§4.5).
//!
//! Given the most recently assigned `(var, value)`, an inference engine prunes
//! other variables' current domains of values that can no longer participate
//! in any solution. It returns either the (possibly empty) set of prunings it
//! performed — already applied to the domains — or `None` to signal a
//! wipeout, in which case it must leave the domain state exactly as found.

pub mod forward_check;
pub mod mac;
pub mod revise;

use std::collections::HashSet;

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

pub use forward_check::ForwardChecking;
pub use mac::MaintainArcConsistency;

/// A set of `(variable, value)` pairs removed from current domains by an
/// inference step. Re-inserting every pair undoes the step.
pub type Inferences = HashSet<(VariableId, Value)>;

/// Shared contract for forward checking, MAC, and the no-op engine.
pub trait InferenceEngine: std::fmt::Debug {
    /// Runs this engine after `var` was just assigned `value`. On success,
    /// returns the prunings it performed (already applied to `assignment`).
    /// On failure (a wipeout), `assignment` is left exactly as it was found.
    fn infer(
        &self,
        assignment: &mut Assignment,
        problem: &Problem,
        var: &VariableId,
        value: &Value,
    ) -> Option<Inferences>;
}

/// Plain backtracking: makes no inferences (§4.5.4).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpInference;

impl InferenceEngine for NoOpInference {
    fn infer(
        &self,
        _assignment: &mut Assignment,
        _problem: &Problem,
        _var: &VariableId,
        _value: &Value,
    ) -> Option<Inferences> {
        Some(Inferences::new())
    }
}

/// Reverses `inferences`, re-inserting every `(variable, value)` pair into its
/// domain. Used by the backtracking driver and by MAC's own internal rollback.
pub fn undo(assignment: &mut Assignment, inferences: &Inferences) {
    for (var, value) in inferences {
        assignment.domain_mut(var).insert(value.clone());
    }
}
