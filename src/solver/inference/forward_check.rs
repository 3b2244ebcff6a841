//! Forward checking (§4.5.1).

use tracing::trace;

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

use super::{InferenceEngine, Inferences};

/// Prunes, from every unassigned neighbor's domain, values inconsistent with
/// `var = value` under the binary constraint connecting them.
///
/// The wipeout check mirrors the originating implementation exactly: a
/// neighbor's domain size is read once per constraint, before any of this
/// call's removals are applied, and a conflicting value only aborts the whole
/// call if that size was already `<= 1`. On a neighbor whose domain has two or
/// more values, this call can in principle prune it down to empty without
/// itself reporting failure — the emptiness then simply surfaces the next
/// time that neighbor is selected, since no candidate value will remain to
/// try. This is a known characteristic of forward checking alone, not a
/// correctness bug to patch over: MAC's worklist propagation catches it
/// immediately where forward checking defers it by one step.
pub fn forward_check(
    assignment: &mut Assignment,
    problem: &Problem,
    var: &VariableId,
    value: &Value,
) -> Option<Inferences> {
    let mut marked: Vec<(VariableId, Value)> = Vec::new();

    for constraint in problem.binary_constraints_affecting(var) {
        let other = constraint.other(var);
        if assignment.is_assigned(&other) {
            continue;
        }
        let other_domain_size = assignment.domain(&other).len();
        for y in assignment.domain(&other).iter() {
            if !constraint.valid(y, value) {
                if other_domain_size <= 1 {
                    trace!(arc = %format!("{var}->{other}"), "forward checking wiped out a neighbor domain");
                    return None;
                }
                marked.push((other.clone(), y.clone()));
            }
        }
    }

    let mut inferences = Inferences::new();
    for (var, value) in marked {
        if assignment.domain_mut(&var).remove(&value) {
            inferences.insert((var, value));
        }
    }
    trace!(var = %var, pruned = inferences.len(), "forward checking pass complete");
    Some(inferences)
}

/// [`InferenceEngine`] wrapper around [`forward_check`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl InferenceEngine for ForwardChecking {
    fn infer(
        &self,
        assignment: &mut Assignment,
        problem: &Problem,
        var: &VariableId,
        value: &Value,
    ) -> Option<Inferences> {
        forward_check(assignment, problem, var, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::not_equal::NotEqual;
    use crate::solver::domain::Domain;

    #[test]
    fn prunes_inconsistent_values_from_unassigned_neighbors() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        let inferences = forward_check(&mut assignment, &problem, &"a".to_string(), &Value::Int(1))
            .expect("should succeed");
        assert!(inferences.contains(&("b".to_string(), Value::Int(1))));
        assert_eq!(assignment.domain(&"b".to_string()).len(), 1);
    }

    #[test]
    fn fails_when_a_singleton_neighbor_domain_is_wiped_out() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![Domain::new([Value::Int(1), Value::Int(2)]), Domain::new([Value::Int(1)])],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        let result = forward_check(&mut assignment, &problem, &"a".to_string(), &Value::Int(1));
        assert!(result.is_none());
        // Nothing was applied on failure.
        assert_eq!(assignment.domain(&"b".to_string()).len(), 1);
    }

    #[test]
    fn skips_already_assigned_neighbors() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        assignment.assign(&"b".to_string(), Value::Int(1));
        let inferences = forward_check(&mut assignment, &problem, &"a".to_string(), &Value::Int(1))
            .expect("should succeed");
        assert!(inferences.is_empty());
    }
}
