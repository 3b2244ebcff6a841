//! The arc-consistency `revise` primitive (§4.5.3), shared by MAC and AC-3.

use tracing::trace;

use crate::solver::assignment::Assignment;
use crate::solver::constraint::{BinaryConstraint, VariableId};
use crate::solver::value::Value;

/// Removes every value from `D[target]` that has no supporting value in
/// `D[source]` under `constraint`. Returns the values removed, or `None` if
/// every value in `D[target]` turned out unsupported (a wipeout) — in that
/// case nothing is removed.
#[tracing::instrument(level = "trace", skip(assignment, constraint), fields(pruned))]
pub fn revise(
    assignment: &mut Assignment,
    source: &VariableId,
    target: &VariableId,
    constraint: &dyn BinaryConstraint,
) -> Option<Vec<Value>> {
    let unsupported: Vec<Value> = assignment
        .domain(target)
        .iter()
        .filter(|y| {
            !assignment
                .domain(source)
                .iter()
                .any(|x| constraint.valid(x, y))
        })
        .cloned()
        .collect();

    if unsupported.len() >= assignment.domain(target).len() {
        trace!(arc = %format!("{source}->{target}"), "revise wiped out target domain");
        return None;
    }

    for y in &unsupported {
        assignment.domain_mut(target).remove(y);
    }
    tracing::Span::current().record("pruned", unsupported.len());
    trace!(arc = %format!("{source}->{target}"), pruned = unsupported.len(), "revise pruned target domain");
    Some(unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::not_equal::NotEqual;
    use crate::solver::domain::Domain;
    use crate::solver::problem::Problem;

    #[test]
    fn removes_values_with_no_support() {
        let _ = tracing_subscriber::fmt::try_init();
        // source in {1}; target in {1,2}; x != y -> only y=2 supported.
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Domain::new([Value::Int(1)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        let constraint = NotEqual::new("a", "b");
        let removed = revise(
            &mut assignment,
            &"a".to_string(),
            &"b".to_string(),
            &constraint,
        )
        .unwrap();
        assert_eq!(removed, vec![Value::Int(1)]);
        assert_eq!(assignment.domain(&"b".to_string()).len(), 1);
    }

    #[test]
    fn signals_wipeout_without_mutating() {
        let _ = tracing_subscriber::fmt::try_init();
        // source in {1}; target in {1} -> no support at all, target would empty.
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![Domain::new([Value::Int(1)]), Domain::new([Value::Int(1)])],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        let constraint = NotEqual::new("a", "b");
        let result = revise(
            &mut assignment,
            &"a".to_string(),
            &"b".to_string(),
            &constraint,
        );
        assert!(result.is_none());
        assert_eq!(assignment.domain(&"b".to_string()).len(), 1);
    }
}
