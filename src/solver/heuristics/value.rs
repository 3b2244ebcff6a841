//! Value-ordering heuristics (§4.4).

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

/// A strategy for ordering the candidate values to try for a variable.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    /// Returns the values of `var`'s current domain, in the order they should
    /// be tried. Must return a permutation of the domain.
    fn order(&self, var: &VariableId, assignment: &Assignment, problem: &Problem) -> Vec<Value>;
}

/// Enumerates the domain in its (deterministic) iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrderHeuristic;

impl ValueOrderingHeuristic for NaturalOrderHeuristic {
    fn order(&self, var: &VariableId, assignment: &Assignment, _problem: &Problem) -> Vec<Value> {
        assignment.domain(var).iter().cloned().collect()
    }
}

/// Least-Constraining-Value: tries values that rule out the fewest
/// neighboring candidates first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order(&self, var: &VariableId, assignment: &Assignment, problem: &Problem) -> Vec<Value> {
        let neighbors: Vec<_> = problem.binary_constraints_affecting(var).collect();

        let mut ordered: Vec<(Value, usize)> = Vec::new();
        for candidate in assignment.domain(var).iter() {
            let mut conflicts = 0usize;
            for constraint in &neighbors {
                let other = constraint.other(var);
                for other_value in assignment.domain(&other).iter() {
                    if !constraint.valid(candidate, other_value) {
                        conflicts += 1;
                    }
                }
            }
            // Insert at the first index whose stored conflict count is
            // strictly greater than this candidate's, so equal-conflict
            // values keep domain iteration order (§4.4).
            let insert_at = ordered
                .iter()
                .position(|(_, count)| *count > conflicts)
                .unwrap_or(ordered.len());
            ordered.insert(insert_at, (candidate.clone(), conflicts));
        }

        ordered.into_iter().map(|(value, _)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::not_equal::NotEqual;
    use crate::solver::domain::Domain;

    #[test]
    fn natural_order_matches_domain_iteration() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string()],
            vec![Domain::new([Value::Int(3), Value::Int(1), Value::Int(2)])],
            vec![],
            vec![],
        )
        .unwrap();
        let assignment = Assignment::new(&problem);
        let ordered = NaturalOrderHeuristic.order(&"a".to_string(), &assignment, &problem);
        assert_eq!(ordered, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn lcv_orders_by_ascending_conflicts() {
        let _ = tracing_subscriber::fmt::try_init();
        // a in {1,2,3}; b in {1,2}; constraint a != b.
        // a=1 conflicts with b=1 -> 1 conflict.
        // a=2 conflicts with b=2 -> 1 conflict.
        // a=3 conflicts with nothing -> 0 conflicts.
        let problem = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2), Value::Int(3)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![Box::new(NotEqual::new("a", "b"))],
            vec![],
        )
        .unwrap();
        let assignment = Assignment::new(&problem);
        let ordered =
            LeastConstrainingValueHeuristic.order(&"a".to_string(), &assignment, &problem);
        assert_eq!(ordered[0], Value::Int(3));
        assert_eq!(ordered.len(), 3);
        let mut sorted_check = ordered.clone();
        sorted_check.sort();
        let mut domain_values: Vec<_> =
            assignment.domain(&"a".to_string()).iter().cloned().collect();
        domain_values.sort();
        assert_eq!(sorted_check, domain_values);
    }
}
