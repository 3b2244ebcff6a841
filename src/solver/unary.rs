//! Unary constraint preprocessing (§4.6).
//!
//! Run once, before search starts: every value any unary constraint rejects
//! is permanently removed from its variable's domain. Unlike the reversible
//! pruning inference engines perform during search, this pass is never undone
//! — a value a unary constraint rejects can never participate in any
//! solution, assigned or not.

use crate::solver::assignment::Assignment;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

/// Removes every domain value that violates a unary constraint affecting its
/// variable. Returns `false` if any variable's domain is emptied in the
/// process — the problem has no solution.
pub fn eliminate_unary_constraints(assignment: &mut Assignment, problem: &Problem) -> bool {
    for var in problem.variables() {
        for constraint in problem
            .unary_constraints()
            .iter()
            .filter(|c| c.affects(var))
        {
            let rejected: Vec<Value> = assignment
                .domain(var)
                .iter()
                .filter(|v| !constraint.valid(v))
                .cloned()
                .collect();
            for value in rejected {
                assignment.domain_mut(var).remove(&value);
                if assignment.domain(var).is_empty() {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::exclude::Exclude;
    use crate::solver::domain::Domain;

    #[test]
    fn removes_values_rejected_by_a_unary_constraint() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string()],
            vec![Domain::new([Value::Int(1), Value::Int(2), Value::Int(3)])],
            vec![],
            vec![Box::new(Exclude::new("a", 2_i64))],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        assert!(eliminate_unary_constraints(&mut assignment, &problem));
        assert_eq!(assignment.domain(&"a".to_string()).len(), 2);
        assert!(!assignment.domain(&"a".to_string()).contains(&Value::Int(2)));
    }

    #[test]
    fn reports_failure_on_an_emptied_domain() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
            vec!["a".to_string()],
            vec![Domain::new([Value::Int(1)])],
            vec![],
            vec![Box::new(Exclude::new("a", 1_i64))],
        )
        .unwrap();
        let mut assignment = Assignment::new(&problem);
        assert!(!eliminate_unary_constraints(&mut assignment, &problem));
    }
}
