//! Variable-selection heuristics (§4.3).

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;

/// A strategy for choosing which unassigned variable to branch on next.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Returns the next variable to assign, or `None` if every variable is
    /// already assigned (the driver never actually calls this once the
    /// assignment is complete; heuristics need not special-case it, but must
    /// not panic if it happens).
    fn select(&self, assignment: &Assignment, problem: &Problem) -> Option<VariableId>;
}

/// Picks the first unassigned variable in the problem's declared order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstUnassignedHeuristic;

impl VariableSelectionHeuristic for FirstUnassignedHeuristic {
    fn select(&self, assignment: &Assignment, problem: &Problem) -> Option<VariableId> {
        assignment.first_unassigned(problem.variables()).cloned()
    }
}

/// Minimum-Remaining-Values, broken by higher degree, broken by declaration
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrvDegreeHeuristic;

impl VariableSelectionHeuristic for MrvDegreeHeuristic {
    fn select(&self, assignment: &Assignment, problem: &Problem) -> Option<VariableId> {
        problem
            .variables()
            .iter()
            .enumerate()
            .filter(|(_, v)| !assignment.is_assigned(v))
            .min_by_key(|(index, v)| {
                let remaining = assignment.domain(v).len();
                (remaining, std::cmp::Reverse(problem.degree(v)), *index)
            })
            .map(|(_, v)| v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::not_equal::NotEqual;
    use crate::solver::domain::Domain;
    use crate::solver::value::Value;

    fn problem() -> Problem {
        Problem::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2), Value::Int(3)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![
                Box::new(NotEqual::new("b", "c")),
                Box::new(NotEqual::new("a", "c")),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn first_unassigned_skips_assigned_variables() {
        let _ = tracing_subscriber::fmt::try_init();
        let p = problem();
        let mut a = Assignment::new(&p);
        a.assign(&"a".to_string(), Value::Int(1));
        assert_eq!(
            FirstUnassignedHeuristic.select(&a, &p),
            Some("b".to_string())
        );
    }

    #[test]
    fn mrv_prefers_smaller_domain_then_declaration_order() {
        let _ = tracing_subscriber::fmt::try_init();
        let p = problem();
        let a = Assignment::new(&p);
        // b and c both have 2 remaining values and degree 1; a has 3 remaining.
        // Tie between b and c broken by declaration order -> b.
        assert_eq!(MrvDegreeHeuristic.select(&a, &p), Some("b".to_string()));
    }

    #[test]
    fn mrv_breaks_ties_by_degree() {
        let _ = tracing_subscriber::fmt::try_init();
        let p = Problem::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![
                Box::new(NotEqual::new("a", "b")),
                Box::new(NotEqual::new("a", "c")),
            ],
            vec![],
        )
        .unwrap();
        let assignment = Assignment::new(&p);
        // a has degree 2, b and c have degree 1 and equal domain size.
        assert_eq!(
            MrvDegreeHeuristic.select(&assignment, &p),
            Some("a".to_string())
        );
    }
}
