//! The read-only problem definition (§3, §6).

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SolverError};
use crate::solver::constraint::{BinaryConstraint, UnaryConstraint, VariableId};
use crate::solver::domain::Domain;

/// A constraint satisfaction problem: a fixed set of variables with their
/// original domains, plus the unary and binary constraints over them.
///
/// Constructed once and treated as read-only for the lifetime of a solve (and
/// may be shared across concurrent solves, each with its own `Assignment`).
#[derive(Debug)]
pub struct Problem {
    variables: Vec<VariableId>,
    original_domains: HashMap<VariableId, Domain>,
    unary_constraints: Vec<Box<dyn UnaryConstraint>>,
    binary_constraints: Vec<Box<dyn BinaryConstraint>>,
}

impl Problem {
    /// Builds a problem from parallel `variables`/`domains` lists (same length,
    /// matching order) plus the constraint lists.
    ///
    /// Every constraint's endpoint(s) must appear in `variables`; a constraint
    /// naming a variable outside that list is rejected with
    /// [`SolverError::UnknownVariable`] rather than surfacing later as a panic.
    pub fn new(
        variables: Vec<VariableId>,
        domains: Vec<Domain>,
        binary_constraints: Vec<Box<dyn BinaryConstraint>>,
        unary_constraints: Vec<Box<dyn UnaryConstraint>>,
    ) -> Result<Self> {
        if variables.len() != domains.len() {
            return Err(SolverError::VariableCountMismatch {
                variables: variables.len(),
                domains: domains.len(),
            });
        }
        for (var, domain) in variables.iter().zip(domains.iter()) {
            if domain.is_empty() {
                return Err(SolverError::EmptyDomain(var.clone()));
            }
        }

        let known: HashSet<&VariableId> = variables.iter().collect();
        for constraint in &unary_constraints {
            let var = constraint.variable();
            if !known.contains(var) {
                return Err(SolverError::UnknownVariable(var.clone()));
            }
        }
        for constraint in &binary_constraints {
            let (v1, v2) = constraint.variables();
            if !known.contains(v1) {
                return Err(SolverError::UnknownVariable(v1.clone()));
            }
            if !known.contains(v2) {
                return Err(SolverError::UnknownVariable(v2.clone()));
            }
        }

        let original_domains = variables
            .iter()
            .cloned()
            .zip(domains)
            .collect::<HashMap<_, _>>();

        Ok(Self {
            variables,
            original_domains,
            unary_constraints,
            binary_constraints,
        })
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    pub fn original_domain(&self, var: &VariableId) -> Option<&Domain> {
        self.original_domains.get(var)
    }

    pub fn unary_constraints(&self) -> &[Box<dyn UnaryConstraint>] {
        &self.unary_constraints
    }

    pub fn binary_constraints(&self) -> &[Box<dyn BinaryConstraint>] {
        &self.binary_constraints
    }

    /// Binary constraints that affect `var`, paired with the opposite endpoint.
    pub fn binary_constraints_affecting<'a>(
        &'a self,
        var: &'a VariableId,
    ) -> impl Iterator<Item = &'a Box<dyn BinaryConstraint>> + 'a {
        self.binary_constraints
            .iter()
            .filter(move |c| c.affects(var))
    }

    /// The number of binary constraint occurrences mentioning `var` (§4.3).
    pub fn degree(&self, var: &VariableId) -> usize {
        self.binary_constraints_affecting(var).count()
    }

    /// Like [`Problem::binary_constraints_affecting`], but paired with each
    /// constraint's index into [`Problem::binary_constraints`] — the identity
    /// propagation arcs are tracked by (see `solver::work_list`).
    pub fn binary_constraints_affecting_indexed<'a>(
        &'a self,
        var: &'a VariableId,
    ) -> impl Iterator<Item = (usize, &'a Box<dyn BinaryConstraint>)> + 'a {
        self.binary_constraints
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.affects(var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::not_equal::NotEqual;
    use crate::solver::value::Value;

    #[test]
    fn rejects_mismatched_variable_and_domain_counts() {
        let _ = tracing_subscriber::fmt::try_init();
        let result = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![Domain::new([Value::Int(1)])],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(SolverError::VariableCountMismatch { variables: 2, domains: 1 })
        ));
    }

    #[test]
    fn rejects_empty_domain() {
        let _ = tracing_subscriber::fmt::try_init();
        let result = Problem::new(
            vec!["a".to_string()],
            vec![Domain::new([])],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(SolverError::EmptyDomain(_))));
    }

    #[test]
    fn degree_counts_binary_constraint_occurrences() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = Problem::new(
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

        assert_eq!(problem.degree(&"a".to_string()), 2);
        assert_eq!(problem.degree(&"b".to_string()), 1);
        assert_eq!(problem.degree(&"c".to_string()), 1);
    }

    #[test]
    fn rejects_a_binary_constraint_naming_an_unknown_variable() {
        let _ = tracing_subscriber::fmt::try_init();
        let result = Problem::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Domain::new([Value::Int(1), Value::Int(2)]),
                Domain::new([Value::Int(1), Value::Int(2)]),
            ],
            vec![Box::new(NotEqual::new("a", "ghost"))],
            vec![],
        );
        assert!(matches!(
            result,
            Err(SolverError::UnknownVariable(var)) if var == "ghost"
        ));
    }

    #[test]
    fn rejects_a_unary_constraint_naming_an_unknown_variable() {
        let _ = tracing_subscriber::fmt::try_init();
        use crate::constraints::exclude::Exclude;

        let result = Problem::new(
            vec!["a".to_string()],
            vec![Domain::new([Value::Int(1), Value::Int(2)])],
            vec![],
            vec![Box::new(Exclude::new("ghost", 1_i64))],
        );
        assert!(matches!(
            result,
            Err(SolverError::UnknownVariable(var)) if var == "ghost"
        ));
    }
}
