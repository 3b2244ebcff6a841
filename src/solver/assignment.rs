//! The mutable working state of a solve (§3).

use std::collections::HashMap;

use crate::solver::constraint::VariableId;
use crate::solver::domain::Domain;
use crate::solver::problem::Problem;
use crate::solver::value::Value;

/// Current domains plus the partial assignment, mutated in place throughout a
/// solve and never cloned to take a search step — backtracking is always
/// performed by undoing the exact mutations a step made (see
/// `solver::inference`).
#[derive(Debug)]
pub struct Assignment {
    domains: HashMap<VariableId, Domain>,
    assigned: HashMap<VariableId, Option<Value>>,
}

impl Assignment {
    /// Builds a fresh assignment from `problem`'s original domains, with every
    /// variable unassigned.
    pub fn new(problem: &Problem) -> Self {
        let domains = problem
            .variables()
            .iter()
            .map(|v| (v.clone(), problem.original_domain(v).unwrap().clone()))
            .collect();
        let assigned = problem.variables().iter().map(|v| (v.clone(), None)).collect();
        Self { domains, assigned }
    }

    /// Panics only if `var` isn't one of `problem`'s variables — unreachable
    /// as long as `var` came from `problem.variables()` or a constraint
    /// endpoint, since [`Problem::new`] rejects constraints that reference
    /// unknown variables.
    pub fn domain(&self, var: &VariableId) -> &Domain {
        self.domains.get(var).expect("variable validated by Problem::new")
    }

    pub fn domain_mut(&mut self, var: &VariableId) -> &mut Domain {
        self.domains.get_mut(var).expect("variable validated by Problem::new")
    }

    pub fn is_assigned(&self, var: &VariableId) -> bool {
        self.assigned.get(var).map(|v| v.is_some()).unwrap_or(false)
    }

    pub fn value_of(&self, var: &VariableId) -> Option<&Value> {
        self.assigned.get(var).and_then(|v| v.as_ref())
    }

    pub fn assign(&mut self, var: &VariableId, value: Value) {
        self.assigned.insert(var.clone(), Some(value));
    }

    pub fn unassign(&mut self, var: &VariableId) {
        self.assigned.insert(var.clone(), None);
    }

    pub fn is_complete(&self) -> bool {
        self.assigned.values().all(Option::is_some)
    }

    /// The first unassigned variable in `order`, if any.
    pub fn first_unassigned<'a>(&self, order: &'a [VariableId]) -> Option<&'a VariableId> {
        order.iter().find(|v| !self.is_assigned(v))
    }

    /// Consumes the assignment into a solution map. Only meaningful once
    /// [`Assignment::is_complete`] holds.
    pub fn extract_solution(&self) -> Option<HashMap<VariableId, Value>> {
        if !self.is_complete() {
            return None;
        }
        Some(
            self.assigned
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().unwrap()))
                .collect(),
        )
    }
}
