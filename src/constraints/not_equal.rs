//! Disequality between two variables.

use crate::solver::constraint::{BinaryConstraint, VariableId};
use crate::solver::value::Value;

/// `v1 != v2`.
#[derive(Debug, Clone)]
pub struct NotEqual {
    v1: VariableId,
    v2: VariableId,
}

impl NotEqual {
    pub fn new(v1: impl Into<VariableId>, v2: impl Into<VariableId>) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
        }
    }
}

impl BinaryConstraint for NotEqual {
    fn variables(&self) -> (&VariableId, &VariableId) {
        (&self.v1, &self.v2)
    }

    fn affects(&self, var: &VariableId) -> bool {
        *var == self.v1 || *var == self.v2
    }

    fn other(&self, var: &VariableId) -> VariableId {
        if *var == self.v1 {
            self.v2.clone()
        } else {
            self.v1.clone()
        }
    }

    fn valid(&self, a: &Value, b: &Value) -> bool {
        a != b
    }
}
