//! A unary constraint excluding a fixed, forbidden value.
//!
//! Grounded on `original_source/BinaryCSP.py`'s `BadValueConstraint`.

use crate::solver::constraint::{UnaryConstraint, VariableId};
use crate::solver::value::Value;

/// `var != forbidden`.
#[derive(Debug, Clone)]
pub struct Exclude {
    var: VariableId,
    forbidden: Value,
}

impl Exclude {
    pub fn new(var: impl Into<VariableId>, forbidden: impl Into<Value>) -> Self {
        Self {
            var: var.into(),
            forbidden: forbidden.into(),
        }
    }
}

impl UnaryConstraint for Exclude {
    fn variable(&self) -> &VariableId {
        &self.var
    }

    fn affects(&self, var: &VariableId) -> bool {
        *var == self.var
    }

    fn valid(&self, value: &Value) -> bool {
        *value != self.forbidden
    }
}
