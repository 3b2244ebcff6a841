//! A unary constraint pinning a variable to a single fixed value.
//!
//! Grounded on `original_source/BinaryCSP.py`'s `GoodValueConstraint`.

use crate::solver::constraint::{UnaryConstraint, VariableId};
use crate::solver::value::Value;

/// `var == pinned`.
#[derive(Debug, Clone)]
pub struct Pin {
    var: VariableId,
    pinned: Value,
}

impl Pin {
    pub fn new(var: impl Into<VariableId>, pinned: impl Into<Value>) -> Self {
        Self {
            var: var.into(),
            pinned: pinned.into(),
        }
    }
}

impl UnaryConstraint for Pin {
    fn variable(&self) -> &VariableId {
        &self.var
    }

    fn affects(&self, var: &VariableId) -> bool {
        *var == self.var
    }

    fn valid(&self, value: &Value) -> bool {
        *value == self.pinned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_pinned_value() {
        let _ = tracing_subscriber::fmt::try_init();
        let c = Pin::new("a", 3_i64);
        assert!(c.valid(&Value::Int(3)));
        assert!(!c.valid(&Value::Int(4)));
    }
}
