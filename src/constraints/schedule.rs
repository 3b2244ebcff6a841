//! A unary constraint pinning a scheduled interval inside an earliest/latest
//! window.
//!
//! Uses the same `"<resource><start>,<end>"` token encoding as
//! [`crate::constraints::not_overlap`]. Grounded on
//! `original_source/BinaryCSP.py`'s `LazySchedule`, generalized from its
//! hardcoded 9/14 window to caller-supplied bounds.

use crate::solver::constraint::{UnaryConstraint, VariableId};
use crate::solver::value::Value;

/// `earliest <= start` and `end <= latest`.
#[derive(Debug, Clone)]
pub struct WithinWindow {
    var: VariableId,
    earliest: f64,
    latest: f64,
}

impl WithinWindow {
    pub fn new(var: impl Into<VariableId>, earliest: f64, latest: f64) -> Self {
        Self {
            var: var.into(),
            earliest,
            latest,
        }
    }
}

impl UnaryConstraint for WithinWindow {
    fn variable(&self) -> &VariableId {
        &self.var
    }

    fn affects(&self, var: &VariableId) -> bool {
        *var == self.var
    }

    fn valid(&self, value: &Value) -> bool {
        let token = value.as_str().expect("schedule token must be a string value");
        let mut chars = token.chars();
        chars.next().expect("schedule token must not be empty");
        let rest: String = chars.collect();
        let mut parts = rest.split(',');
        let start: f64 = parts
            .next()
            .expect("schedule token missing start")
            .parse()
            .expect("schedule start must be numeric");
        let end: f64 = parts
            .next()
            .expect("schedule token missing end")
            .parse()
            .expect("schedule end must be numeric");
        start >= self.earliest && end <= self.latest
    }
}
