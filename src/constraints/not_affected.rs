//! N-queens non-attack: combined row, column, and diagonal exclusion.
//!
//! Tokens are encoded as `"<row><col>"` single-digit pairs, e.g. `"03"` for
//! row 0, column 3. Grounded on `original_source/BinaryCSP.py`'s
//! `NotAffectedConstraint`, which folds the usual three separate queen
//! constraints (same row, same column, same diagonal) into one check.

use crate::solver::constraint::{BinaryConstraint, VariableId};
use crate::solver::value::Value;

fn parse(value: &Value) -> (i64, i64) {
    let token = value.as_str().expect("queen token must be a string value");
    let mut chars = token.chars();
    let row = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .expect("queen token missing row digit") as i64;
    let col = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .expect("queen token missing column digit") as i64;
    (row, col)
}

/// Two queens placed at `v1` and `v2` must not attack each other.
#[derive(Debug, Clone)]
pub struct NotAffected {
    v1: VariableId,
    v2: VariableId,
}

impl NotAffected {
    pub fn new(v1: impl Into<VariableId>, v2: impl Into<VariableId>) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
        }
    }
}

impl BinaryConstraint for NotAffected {
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
        let (row1, col1) = parse(a);
        let (row2, col2) = parse(b);
        if row1 == row2 {
            return false;
        }
        if col1 == col2 {
            return false;
        }
        if (col1 - col2).abs() == (row1 - row2).abs() {
            return false;
        }
        true
    }
}
