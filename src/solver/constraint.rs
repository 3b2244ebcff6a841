//! The constraint contract (§4.1 of the design).
//!
//! Concrete constraint kinds live under [`crate::constraints`] as external
//! collaborators; the solver itself only ever goes through these two traits.

use crate::solver::value::Value;

/// A variable identifier. Strings suffice — value equality is all that matters.
pub type VariableId = String;

/// A constraint mentioning exactly one variable.
pub trait UnaryConstraint: std::fmt::Debug {
    /// The variable this constraint mentions.
    fn variable(&self) -> &VariableId;

    /// `true` iff this constraint mentions `var`.
    fn affects(&self, var: &VariableId) -> bool;

    /// `true` iff `value` is an acceptable value for the constrained variable.
    fn valid(&self, value: &Value) -> bool;
}

/// A constraint mentioning exactly two variables, `v1` and `v2`.
///
/// `valid` is called with either `(value_of_v1, value_of_v2)` or
/// `(value_of_v2, value_of_v1)` depending on which endpoint the caller is
/// revising from; implementations must treat the two arguments symmetrically
/// (be commutative, or compensate internally).
pub trait BinaryConstraint: std::fmt::Debug {
    /// The two variables this constraint mentions.
    fn variables(&self) -> (&VariableId, &VariableId);

    /// `true` iff this constraint mentions `var`.
    fn affects(&self, var: &VariableId) -> bool;

    /// The endpoint of this constraint other than `var`.
    ///
    /// Only ever called with a `var` this constraint `affects`.
    fn other(&self, var: &VariableId) -> VariableId;

    /// `true` iff `(a, b)` is an acceptable pair of values for this constraint's
    /// two endpoints, in either order.
    fn valid(&self, a: &Value, b: &Value) -> bool;
}
