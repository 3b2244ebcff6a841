//! Concrete constraint kinds.
//!
//! Each of these implements [`crate::solver::constraint::UnaryConstraint`] or
//! [`crate::solver::constraint::BinaryConstraint`] over the shared
//! [`crate::solver::value::Value`] union; the solver itself never names any of
//! them directly.

pub mod equal;
pub mod exclude;
pub mod not_affected;
pub mod not_equal;
pub mod not_overlap;
pub mod pin;
pub mod schedule;
