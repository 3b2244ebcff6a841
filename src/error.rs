//! Error types for problem construction.
//!
//! Unsatisfiability is not an error: it is the `Ok(None)` branch of a solve. The
//! errors here are programmer errors — malformed input that a caller should fix
//! before solving, not a legitimate outcome of search.

pub type Result<T, E = SolverError> = core::result::Result<T, E>;

/// Errors raised while constructing a [`crate::solver::problem::Problem`].
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// `variables` and `domains` passed to `Problem::new` had different lengths.
    #[error("variable list has {variables} entries but domain list has {domains}")]
    VariableCountMismatch { variables: usize, domains: usize },

    /// A constraint (or a domain entry) named a variable outside the problem's
    /// variable list.
    #[error("constraint or domain references unknown variable {0:?}")]
    UnknownVariable(String),

    /// A variable was constructed with an empty candidate domain.
    #[error("variable {0:?} has an empty domain")]
    EmptyDomain(String),
}
