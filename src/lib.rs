//! A backtracking solver for finite-domain constraint satisfaction problems
//! restricted to unary and binary constraints.
//!
//! # Core concepts
//!
//! - [`Problem`](solver::problem::Problem): the variables, their domains, and
//!   the unary/binary constraints over them. Built once, read-only for the
//!   lifetime of a solve.
//! - [`Value`](solver::value::Value): the tagged-union value type every
//!   domain holds — integers, booleans, or encoded strings.
//! - Concrete constraint kinds live in [`constraints`] (equality,
//!   disequality, value exclusion/pinning, interval non-overlap, scheduling
//!   windows, N-queens non-attack); they implement the
//!   [`UnaryConstraint`](solver::constraint::UnaryConstraint) or
//!   [`BinaryConstraint`](solver::constraint::BinaryConstraint) contract the
//!   solver itself is built against.
//! - [`SolverEngine`]: the entry point. Configured with a [`SolverConfig`],
//!   it runs unary preprocessing, optional AC-3, and backtracking search with
//!   a chosen variable heuristic, value heuristic, and inference engine.
//!
//! # Example
//!
//! ```
//! use binary_csp_solver::constraints::not_equal::NotEqual;
//! use binary_csp_solver::{Domain, Problem, SolverConfig, SolverEngine, Value};
//!
//! // a != b; a in {1, 2}; b in {1}. The solver must deduce a = 2.
//! let problem = Problem::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         Domain::new([Value::Int(1), Value::Int(2)]),
//!         Domain::new([Value::Int(1)]),
//!     ],
//!     vec![Box::new(NotEqual::new("a", "b"))],
//!     vec![],
//! )
//! .unwrap();
//!
//! let engine = SolverEngine::new(SolverConfig::default());
//! let (solution, _stats) = engine.solve(&problem).unwrap();
//! let solution = solution.expect("problem is solvable");
//! assert_eq!(solution.get("a"), Some(&Value::Int(2)));
//! ```

pub mod constraints;
pub mod error;
pub mod solver;

pub use solver::constraint::{BinaryConstraint, UnaryConstraint, VariableId};
pub use solver::domain::Domain;
pub use solver::engine::{
    InferenceKind, SearchStats, Solution, SolverConfig, SolverEngine, ValueHeuristicKind,
    VariableHeuristicKind,
};
pub use solver::problem::Problem;
pub use solver::value::Value;
