//! The generic CSP search engine: data model, heuristics, propagation, and
//! the backtracking driver. Concrete constraint kinds live in
//! [`crate::constraints`]; this module only knows the [`constraint`] contract.

pub mod ac3;
pub mod assignment;
pub mod consistency;
pub mod constraint;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod inference;
pub mod problem;
pub mod stats;
pub mod strategy;
pub mod unary;
pub mod value;
pub mod work_list;
