//! The top-level entry point: wires a [`SolverConfig`] into concrete
//! heuristics and an inference engine, then runs preprocessing and search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::solver::ac3::ac3;
use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::heuristics::value::{
    LeastConstrainingValueHeuristic, NaturalOrderHeuristic, ValueOrderingHeuristic,
};
use crate::solver::heuristics::variable::{
    FirstUnassignedHeuristic, MrvDegreeHeuristic, VariableSelectionHeuristic,
};
use crate::solver::inference::{ForwardChecking, InferenceEngine, MaintainArcConsistency, NoOpInference};
use crate::solver::problem::Problem;
use crate::solver::strategy::backtrack;
use crate::solver::unary::eliminate_unary_constraints;
use crate::solver::value::Value;

/// Which variable-selection heuristic to branch on (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableHeuristicKind {
    FirstUnassigned,
    MrvDegree,
}

/// Which value-ordering heuristic to try candidate values in (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueHeuristicKind {
    NaturalOrder,
    LeastConstrainingValue,
}

/// Which inference engine to run after each tentative assignment (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceKind {
    None,
    ForwardChecking,
    MaintainArcConsistency,
}

/// The solver's tunable parameters.
///
/// Serializable so a caller can load a configuration from JSON (see
/// [`SolverConfig::from_json`]) instead of constructing one in code; the
/// default matches the defaults of the system this solver is modeled on: MRV
/// with degree tie-break, least-constraining-value, MAC, and AC-3
/// preprocessing enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub variable_heuristic: VariableHeuristicKind,
    pub value_heuristic: ValueHeuristicKind,
    pub inference: InferenceKind,
    pub use_ac3: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            variable_heuristic: VariableHeuristicKind::MrvDegree,
            value_heuristic: ValueHeuristicKind::LeastConstrainingValue,
            inference: InferenceKind::MaintainArcConsistency,
            use_ac3: true,
        }
    }
}

impl SolverConfig {
    /// Parses a configuration from JSON, falling back to [`Default::default`]
    /// for any field the document omits.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn build_variable_heuristic(&self) -> Box<dyn VariableSelectionHeuristic> {
        match self.variable_heuristic {
            VariableHeuristicKind::FirstUnassigned => Box::new(FirstUnassignedHeuristic),
            VariableHeuristicKind::MrvDegree => Box::new(MrvDegreeHeuristic),
        }
    }

    fn build_value_heuristic(&self) -> Box<dyn ValueOrderingHeuristic> {
        match self.value_heuristic {
            ValueHeuristicKind::NaturalOrder => Box::new(NaturalOrderHeuristic),
            ValueHeuristicKind::LeastConstrainingValue => {
                Box::new(LeastConstrainingValueHeuristic)
            }
        }
    }

    fn build_inference(&self) -> Box<dyn InferenceEngine> {
        match self.inference {
            InferenceKind::None => Box::new(NoOpInference),
            InferenceKind::ForwardChecking => Box::new(ForwardChecking),
            InferenceKind::MaintainArcConsistency => Box::new(MaintainArcConsistency),
        }
    }
}

/// Search-process statistics, reported alongside every solve (§4.8).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Total recursive search-node visits, including the root.
    pub nodes_visited: u64,
    /// Total times a branch was abandoned and its assignment undone.
    pub backtracks: u64,
    /// Total domain values removed by the configured inference engine.
    pub values_pruned_by_inference: u64,
    /// Total domain values removed by AC-3 preprocessing.
    pub values_pruned_by_ac3: u64,
}

/// A complete, constraint-satisfying assignment.
pub type Solution = HashMap<VariableId, Value>;

/// Preprocessing plus backtracking search, wired up from a [`SolverConfig`].
#[derive(Debug)]
pub struct SolverEngine {
    config: SolverConfig,
}

impl SolverEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Attempts to solve `problem`.
    ///
    /// `Ok((None, stats))` means the problem is proven unsatisfiable.
    /// Malformed problems are rejected earlier by [`Problem::new`]; solving a
    /// well-formed problem cannot itself fail, so the `Result` here exists
    /// only for symmetry with the rest of the public API.
    #[instrument(skip(self, problem), fields(variables = problem.variables().len()))]
    pub fn solve(&self, problem: &Problem) -> Result<(Option<Solution>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new(problem);

        if !eliminate_unary_constraints(&mut assignment, problem) {
            debug!("unary preprocessing emptied a domain");
            return Ok((None, stats));
        }

        if self.config.use_ac3 {
            let before = total_domain_size(problem, &assignment);
            if !ac3(&mut assignment, problem) {
                debug!("AC-3 preprocessing emptied a domain");
                return Ok((None, stats));
            }
            let after = total_domain_size(problem, &assignment);
            stats.values_pruned_by_ac3 = (before - after) as u64;
        }

        let variable_heuristic = self.config.build_variable_heuristic();
        let value_heuristic = self.config.build_value_heuristic();
        let inference = self.config.build_inference();

        let found = backtrack(
            &mut assignment,
            problem,
            variable_heuristic.as_ref(),
            value_heuristic.as_ref(),
            inference.as_ref(),
            &mut stats,
        );

        if found {
            info!(nodes = stats.nodes_visited, backtracks = stats.backtracks, "solution found");
            Ok((assignment.extract_solution(), stats))
        } else {
            info!(nodes = stats.nodes_visited, backtracks = stats.backtracks, "no solution exists");
            Ok((None, stats))
        }
    }
}

fn total_domain_size(problem: &Problem, assignment: &Assignment) -> usize {
    problem
        .variables()
        .iter()
        .map(|v| assignment.domain(v).len())
        .sum()
}
