//! Maintaining Arc Consistency (§4.5.2): forward checking followed by
//! worklist-driven arc revision seeded from the variables forward checking
//! just shrank.

use std::collections::HashSet;

use tracing::trace;

use crate::solver::assignment::Assignment;
use crate::solver::constraint::VariableId;
use crate::solver::problem::Problem;
use crate::solver::value::Value;
use crate::solver::work_list::{Arc, WorkList};

use super::revise::revise;
use super::{forward_check::forward_check, undo, InferenceEngine, Inferences};

/// [`InferenceEngine`] implementing MAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintainArcConsistency;

impl InferenceEngine for MaintainArcConsistency {
    #[tracing::instrument(level = "trace", skip(self, assignment, problem, value), fields(var = %var))]
    fn infer(
        &self,
        assignment: &mut Assignment,
        problem: &Problem,
        var: &VariableId,
        value: &Value,
    ) -> Option<Inferences> {
        let fc_result = forward_check(assignment, problem, var, value)?;
        let mut cumulative: Inferences = fc_result.clone();

        let shrunk_neighbors: HashSet<VariableId> =
            fc_result.iter().map(|(v, _)| v.clone()).collect();

        let mut worklist = WorkList::new();
        for neighbor in &shrunk_neighbors {
            for (idx, _) in problem.binary_constraints_affecting_indexed(var) {
                if &problem.binary_constraints()[idx].other(var) == neighbor {
                    worklist.push(Arc {
                        source: var.clone(),
                        target: neighbor.clone(),
                        constraint: idx,
                    });
                }
            }
        }

        while let Some(arc) = worklist.pop() {
            if arc.source == *var {
                // A seed arc: not itself a revision, just a marker that every
                // outgoing arc from `arc.target` should be (re-)considered.
                let t = &arc.target;
                for (idx, constraint) in problem.binary_constraints_affecting_indexed(t) {
                    let w = constraint.other(t);
                    if &w != var && !assignment.is_assigned(&w) {
                        worklist.push(Arc {
                            source: t.clone(),
                            target: w,
                            constraint: idx,
                        });
                    }
                }
                continue;
            }

            let constraint = problem.binary_constraints()[arc.constraint].as_ref();
            match revise(assignment, &arc.source, &arc.target, constraint) {
                None => {
                    undo(assignment, &cumulative);
                    return None;
                }
                Some(pruned) => {
                    if pruned.is_empty() {
                        continue;
                    }
                    for y in &pruned {
                        cumulative.insert((arc.target.clone(), y.clone()));
                    }
                    for (idx, constraint) in problem.binary_constraints_affecting_indexed(&arc.target) {
                        let w = constraint.other(&arc.target);
                        if w != arc.source && !assignment.is_assigned(&w) {
                            worklist.push(Arc {
                                source: arc.target.clone(),
                                target: w,
                                constraint: idx,
                            });
                        }
                    }
                }
            }
        }

        trace!(var = %var, pruned = cumulative.len(), "MAC propagation complete");
        Some(cumulative)
    }
}
