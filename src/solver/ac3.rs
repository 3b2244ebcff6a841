//! The AC-3 preprocessor (§4.7): establishes arc consistency across the whole
//! problem before search starts, independent of any particular assignment.

use tracing::debug;

use crate::solver::assignment::Assignment;
use crate::solver::problem::Problem;
use crate::solver::work_list::{Arc, WorkList};

use super::inference::revise::revise;

/// Runs AC-3 to a fixed point. Returns `false` if any domain is wiped out,
/// meaning the problem (as currently constrained) has no solution.
#[tracing::instrument(skip(assignment, problem), fields(constraints = problem.binary_constraints().len()))]
pub fn ac3(assignment: &mut Assignment, problem: &Problem) -> bool {
    debug!("starting AC-3");
    let mut worklist = WorkList::new();
    for (idx, constraint) in problem.binary_constraints().iter().enumerate() {
        for var in problem.variables() {
            if constraint.affects(var) {
                let other = constraint.other(var);
                worklist.push(Arc {
                    source: var.clone(),
                    target: other,
                    constraint: idx,
                });
            }
        }
    }

    while let Some(arc) = worklist.pop() {
        let constraint = problem.binary_constraints()[arc.constraint].as_ref();
        match revise(assignment, &arc.source, &arc.target, constraint) {
            None => {
                debug!(satisfiable = false, "AC-3 finished");
                return false;
            }
            Some(pruned) => {
                if pruned.is_empty() {
                    continue;
                }
                for (idx, constraint) in
                    problem.binary_constraints_affecting_indexed(&arc.target)
                {
                    let w = constraint.other(&arc.target);
                    if w != arc.source {
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

    debug!(satisfiable = true, "AC-3 finished");
    true
}
