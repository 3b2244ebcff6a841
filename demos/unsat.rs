//! Demonstrates a problem the solver proves has no solution: four mutually
//! distinct variables squeezed into a domain of three values, the classic
//! pigeonhole contradiction.

use tracing::info;

use binary_csp_solver::constraints::not_equal::NotEqual;
use binary_csp_solver::{Domain, Problem, SolverConfig, SolverEngine, Value};

fn build_problem() -> Problem {
    let variables = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
    let domains: Vec<Domain> = variables
        .iter()
        .map(|_| Domain::new([Value::Int(1), Value::Int(2), Value::Int(3)]))
        .collect();

    let mut constraints: Vec<Box<dyn binary_csp_solver::BinaryConstraint>> = Vec::new();
    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            constraints.push(Box::new(NotEqual::new(
                variables[i].clone(),
                variables[j].clone(),
            )));
        }
    }

    Problem::new(variables, domains, constraints, vec![]).expect("pigeonhole problem is well-formed")
}

fn main() {
    tracing_subscriber::fmt::init();

    let problem = build_problem();
    let engine = SolverEngine::new(SolverConfig::default());
    let (solution, stats) = engine.solve(&problem).expect("solve cannot fail on a well-formed problem");

    info!(?stats, "search complete");
    println!("{}", binary_csp_solver::solver::stats::render_stats_table(&stats));
    assert!(solution.is_none(), "four pairwise-distinct variables cannot fit in three values");
    println!("confirmed unsatisfiable, as expected");
}
