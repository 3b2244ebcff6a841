//! Solves the N-queens problem: place N queens on an N×N board so that none
//! attacks another.
//!
//! Each variable is a row (`"0"`..`"N-1"`); its domain is every `"<row><col>"`
//! token for that row. A single [`NotAffected`] constraint per pair of rows
//! folds the usual same-row/same-column/same-diagonal checks together.

use clap::Parser;
use tracing::info;

use binary_csp_solver::constraints::not_affected::NotAffected;
use binary_csp_solver::{Domain, Problem, SolverConfig, SolverEngine, Value};

#[derive(Debug, Parser)]
#[command(about = "Solve the N-queens problem with the binary CSP solver")]
struct Args {
    /// Board size (and number of queens).
    #[arg(default_value_t = 8)]
    size: usize,
}

fn build_problem(size: usize) -> Problem {
    let variables: Vec<String> = (0..size).map(|row| row.to_string()).collect();
    let domains: Vec<Domain> = (0..size)
        .map(|row| {
            Domain::new(
                (0..size).map(move |col| Value::Str(format!("{row}{col}"))),
            )
        })
        .collect();

    let mut constraints: Vec<Box<dyn binary_csp_solver::BinaryConstraint>> = Vec::new();
    for row_a in 0..size {
        for row_b in (row_a + 1)..size {
            constraints.push(Box::new(NotAffected::new(
                row_a.to_string(),
                row_b.to_string(),
            )));
        }
    }

    Problem::new(variables, domains, constraints, vec![]).expect("N-queens problem is well-formed")
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.size > 9 {
        eprintln!("this demo's single-digit row/column encoding only supports boards up to size 9");
        std::process::exit(1);
    }

    let problem = build_problem(args.size);
    let engine = SolverEngine::new(SolverConfig::default());
    let (solution, stats) = engine.solve(&problem).expect("solve cannot fail on a well-formed problem");

    info!(?stats, "search complete");
    println!("{}", binary_csp_solver::solver::stats::render_stats_table(&stats));

    match solution {
        Some(solution) => {
            for row in 0..args.size {
                let token = solution
                    .get(&row.to_string())
                    .and_then(|v| v.as_str())
                    .unwrap();
                let col: usize = token[1..].parse().unwrap();
                let mut line = vec!['.'; args.size];
                line[col] = 'Q';
                println!("{}", line.iter().collect::<String>());
            }
        }
        None => println!("no solution exists for size {}", args.size),
    }
}
