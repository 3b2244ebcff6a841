//! Colours the classic Australian map (seven regions) with as few colours as
//! the caller allows, so that no two adjacent regions share a colour.

use clap::Parser;
use tracing::info;

use binary_csp_solver::constraints::not_equal::NotEqual;
use binary_csp_solver::{Domain, Problem, SolverConfig, SolverEngine, Value};

const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
const ADJACENCIES: [(&str, &str); 9] = [
    ("WA", "NT"),
    ("WA", "SA"),
    ("NT", "SA"),
    ("NT", "Q"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("Q", "NSW"),
    ("NSW", "V"),
];

#[derive(Debug, Parser)]
#[command(about = "Colour the Australian map with the binary CSP solver")]
struct Args {
    /// Number of colours available.
    #[arg(default_value_t = 3)]
    colours: usize,
}

fn build_problem(colours: usize) -> Problem {
    let variables: Vec<String> = REGIONS.iter().map(|r| r.to_string()).collect();
    let domains: Vec<Domain> = REGIONS
        .iter()
        .map(|_| Domain::new((0..colours as i64).map(Value::Int)))
        .collect();
    let constraints: Vec<Box<dyn binary_csp_solver::BinaryConstraint>> = ADJACENCIES
        .iter()
        .map(|(a, b)| Box::new(NotEqual::new(*a, *b)) as Box<dyn binary_csp_solver::BinaryConstraint>)
        .collect();

    Problem::new(variables, domains, constraints, vec![]).expect("map colouring problem is well-formed")
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let problem = build_problem(args.colours);
    let engine = SolverEngine::new(SolverConfig::default());
    let (solution, stats) = engine.solve(&problem).expect("solve cannot fail on a well-formed problem");

    info!(?stats, "search complete");
    println!("{}", binary_csp_solver::solver::stats::render_stats_table(&stats));

    match solution {
        Some(solution) => {
            for region in REGIONS {
                println!("{region}: colour {}", solution.get(region).unwrap());
            }
        }
        None => println!("no {}-colouring exists", args.colours),
    }
}
