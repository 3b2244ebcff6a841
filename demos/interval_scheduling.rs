//! Schedules a fixed set of meetings onto a single room inside a working
//! window, so that no two overlap.
//!
//! Each variable is a meeting; its domain is every valid `"<room><start>,<end>"`
//! placement of that meeting's duration inside the working day. A
//! [`WithinWindow`] unary constraint keeps every placement inside the
//! window; a [`NotOverlap`] binary constraint keeps every pair of meetings
//! from colliding on the shared room.

use clap::Parser;
use tracing::info;

use binary_csp_solver::constraints::not_overlap::NotOverlap;
use binary_csp_solver::constraints::schedule::WithinWindow;
use binary_csp_solver::{Domain, Problem, SolverConfig, SolverEngine, Value};

#[derive(Debug, Parser)]
#[command(about = "Schedule meetings into a single room with the binary CSP solver")]
struct Args {
    /// Earliest permitted start time.
    #[arg(long, default_value_t = 9.0)]
    earliest: f64,
    /// Latest permitted end time.
    #[arg(long, default_value_t = 17.0)]
    latest: f64,
}

/// A meeting's name and duration, in hours.
const MEETINGS: [(&str, f64); 4] = [
    ("standup", 0.5),
    ("design-review", 2.0),
    ("retro", 1.0),
    ("one-on-one", 1.0),
];

fn build_problem(earliest: f64, latest: f64) -> Problem {
    const ROOM: char = 'R';
    let variables: Vec<String> = MEETINGS.iter().map(|(name, _)| name.to_string()).collect();

    let slots = ((latest - earliest) as i64).max(1);
    let domains: Vec<Domain> = MEETINGS
        .iter()
        .map(|(_, duration)| {
            let duration = *duration;
            Domain::new((0..slots).map(move |offset| {
                let s = earliest + offset as f64;
                Value::Str(format!("{ROOM}{s},{}", s + duration))
            }))
        })
        .collect();

    let mut constraints_unary: Vec<Box<dyn binary_csp_solver::UnaryConstraint>> = Vec::new();
    for (name, _) in MEETINGS {
        constraints_unary.push(Box::new(WithinWindow::new(name, earliest, latest)));
    }

    let mut constraints_binary: Vec<Box<dyn binary_csp_solver::BinaryConstraint>> = Vec::new();
    for i in 0..MEETINGS.len() {
        for j in (i + 1)..MEETINGS.len() {
            constraints_binary.push(Box::new(NotOverlap::new(MEETINGS[i].0, MEETINGS[j].0)));
        }
    }

    Problem::new(variables, domains, constraints_binary, constraints_unary)
        .expect("scheduling problem is well-formed")
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let problem = build_problem(args.earliest, args.latest);
    let engine = SolverEngine::new(SolverConfig::default());
    let (solution, stats) = engine.solve(&problem).expect("solve cannot fail on a well-formed problem");

    info!(?stats, "search complete");
    println!("{}", binary_csp_solver::solver::stats::render_stats_table(&stats));

    match solution {
        Some(solution) => {
            for (name, _) in MEETINGS {
                println!("{name}: {}", solution.get(name).unwrap());
            }
        }
        None => println!("no conflict-free schedule exists in this window"),
    }
}
