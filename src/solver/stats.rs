//! Rendering [`SearchStats`] as a human-readable table for CLI demos.

use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Values pruned by inference"),
        Cell::new(&stats.values_pruned_by_inference.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Values pruned by AC-3"),
        Cell::new(&stats.values_pruned_by_ac3.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_metric() {
        let _ = tracing_subscriber::fmt::try_init();
        let stats = SearchStats {
            nodes_visited: 10,
            backtracks: 3,
            values_pruned_by_inference: 7,
            values_pruned_by_ac3: 2,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("10"));
        assert!(rendered.contains("Backtracks"));
    }
}
