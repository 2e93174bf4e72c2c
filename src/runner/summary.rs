//! End-of-batch reporting.

use prettytable::{Cell, Row, Table};

use crate::runner::solver::Outcome;

/// What happened for one example: the verdict and how many cells each grid
/// relation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleReport {
    pub name: String,
    pub outcome: Outcome,
    pub input_cells: usize,
    pub output_cells: usize,
}

/// Renders the per-example reports as a table, one row per example in batch
/// order.
pub fn render_summary_table(reports: &[ExampleReport]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Example"),
        Cell::new("Outcome"),
        Cell::new("Input Cells"),
        Cell::new("Output Cells"),
    ]));

    for report in reports {
        table.add_row(Row::new(vec![
            Cell::new(&report.name),
            Cell::new(&report.outcome.to_string()),
            Cell::new(&report.input_cells.to_string()),
            Cell::new(&report.output_cells.to_string()),
        ]));
    }

    table.to_string()
}
