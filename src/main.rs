use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aspgrid::runner::batch::BatchRunner;
use aspgrid::runner::grid::{DisplayPolicy, GridRenderer, Palette};
use aspgrid::runner::solver::ClingoSolver;
use aspgrid::runner::summary::render_summary_table;

/// Run every example in a clingo task directory and draw the answer grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing `task.lp` and `example_*_facts.lp` files.
    directory: PathBuf,

    /// How to size the drawn grids: a fixed 0..=10 window, or fitted to
    /// the data.
    #[arg(long, value_enum, default_value = "fixed")]
    grid: DisplayPolicy,

    /// Solver executable to invoke.
    #[arg(long, default_value = "clingo")]
    solver: String,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the grids.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let runner = BatchRunner::new(
        Box::new(ClingoSolver::new(args.solver)),
        GridRenderer::new(Palette::default(), args.grid),
    );

    match runner.run(&args.directory) {
        Ok(reports) => {
            println!("\nBatch summary:");
            print!("{}", render_summary_table(&reports));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
