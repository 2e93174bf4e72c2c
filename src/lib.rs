//! Aspgrid runs a directory of clingo grid tasks and draws the answers.
//!
//! A task directory pairs one `task.lp` rule file with any number of
//! `example_*_facts.lp` instance files. Each instance is handed to the
//! solver, the answer text is mined for `in_cell(x,y,colour)` and
//! `out_cell(x,y,colour)` tuples, and the tuples are rendered as coloured
//! grids in the terminal.
//!
//! # Core Pieces
//!
//! - **[`extract_cells`](runner::cells::extract_cells)**: pulls `(x,y,label)`
//!   tuples for a named relation out of raw solver text, skipping anything
//!   malformed.
//! - **[`GridRenderer`](runner::grid::GridRenderer)**: draws a cell list as a
//!   titled glyph grid with a legend, under a fixed or data-sized window.
//! - **[`BatchRunner`](runner::batch::BatchRunner)**: discovers the files,
//!   drives a [`Solver`](runner::solver::Solver) over every example and
//!   collects an [`ExampleReport`](runner::summary::ExampleReport) per run.
//!
//! # Example: From Solver Text to a Grid
//!
//! ```
//! use aspgrid::runner::cells::extract_cells;
//! use aspgrid::runner::grid::{DisplayPolicy, GridRenderer, Palette};
//!
//! let transcript = "Answer: 1\nout_cell(1,1,red) out_cell(2,2,blue)\nSATISFIABLE";
//! let cells = extract_cells(transcript, "out_cell");
//! assert_eq!(cells.len(), 2);
//!
//! let renderer = GridRenderer::new(Palette::default(), DisplayPolicy::Fit);
//! let grid = renderer.render("OUTPUT Grid", &cells);
//! assert!(grid.contains("Legend:"));
//! ```
pub mod error;
pub mod runner;
