//! The batch pipeline: discover examples, run the solver, extract cells,
//! draw grids, report.

pub mod batch;
pub mod cells;
pub mod grid;
pub mod solver;
pub mod summary;
