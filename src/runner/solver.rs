//! Invocation of the external ASP solver and classification of its verdict.

use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Passed as the answer-set count so the solver enumerates every model
/// rather than stopping at the first.
const ALL_ANSWER_SETS: &str = "0";

/// Verdict markers in the solver's output. `UNSATISFIABLE` contains
/// `SATISFIABLE` as a substring, so classification checks it first.
const UNSAT_MARKER: &str = "UNSATISFIABLE";
const SAT_MARKER: &str = "SATISFIABLE";

/// The solver's verdict on one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Satisfiable,
    Unsatisfiable,
    /// Neither marker appeared, e.g. the solver crashed or was interrupted.
    Unknown,
}

impl Outcome {
    /// Classifies a solver transcript by the verdict markers it contains.
    pub fn classify(stdout: &str) -> Self {
        if stdout.contains(UNSAT_MARKER) {
            Outcome::Unsatisfiable
        } else if stdout.contains(SAT_MARKER) {
            Outcome::Satisfiable
        } else {
            Outcome::Unknown
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Satisfiable => write!(f, "satisfiable"),
            Outcome::Unsatisfiable => write!(f, "unsatisfiable"),
            Outcome::Unknown => write!(f, "unknown"),
        }
    }
}

/// Captured output of one solver run.
#[derive(Debug, Clone, Default)]
pub struct SolverOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A solver that can be asked to solve one facts/task pair. The batch runner
/// only depends on this trait, so tests can substitute a scripted stand-in.
pub trait Solver {
    fn run(&self, facts: &Path, task: &Path) -> Result<SolverOutput>;
}

/// Runs the real `clingo` binary (or any drop-in replacement) as a
/// subprocess.
#[derive(Debug, Clone)]
pub struct ClingoSolver {
    program: String,
}

impl ClingoSolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ClingoSolver {
    fn default() -> Self {
        Self::new("clingo")
    }
}

impl Solver for ClingoSolver {
    fn run(&self, facts: &Path, task: &Path) -> Result<SolverOutput> {
        // Satisfiability is classified from the output text; the exit
        // status is ignored (clingo exits non-zero for UNSAT).
        let output = Command::new(&self.program)
            .arg(facts)
            .arg(task)
            .arg(ALL_ANSWER_SETS)
            .output()
            .map_err(|source| Error::SolverLaunch {
                program: self.program.clone(),
                source,
            })?;

        Ok(SolverOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
