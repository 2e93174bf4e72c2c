//! Discovery and sequential processing of a directory of grid-task examples.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::runner::cells::extract_cells;
use crate::runner::grid::GridRenderer;
use crate::runner::solver::{Outcome, Solver};
use crate::runner::summary::ExampleReport;

const TASK_FILE: &str = "task.lp";
const EXAMPLE_PREFIX: &str = "example_";
const EXAMPLE_SUFFIX: &str = "_facts.lp";

/// Relation names the solver is expected to emit for the two grids.
const INPUT_RELATION: &str = "in_cell";
const OUTPUT_RELATION: &str = "out_cell";

const BANNER_WIDTH: usize = 60;

/// Runs every example in a task directory through a solver and renders the
/// grids each solution describes.
pub struct BatchRunner {
    solver: Box<dyn Solver>,
    renderer: GridRenderer,
}

impl BatchRunner {
    pub fn new(solver: Box<dyn Solver>, renderer: GridRenderer) -> Self {
        Self { solver, renderer }
    }

    /// Processes `directory`'s examples in filename order and returns one
    /// report per example. Unsatisfiable or ambiguous examples are reported
    /// and the batch carries on; only missing inputs and an unlaunchable
    /// solver abort it.
    pub fn run(&self, directory: &Path) -> Result<Vec<ExampleReport>> {
        let task = find_task_file(directory)?;
        let examples = find_example_files(directory)?;

        let mut reports = Vec::with_capacity(examples.len());
        for facts in &examples {
            reports.push(self.run_example(facts, &task)?);
        }
        Ok(reports)
    }

    fn run_example(&self, facts: &Path, task: &Path) -> Result<ExampleReport> {
        let name = display_name(facts);

        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Processing: {name}");
        println!("{}", "=".repeat(BANNER_WIDTH));

        let output = self.solver.run(facts, task)?;
        debug!("solver stdout for {name}:\n{}", output.stdout.trim_end());
        if !output.stderr.is_empty() {
            debug!("solver stderr for {name}:\n{}", output.stderr.trim_end());
        }

        let outcome = Outcome::classify(&output.stdout);
        if outcome == Outcome::Unsatisfiable {
            println!("No solution found (UNSATISFIABLE)");
            return Ok(ExampleReport {
                name,
                outcome,
                input_cells: 0,
                output_cells: 0,
            });
        }
        if outcome == Outcome::Unknown {
            warn!("no satisfiability marker in solver output for {name}");
        }

        // The input grid is elided when the instance declares no input
        // cells; the output grid is always shown, if only to say it is
        // empty.
        let input_cells = extract_cells(&output.stdout, INPUT_RELATION);
        if !input_cells.is_empty() {
            print!("{}", self.renderer.render("INPUT Grid", &input_cells));
        }
        let output_cells = extract_cells(&output.stdout, OUTPUT_RELATION);
        print!("{}", self.renderer.render("OUTPUT Grid", &output_cells));

        Ok(ExampleReport {
            name,
            outcome,
            input_cells: input_cells.len(),
            output_cells: output_cells.len(),
        })
    }
}

fn find_task_file(directory: &Path) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(Error::MissingDirectory(directory.to_path_buf()));
    }
    let task = directory.join(TASK_FILE);
    if !task.is_file() {
        return Err(Error::MissingTask(directory.to_path_buf()));
    }
    Ok(task)
}

fn find_example_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|source| Error::DirUnreadable {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut examples = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::DirUnreadable {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(is_example_name)
        {
            examples.push(path);
        }
    }
    examples.sort();

    if examples.is_empty() {
        return Err(Error::NoExamples(directory.to_path_buf()));
    }
    Ok(examples)
}

/// True for names shaped like `example_*_facts.lp`. The prefix and suffix
/// may not overlap, so `example_facts.lp` does not qualify while
/// `example__facts.lp` does.
fn is_example_name(name: &str) -> bool {
    name.len() >= EXAMPLE_PREFIX.len() + EXAMPLE_SUFFIX.len()
        && name.starts_with(EXAMPLE_PREFIX)
        && name.ends_with(EXAMPLE_SUFFIX)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::runner::grid::{DisplayPolicy, Palette};
    use crate::runner::solver::SolverOutput;

    // --- Test Setup ---

    /// Replays canned transcripts keyed by the facts filename. Unscripted
    /// examples get an empty transcript.
    struct ScriptedSolver {
        outputs: HashMap<String, String>,
    }

    impl ScriptedSolver {
        fn new(outputs: &[(&str, &str)]) -> Self {
            Self {
                outputs: outputs
                    .iter()
                    .map(|(name, stdout)| (name.to_string(), stdout.to_string()))
                    .collect(),
            }
        }
    }

    impl Solver for ScriptedSolver {
        fn run(&self, facts: &Path, _task: &Path) -> Result<SolverOutput> {
            Ok(SolverOutput {
                stdout: self
                    .outputs
                    .get(&display_name(facts))
                    .cloned()
                    .unwrap_or_default(),
                stderr: String::new(),
            })
        }
    }

    fn runner_with(solver: ScriptedSolver) -> BatchRunner {
        BatchRunner::new(
            Box::new(solver),
            GridRenderer::new(Palette::default(), DisplayPolicy::Fixed),
        )
    }

    /// Creates a directory holding `task.lp` plus the given facts files.
    fn task_dir(examples: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASK_FILE), "% task rules\n").unwrap();
        for name in examples {
            fs::write(dir.path().join(name), "% facts\n").unwrap();
        }
        dir
    }

    // --- Tests ---

    #[test]
    fn satisfiable_example_yields_counted_cells() {
        let dir = task_dir(&["example_1_facts.lp"]);
        let runner = runner_with(ScriptedSolver::new(&[(
            "example_1_facts.lp",
            "Answer: 1\nin_cell(0,0,red) in_cell(1,0,blue) out_cell(2,2,green)\nSATISFIABLE\n",
        )]));

        let reports = runner.run(dir.path()).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "example_1_facts.lp");
        assert_eq!(reports[0].outcome, Outcome::Satisfiable);
        assert_eq!(reports[0].input_cells, 2);
        assert_eq!(reports[0].output_cells, 1);
    }

    #[test]
    fn unsatisfiable_example_does_not_stop_the_batch() {
        let dir = task_dir(&["example_1_facts.lp", "example_2_facts.lp"]);
        let runner = runner_with(ScriptedSolver::new(&[
            ("example_1_facts.lp", "Solving...\nUNSATISFIABLE\n"),
            (
                "example_2_facts.lp",
                "Answer: 1\nout_cell(1,1,red)\nSATISFIABLE\n",
            ),
        ]));

        let reports = runner.run(dir.path()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].outcome, Outcome::Unsatisfiable);
        assert_eq!(reports[0].input_cells, 0);
        assert_eq!(reports[0].output_cells, 0);
        assert_eq!(reports[1].outcome, Outcome::Satisfiable);
        assert_eq!(reports[1].output_cells, 1);
    }

    #[test]
    fn ambiguous_output_is_still_parsed() {
        let dir = task_dir(&["example_1_facts.lp"]);
        let runner = runner_with(ScriptedSolver::new(&[(
            "example_1_facts.lp",
            "out_cell(3,3,yellow)\n*** Info: interrupted\n",
        )]));

        let reports = runner.run(dir.path()).unwrap();

        assert_eq!(reports[0].outcome, Outcome::Unknown);
        assert_eq!(reports[0].output_cells, 1);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let runner = runner_with(ScriptedSolver::new(&[]));
        let err = runner.run(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::MissingDirectory(_)), "got: {err}");
    }

    #[test]
    fn missing_task_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("example_1_facts.lp"), "% facts\n").unwrap();

        let runner = runner_with(ScriptedSolver::new(&[]));
        let err = runner.run(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingTask(_)), "got: {err}");
    }

    #[test]
    fn directory_without_examples_is_fatal() {
        let dir = task_dir(&[]);
        let runner = runner_with(ScriptedSolver::new(&[]));
        let err = runner.run(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoExamples(_)), "got: {err}");
    }

    #[test]
    fn examples_are_processed_in_filename_order() {
        let dir = task_dir(&[
            "example_2_facts.lp",
            "example_10_facts.lp",
            "example_1_facts.lp",
        ]);
        let runner = runner_with(ScriptedSolver::new(&[]));

        let reports = runner.run(dir.path()).unwrap();

        let names: Vec<&str> = reports.iter().map(|report| report.name.as_str()).collect();
        // Lexicographic order, so 10 sorts before 2.
        assert_eq!(
            names,
            [
                "example_1_facts.lp",
                "example_10_facts.lp",
                "example_2_facts.lp"
            ]
        );
    }

    #[test]
    fn unrelated_files_are_ignored() {
        let dir = task_dir(&["example_1_facts.lp"]);
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("example_1_facts.lp.bak"), "").unwrap();

        let runner = runner_with(ScriptedSolver::new(&[]));
        let reports = runner.run(dir.path()).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "example_1_facts.lp");
    }

    #[test]
    fn example_naming_convention() {
        assert!(is_example_name("example_1_facts.lp"));
        assert!(is_example_name("example_weird_name_facts.lp"));
        assert!(is_example_name("example__facts.lp"));
        assert!(!is_example_name("example_facts.lp"));
        assert!(!is_example_name("example_1_facts.lp.bak"));
        assert!(!is_example_name("task.lp"));
    }
}
