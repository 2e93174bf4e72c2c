use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fatal precondition failures. Everything here terminates the whole batch;
/// per-example conditions (unsatisfiable instances, ambiguous outcomes,
/// absent relations) are deliberately not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("task.lp not found in directory '{}'", .0.display())]
    MissingTask(PathBuf),

    #[error("no example_*_facts.lp files found in directory '{}'", .0.display())]
    NoExamples(PathBuf),

    #[error("could not read directory '{}': {}", .path.display(), .source)]
    DirUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not launch solver '{program}' ({source}); is it installed and on your PATH?")]
    SolverLaunch {
        program: String,
        source: std::io::Error,
    },
}
