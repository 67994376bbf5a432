use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Error type for a genwalk run. Every variant is fatal: the run stops at the
/// first error, nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot determine working directory: {0}")]
    Cwd(#[source] io::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("could not run {program} in {}: {source}", .dir.display())]
    Spawn {
        program: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("generate failed in {}: {status}", .dir.display())]
    Failed { dir: PathBuf, status: ExitStatus },
}

impl Error {
    /// Downstream closed the pipe (e.g. piping into `head`). The binary treats
    /// this as a quiet success rather than a run failure.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Stdout(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
