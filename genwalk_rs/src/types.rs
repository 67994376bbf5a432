use std::path::PathBuf;

use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Explicit configuration for one run. Assembled from the CLI surface and the
/// optional config file; the core never reads ambient global state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Traversal roots; files or directories. Empty means the current directory.
    pub roots: Vec<PathBuf>,
    /// List directives without invoking generation.
    pub list: bool,
    /// Optional regular expression matched against the full directive line.
    pub run_pattern: Option<String>,
    pub color: ColorMode,
    pub verbose: bool,
    /// Program invoked for generation. Normally `go` from PATH.
    pub program: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            list: false,
            run_pattern: None,
            color: ColorMode::Never,
            verbose: false,
            program: "go".to_string(),
        }
    }
}
