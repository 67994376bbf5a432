//! # genwalk
//!
//! **Batch `go generate` runner** - walk a source tree, list every
//! `go:generate` directive, run generation once per directory.
//!
//! `go generate` itself only looks at the package directory you point it at.
//! genwalk adds the missing outer loop: it discovers every directive under a
//! tree, shows you an aligned, colorized listing of what would run, and then
//! invokes `go generate` exactly once in each directory that still has a
//! retained directive.
//!
//! ## Features
//!
//! - **Breadth-first discovery** - queue-driven walk over directories, or a
//!   single file used as a one-file traversal root
//! - **Grep-like filtering** - `-r <pattern>` keeps only directives whose
//!   full source line matches, and forwards the pattern to `go generate -run`
//! - **Aligned listing** - `[path:line]` brackets padded to one column, with
//!   the command text emphasized per token
//! - **List mode** - `-l` prints the plan without running anything
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use genwalk::{run, RunConfig};
//!
//! let config = RunConfig {
//!     list: true,
//!     ..RunConfig::default()
//! };
//! run(&config).unwrap();
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! genwalk                   # run go generate under the current directory
//! genwalk -l                # list directives without running anything
//! genwalk -r mocks pkg/api  # only directives mentioning "mocks"
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// FIFO worklist of paths driving the traversal.
pub mod queue;

/// Per-file directive extraction.
pub mod scan;

/// Queue-driven breadth-first traversal over files and directories.
pub mod walk;

/// Optional regex filter over full directive lines.
pub mod filter;

/// Printing and once-per-directory generation.
pub mod dispatch;

// ============================================================================
// Presentation & Plumbing
// ============================================================================

/// Alignment and per-token display emphasis.
pub mod format;

/// ANSI color helpers.
pub mod colors;

/// Command-line surface.
pub mod cli;

/// Optional `.genwalk.toml` support.
pub mod config;

/// Crate error type.
pub mod error;

/// Shared run pipeline for the binary.
pub mod run;

/// Run configuration and color mode.
pub mod types;

pub use error::Error;
pub use run::run;
pub use scan::{Directive, MARKER_PREFIX};
pub use types::{ColorMode, RunConfig};
