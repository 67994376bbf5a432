//! Printing and per-directory generation.
//!
//! Items print in discovery order; generation runs at most once per
//! containing directory, triggered by the first directive seen there. A
//! failed invocation aborts the rest of the run.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;
use crate::format::GenerateItem;

/// Seam for the external generation command, so the dispatch loop can be
/// exercised without spawning processes.
pub trait Generate {
    fn generate(&mut self, dir: &Path) -> Result<(), Error>;
}

/// Invokes `go generate .` (or a configured replacement program) scoped to
/// one directory, forwarding the active filter pattern as `-run`.
///
/// Stdio is inherited so interactive or verbose generator output streams
/// live. Failure is a non-zero exit status; stderr output alone is not.
pub struct GoGenerate {
    program: String,
    run_pattern: Option<String>,
}

impl GoGenerate {
    pub fn new(program: impl Into<String>, run_pattern: Option<String>) -> Self {
        Self {
            program: program.into(),
            run_pattern: run_pattern.filter(|p| !p.is_empty()),
        }
    }
}

impl Generate for GoGenerate {
    fn generate(&mut self, dir: &Path) -> Result<(), Error> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("generate");
        if let Some(pattern) = &self.run_pattern {
            cmd.arg("-run").arg(pattern);
        }
        cmd.arg(".")
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(dir = %dir.display(), program = %self.program, "running generate");
        let status = cmd.status().map_err(|e| Error::Spawn {
            program: self.program.clone(),
            dir: dir.to_path_buf(),
            source: e,
        })?;
        if !status.success() {
            return Err(Error::Failed {
                dir: dir.to_path_buf(),
                status,
            });
        }
        Ok(())
    }
}

/// Emit every rendered item to `out` in order; outside list mode, dispatch
/// the generator once per unique containing directory as each directory is
/// first encountered. A generation failure propagates immediately — lines
/// already printed and directories already generated stand.
pub fn run_items<W: Write>(
    items: &[GenerateItem],
    list: bool,
    generator: &mut dyn Generate,
    out: &mut W,
) -> Result<(), Error> {
    let mut generated: HashSet<PathBuf> = HashSet::with_capacity(items.len());
    for item in items {
        writeln!(out, "{}", item.repr).map_err(Error::Stdout)?;
        if list {
            continue;
        }
        let dir = item
            .directive
            .file
            .parent()
            .expect("directive file has no parent directory");
        if !generated.contains(dir) {
            generator.generate(dir)?;
            generated.insert(dir.to_path_buf());
        }
    }
    Ok(())
}
