use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::queue::PathQueue;
use crate::scan::{self, Directive};

/// Source extension recognized by the traversal; everything else is skipped
/// silently.
pub const GO_EXT: &str = "go";

/// What a popped queue entry turned out to be. A plain file argument behaves
/// like a directory listing of exactly one file, so the CLI accepts either.
enum Listing {
    SingleFile(PathBuf),
    Directory(PathBuf),
}

/// Resolve `path` to absolute form against `base`.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn has_go_ext(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(GO_EXT)
}

/// Drain the queue, scanning every matching file reachable from it, and
/// return all directives in discovery order.
///
/// Directories push their subdirectories back onto the queue (breadth-first
/// over the whole tree) and scan their files inline; directory entries are
/// visited in name order. Any stat/open/read failure aborts the traversal.
pub fn collect(pwd: &Path, queue: &mut PathQueue) -> Result<Vec<Directive>, Error> {
    let mut directives = Vec::new();
    while let Some(next) = queue.pop() {
        let entry = absolutize(pwd, &next);
        assert!(
            entry.is_absolute(),
            "not an absolute path: {}",
            entry.display()
        );

        let meta = fs::metadata(&entry).map_err(|e| Error::io(&entry, e))?;
        let listing = if meta.is_dir() {
            Listing::Directory(entry)
        } else {
            Listing::SingleFile(entry)
        };

        match listing {
            Listing::SingleFile(file) => {
                if has_go_ext(&file) {
                    scan_file(&file, &mut directives)?;
                }
            }
            Listing::Directory(dir) => {
                debug!(dir = %dir.display(), "listing directory");
                let mut entries: Vec<fs::DirEntry> = fs::read_dir(&dir)
                    .map_err(|e| Error::io(&dir, e))?
                    .collect::<Result<_, _>>()
                    .map_err(|e| Error::io(&dir, e))?;
                entries.sort_by_key(|entry| entry.file_name());

                for entry in entries {
                    let child = dir.join(entry.file_name());
                    assert!(
                        child.is_absolute(),
                        "not an absolute path: {}",
                        child.display()
                    );
                    let kind = entry.file_type().map_err(|e| Error::io(&child, e))?;
                    if kind.is_dir() {
                        queue.push(child);
                    } else if has_go_ext(&child) {
                        scan_file(&child, &mut directives)?;
                    }
                }
            }
        }
    }
    Ok(directives)
}

fn scan_file(file: &Path, out: &mut Vec<Directive>) -> Result<(), Error> {
    debug!(file = %file.display(), "scanning");
    let handle = fs::File::open(file).map_err(|e| Error::io(file, e))?;
    let found =
        scan::scan_reader(file, BufReader::new(handle)).map_err(|e| Error::io(file, e))?;
    out.extend(found);
    Ok(())
}
