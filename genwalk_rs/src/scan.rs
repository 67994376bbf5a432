use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Exact literal marking a directive line. Case-sensitive, no leading
/// whitespace tolerance; the trailing space is part of the marker, matching
/// the `go generate` convention.
pub const MARKER_PREFIX: &str = "//go:generate ";

/// One directive line found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Absolute path of the containing file.
    pub file: PathBuf,
    /// 1-based source line number; every line read counts, matching or not.
    pub line: usize,
    /// The matched line verbatim, marker prefix included, newline trimmed.
    pub text: String,
}

/// Extract the directives of one readable byte stream, in file order.
///
/// Lines are read with `read_until` so arbitrarily long lines work; a
/// trailing `\r` (CRLF sources) is trimmed along with the newline. Files that
/// contain no directives yield an empty vec, not an error.
pub fn scan_reader<R: BufRead>(file: &Path, mut reader: R) -> std::io::Result<Vec<Directive>> {
    let mut directives = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        let mut text: &[u8] = &buf;
        if text.last() == Some(&b'\n') {
            text = &text[..text.len() - 1];
        }
        if text.last() == Some(&b'\r') {
            text = &text[..text.len() - 1];
        }
        if text.starts_with(MARKER_PREFIX.as_bytes()) {
            directives.push(Directive {
                file: file.to_path_buf(),
                line,
                text: String::from_utf8_lossy(text).into_owned(),
            });
        }
    }
    Ok(directives)
}
