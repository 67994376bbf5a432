//! Rendering of discovered directives: path shortening, display tokenizing,
//! and column alignment. Cosmetic only; dispatch never looks at the rendered
//! strings.

use std::path::Path;

use crate::colors::Painter;
use crate::scan::{Directive, MARKER_PREFIX};

/// A directive paired with its rendered display line.
pub struct GenerateItem {
    pub directive: Directive,
    pub repr: String,
}

/// Paths under the working directory display relative to it; everything else
/// stays absolute.
pub fn shorten(pwd: &Path, file: &Path) -> String {
    match file.strip_prefix(pwd) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => file.display().to_string(),
    }
}

/// Render every directive as an aligned `[path:line] command` string.
///
/// The column width is the maximum of `len(shortened path) + len(decimal
/// line)` over the whole batch, so every bracket segment ends at the same
/// column regardless of which file a directive came from.
pub fn render(pwd: &Path, directives: Vec<Directive>, painter: &Painter) -> Vec<GenerateItem> {
    let shortened: Vec<String> = directives
        .iter()
        .map(|d| shorten(pwd, &d.file))
        .collect();

    let mut width = 0usize;
    for (directive, short) in directives.iter().zip(&shortened) {
        width = width.max(short.len() + directive.line.to_string().len());
    }

    directives
        .into_iter()
        .zip(shortened)
        .map(|(directive, short)| {
            let location = format!("[{}:{}]", short, directive.line);
            let padding = " ".repeat(width + 3 - location.len());
            let repr = format!(
                "{}{} {}",
                painter.location(&location),
                padding,
                emphasize(&directive.text, painter)
            );
            GenerateItem { directive, repr }
        })
        .collect()
}

/// Strip the marker and re-join the command with per-token emphasis: the
/// program name, flag names (up to a `=`), and quoted arguments each get
/// their own color.
fn emphasize(text: &str, painter: &Painter) -> String {
    let command = text.strip_prefix(MARKER_PREFIX).unwrap_or(text);
    let mut tokens = split_tokens(command);
    for (i, token) in tokens.iter_mut().enumerate() {
        if i == 0 {
            *token = painter.program(token);
        } else if token.starts_with('-') {
            *token = match token.find('=') {
                Some(eq) => format!("{}{}", painter.flag(&token[..eq]), &token[eq..]),
                None => painter.flag(token),
            };
        } else if token.starts_with('"') || token.starts_with('\'') {
            *token = painter.quoted(token);
        }
    }
    tokens.join(" ")
}

/// Split a command line on spaces for display purposes, keeping quoted
/// sections (and their quotes) together. Backslash-escaped quotes do not
/// toggle quoting. This is not a shell parser; it only has to group tokens
/// the way a reader would.
pub fn split_tokens(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut arg = String::new();
    let mut single_quoted = false;
    let mut double_quoted = false;
    let mut prev = '\0';

    for ch in line.chars() {
        match ch {
            ' ' if !single_quoted && !double_quoted => {
                if !arg.is_empty() {
                    args.push(std::mem::take(&mut arg));
                }
            }
            '"' => {
                if !(prev == '\\' || single_quoted) {
                    double_quoted = !double_quoted;
                }
                arg.push('"');
            }
            '\'' => {
                if !(prev == '\\' || double_quoted) {
                    single_quoted = !single_quoted;
                }
                arg.push('\'');
            }
            _ => arg.push(ch),
        }
        prev = ch;
    }
    if !arg.is_empty() {
        args.push(arg);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;
    use std::path::PathBuf;

    fn plain() -> Painter {
        Painter::new(ColorMode::Never)
    }

    fn directive(file: &str, line: usize, text: &str) -> Directive {
        Directive {
            file: PathBuf::from(file),
            line,
            text: text.to_string(),
        }
    }

    #[test]
    fn shortens_paths_under_the_working_directory() {
        let pwd = Path::new("/home/dev/proj");
        assert_eq!(shorten(pwd, Path::new("/home/dev/proj/a/x.go")), "a/x.go");
        assert_eq!(shorten(pwd, Path::new("/elsewhere/y.go")), "/elsewhere/y.go");
    }

    #[test]
    fn splits_on_spaces_outside_quotes() {
        assert_eq!(
            split_tokens("stringer -type=Kind out.go"),
            vec!["stringer", "-type=Kind", "out.go"]
        );
    }

    #[test]
    fn quoted_sections_stay_together() {
        assert_eq!(
            split_tokens(r#"sh -c "go run gen.go" 'two words'"#),
            vec!["sh", "-c", r#""go run gen.go""#, "'two words'"]
        );
    }

    #[test]
    fn escaped_quotes_do_not_toggle() {
        assert_eq!(
            split_tokens(r#"echo "a \" b" tail"#),
            vec!["echo", r#""a \" b""#, "tail"]
        );
    }

    #[test]
    fn repeated_spaces_collapse() {
        assert_eq!(split_tokens("tool   -v"), vec!["tool", "-v"]);
    }

    #[test]
    fn rendering_strips_the_marker() {
        let items = render(
            Path::new("/p"),
            vec![directive("/p/x.go", 3, "//go:generate stringer -type=Kind")],
            &plain(),
        );
        assert_eq!(items[0].repr, "[x.go:3] stringer -type=Kind");
    }

    #[test]
    fn bracket_segments_end_at_the_same_column() {
        let items = render(
            Path::new("/p"),
            vec![
                directive("/p/a/long/path.go", 7, "//go:generate one"),
                directive("/p/b.go", 123, "//go:generate two"),
                directive("/p/c.go", 1, "//go:generate three"),
            ],
            &plain(),
        );
        let starts: Vec<usize> = items
            .iter()
            .map(|item| {
                let cmd = item.directive.text.strip_prefix(MARKER_PREFIX).unwrap();
                item.repr.rfind(cmd).unwrap()
            })
            .collect();
        assert_eq!(starts[0], starts[1]);
        assert_eq!(starts[1], starts[2]);
    }

    #[test]
    fn flag_value_keeps_its_value_uncolored() {
        let painter = Painter::new(ColorMode::Always);
        let items = render(
            Path::new("/p"),
            vec![directive("/p/x.go", 1, "//go:generate tool -out=gen.go")],
            &painter,
        );
        // Only the flag name is wrapped; the `=value` part stays plain.
        assert!(items[0].repr.contains("\x1b[1m\x1b[97m-out\x1b[0m=gen.go"));
    }
}
