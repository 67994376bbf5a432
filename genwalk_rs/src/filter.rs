use regex::Regex;

use crate::error::Error;
use crate::scan::Directive;

/// Compile the optional user pattern. An absent or empty pattern means "keep
/// everything"; a pattern that fails to compile aborts the run before any
/// traversal output is printed or dispatched.
pub fn compile(pattern: Option<&str>) -> Result<Option<Regex>, Error> {
    match pattern {
        None | Some("") => Ok(None),
        Some(p) => Ok(Some(Regex::new(p)?)),
    }
}

/// Retain only directives whose full raw line text matches. The marker prefix
/// is part of the matched text, so filter semantics stay grep-like over the
/// original source line.
pub fn apply(directives: Vec<Directive>, pattern: Option<&Regex>) -> Vec<Directive> {
    match pattern {
        None => directives,
        Some(re) => directives
            .into_iter()
            .filter(|d| re.is_match(&d.text))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn directive(text: &str) -> Directive {
        Directive {
            file: PathBuf::from("/p/f.go"),
            line: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_pattern_retains_everything() {
        assert!(compile(None).unwrap().is_none());
        assert!(compile(Some("")).unwrap().is_none());

        let all = vec![directive("//go:generate a"), directive("//go:generate b")];
        assert_eq!(apply(all.clone(), None), all);
    }

    #[test]
    fn retains_exactly_the_full_line_matches() {
        let re = compile(Some("mocks")).unwrap().unwrap();
        let input = vec![
            directive("//go:generate mockgen -destination=mocks/db.go"),
            directive("//go:generate stringer -type=Kind"),
            directive("//go:generate go run gen_mocks.go"),
        ];
        let kept = apply(input, Some(&re));
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|d| d.text.contains("mocks")));
    }

    #[test]
    fn pattern_can_match_the_marker_itself() {
        let re = compile(Some("^//go:generate stringer")).unwrap().unwrap();
        let input = vec![
            directive("//go:generate stringer -type=Kind"),
            directive("//go:generate go run stringer.go"),
        ];
        assert_eq!(apply(input, Some(&re)).len(), 1);
    }

    #[test]
    fn bad_pattern_is_a_fatal_error() {
        let err = compile(Some("(unclosed")).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }
}
