//! Terminal color utilities for CLI output.
//!
//! Provides ANSI color codes and semantic helpers for the directive listing.
//!
//! Vibecrafted with AI Agents by VetCoders (c)2026 VetCoders

use std::io::IsTerminal;

use crate::types::ColorMode;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const RESET: &str = "\x1b[0m";

// Bright variants
pub const BRIGHT_WHITE: &str = "\x1b[97m";

// ============================================================================
// Color State
// ============================================================================

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer that can be passed around to format functions.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    // === Semantic colors ===

    /// `[file:line]` location bracket - BOLD GREEN
    pub fn location(&self, s: &str) -> String {
        self.paint(s, &[BOLD, GREEN])
    }

    /// First command token (the program to run) - BOLD ITALIC BLUE
    pub fn program(&self, s: &str) -> String {
        self.paint(s, &[BOLD, ITALIC, BLUE])
    }

    /// Flag names (`-foo`, the name part of `-foo=bar`) - BOLD BRIGHT WHITE
    pub fn flag(&self, s: &str) -> String {
        self.paint(s, &[BOLD, BRIGHT_WHITE])
    }

    /// Quoted arguments - GREEN
    pub fn quoted(&self, s: &str) -> String {
        self.paint(s, &[GREEN])
    }

    /// Secondary info, hints - DIM
    pub fn dim(&self, s: &str) -> String {
        self.paint(s, &[DIM])
    }

    fn paint(&self, s: &str, codes: &[&str]) -> String {
        if !self.enabled {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len() + codes.len() * 4 + 4);
        for code in codes {
            out.push_str(code);
        }
        out.push_str(s);
        out.push_str(RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_painter_passes_text_through() {
        let painter = Painter::new(ColorMode::Never);
        assert_eq!(painter.location("[x.go:1]"), "[x.go:1]");
        assert_eq!(painter.program("stringer"), "stringer");
    }

    #[test]
    fn always_mode_wraps_with_ansi_codes() {
        let painter = Painter::new(ColorMode::Always);
        let painted = painter.program("stringer");
        assert!(painted.starts_with(BOLD));
        assert!(painted.contains(ITALIC));
        assert!(painted.contains(BLUE));
        assert!(painted.ends_with(RESET));
        assert!(painted.contains("stringer"));
    }
}
