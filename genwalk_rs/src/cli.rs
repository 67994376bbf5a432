//! Command-line surface for the genwalk binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GenwalkConfig;
use crate::types::{ColorMode, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "genwalk")]
#[command(about = "List go:generate directives and run go generate per directory")]
#[command(version)]
pub struct Cli {
    /// Paths to scan, files or directories (default: current directory)
    pub paths: Vec<PathBuf>,

    /// List directives without running "go generate"
    #[arg(short, long)]
    pub list: bool,

    /// Only keep directives whose full original line matches this regular
    /// expression; forwarded to "go generate -run"
    #[arg(short, long, value_name = "PATTERN")]
    pub run: Option<String>,

    /// When to colorize output
    #[arg(long, value_name = "WHEN", value_enum)]
    pub color: Option<ColorMode>,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the parsed flags with the optional config file into one explicit
    /// run configuration. CLI flags win over config values.
    pub fn into_config(self, file: &GenwalkConfig) -> RunConfig {
        RunConfig {
            roots: self.paths,
            list: self.list,
            run_pattern: self.run,
            color: self
                .color
                .or_else(|| file.color_mode())
                .unwrap_or(ColorMode::Auto),
            verbose: self.verbose,
            program: file.go.clone().unwrap_or_else(|| "go".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_auto_color_and_go_program() {
        let cli = Cli::parse_from(["genwalk"]);
        let config = cli.into_config(&GenwalkConfig::default());
        assert!(config.roots.is_empty());
        assert!(!config.list);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.program, "go");
    }

    #[test]
    fn cli_color_flag_wins_over_config() {
        let cli = Cli::parse_from(["genwalk", "--color", "never"]);
        let file = GenwalkConfig {
            color: Some("always".to_string()),
            ..GenwalkConfig::default()
        };
        assert_eq!(cli.into_config(&file).color, ColorMode::Never);
    }

    #[test]
    fn config_supplies_program_and_color_defaults() {
        let cli = Cli::parse_from(["genwalk", "-l", "-r", "mocks", "pkg"]);
        let file = GenwalkConfig {
            go: Some("/opt/go/bin/go".to_string()),
            color: Some("never".to_string()),
        };
        let config = cli.into_config(&file);
        assert!(config.list);
        assert_eq!(config.run_pattern.as_deref(), Some("mocks"));
        assert_eq!(config.roots, vec![PathBuf::from("pkg")]);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.program, "/opt/go/bin/go");
    }
}
