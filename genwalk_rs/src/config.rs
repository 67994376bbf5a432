//! Configuration file support for genwalk.
//!
//! Loads optional `.genwalk.toml` from the working directory.

use serde::Deserialize;
use std::path::Path;

use crate::types::ColorMode;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GenwalkConfig {
    /// Program invoked for generation. Default: `go` from PATH.
    /// Example: `go = "/usr/local/go/bin/go"`
    pub go: Option<String>,
    /// Default color mode when no `--color` flag is given: auto, always, never.
    pub color: Option<String>,
}

impl GenwalkConfig {
    /// Load config from `.genwalk.toml` in the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(".genwalk.toml"))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[genwalk][warn] Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[genwalk][warn] Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The configured default color mode, if any and recognized.
    pub fn color_mode(&self) -> Option<ColorMode> {
        match self.color.as_deref() {
            None => None,
            Some("auto") => Some(ColorMode::Auto),
            Some("always") => Some(ColorMode::Always),
            Some("never") => Some(ColorMode::Never),
            Some(other) => {
                eprintln!("[genwalk][warn] Unknown color mode {other:?} in config, using auto");
                None
            }
        }
    }
}
