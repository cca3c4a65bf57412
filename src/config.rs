//! @dose
//! purpose: Configuration file parsing for toklen.toml. Lets a project pin the encoding
//!     used when no -e or -m selector is given on the command line.
//!
//! when-editing:
//!     - !Config is loaded once at startup and passed through the call chain
//!     - !Explicit selectors always win; config only replaces the built-in default
//!     - A model knob is deliberately absent: the at-most-one-selector rule stays a
//!       command-line concern
//!
//! invariants:
//!     - Config::load returns the default config if toklen.toml doesn't exist
//!     - A malformed config never aborts the run; it warns on stderr and falls back
//!
//! gotchas:
//!     - A configured name is validated at resolution time like any -e value, so a typo
//!       surfaces as the normal "Unknown encoding" failure

use crate::encoding::DEFAULT_ENCODING;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "toklen.toml";

/// Main configuration structure matching toklen.toml
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Encoding used when neither -e nor -m is given
    pub encoding: Option<String>,
}

impl Config {
    /// Load configuration from toklen.toml in the given directory
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// The encoding to fall back to when the command line picked none
    pub fn default_encoding(&self) -> &str {
        self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING)
    }
}
