//! Configuration: optional TOML file defaults merged under CLI flags.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, When};
use crate::error::Error;
use crate::logger::{ConsoleOptions, default_bells};
use crate::severity::Severity;

/// Console presentation defaults from the config file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleSection {
    pub color: Option<When>,
    pub bell: Option<When>,
    pub force_wide: Option<bool>,
}

/// Contents of `config.toml`. Every field is optional; a missing file is the
/// same as an empty one.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub console: ConsoleSection,
}

impl FileConfig {
    /// Path under the platform config directory, e.g.
    /// `~/.config/groundwork/config.toml` on Linux.
    ///
    /// # Errors
    /// [`Error::ConfigDirNotFound`] when the platform reports no config dir.
    pub fn default_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "groundwork")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Loads from the default location; a missing directory or file yields
    /// the defaults rather than an error.
    ///
    /// # Errors
    /// I/O failures other than the file being absent, and TOML parse errors.
    pub fn load() -> Result<Self, Error> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(Error::ConfigDirNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// # Errors
    /// I/O failures other than the file being absent, and TOML parse errors.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// The merged result the rest of the program consumes. CLI flags win over
/// file values; both fall back to `auto` / off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub color: When,
    pub bell: When,
    /// Count of `-e` occurrences; >= 1 enables extended layouts.
    pub extended: u8,
    pub force_wide: bool,
    pub verbosity: i32,
}

impl Settings {
    #[must_use]
    pub fn merge(cli: &Cli, file: &FileConfig) -> Self {
        Self {
            color: cli.color.or(file.console.color).unwrap_or(When::Auto),
            bell: cli.bell.or(file.console.bell).unwrap_or(When::Auto),
            extended: cli.extended,
            // A second -e forces wide, matching the documented flag behavior.
            force_wide: cli.force_wide
                || cli.extended > 1
                || file.console.force_wide.unwrap_or(false),
            verbosity: cli.verbosity(),
        }
    }

    /// Resolves the tty-dependent tri-states into concrete router options.
    #[must_use]
    pub fn console_options(&self) -> ConsoleOptions {
        let bells: HashMap<Severity, String> = if self.bell.resolve_stdout() {
            default_bells()
        } else {
            HashMap::new()
        };
        ConsoleOptions::new()
            .colors(self.color.resolve_stdout())
            .bells(bells)
            .extended(self.extended > 0)
            .force_wide(self.force_wide)
    }
}
