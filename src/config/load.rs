//! The main config loading module for pathsurfer.
//!
//! Handles loading and deserializing settings from `pathsurfer.toml`, and merging the command
//! line flags on top of them.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.

use crate::config::{Display, General, Log, Theme};
use crate::utils::cli::Args;
use crate::utils::default_log_path;

use serde::Deserialize;
use thiserror::Error;

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "PSURF_CONFIG";

/// Raw configuration as read from the toml file.
/// Every table is optional and falls back to its defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    log: Log,
    display: Display,
    theme: Theme,
}

/// Failure to read an existing config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration struct for pathsurfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: General,
    log: Log,
    display: Display,
    theme: Theme,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            log: raw.log,
            display: raw.display,
            theme: raw.theme,
        }
    }
}

impl Config {
    /// Loads the config file at `path`.
    ///
    /// A missing file silently yields the defaults. An unreadable or invalid file is reported
    /// on stderr and the defaults are used.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                eprintln!("[pathsurfer] {e}. Using internal defaults.");
                Self::default()
            }
        }
    }

    /// Reads and parses the config file at `path`. Returns `Ok(None)` if there is no file.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let raw = toml::from_str::<RawConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(raw.into()))
    }

    /// Applies command line flags on top of the file settings. Flags always win.
    pub fn apply_args(&mut self, args: &Args) {
        if args.debug {
            self.log.set_debug(true);
        }
        if args.show_hidden_files {
            self.general.set_show_hidden(true);
        }
        if let Some(file) = &args.log_file {
            self.log.set_file(file.clone());
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn log(&self) -> &Log {
        &self.log
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The log file to write to: the configured one, or the per-user default.
    pub fn log_path(&self) -> PathBuf {
        self.log
            .file()
            .map(Path::to_path_buf)
            .unwrap_or_else(default_log_path)
    }

    /// Determine the default configuration file path.
    /// Checks the PSURF_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then the platform config directory.
    pub fn default_path() -> PathBuf {
        resolve_config_path(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::config_dir(),
        )
    }

    /// Writes a commented default configuration file at `path`.
    /// Fails if the file already exists.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)
    }
}

fn resolve_config_path(
    explicit: Option<PathBuf>,
    xdg_config: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    xdg_config
        .filter(|p| !p.as_os_str().is_empty())
        .or(config_dir)
        .map(|dir| dir.join("pathsurfer").join("pathsurfer.toml"))
        .unwrap_or_else(|| PathBuf::from("pathsurfer.toml"))
}

const DEFAULT_CONFIG: &str = r##"# pathsurfer.toml - default configuration for pathsurfer
#
# Colors are names ("green", "darkgray") or hex codes ("#RRGGBB").

[general]
show_hidden = false

[log]
debug = false
# file = "~/.local/share/pathsurfer/pathsurfer.log"

[display]
parent = true
preview = true
separators = true
dir_marker = true

[display.layout]
parent = 20
main = 40
preview = 40

[theme]
directory = "green"
selection_fg = "white"
selection_bg = "darkgray"
path = "blue"
status = "yellow"
matched = "yellow"
error = "red"
# separator = "#444444"
"##;
