//! File logger setup.
//!
//! The terminal belongs to the UI, so all diagnostics go to a log file through the `log`
//! facade, backed by a [simplelog::WriteLogger].

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Level for the given debug switch.
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Opens `path` for appending, creating the parent directory when missing.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global logger writing to `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init(path: &Path, debug: bool) -> io::Result<()> {
    let file = open_log_file(path)?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    WriteLogger::init(level_for(debug), config, file).map_err(io::Error::other)?;
    log::info!(
        "pathsurfer {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(())
}
