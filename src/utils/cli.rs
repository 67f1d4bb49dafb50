//! Command-line argument parsing for pathsurfer.
//!
//! When invoked without arguments (`psurf`), pathsurfer opens the current directory.
//! On quit the final directory is printed on stdout, so the shell can `cd` into it:
//!
//! ```sh
//! cd "$(psurf)"
//! ```

use clap::Parser;

use std::path::PathBuf;

/// Terminal directory navigator with fuzzy search.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "psurf", version, about)]
pub struct Args {
    /// Start directory (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Enable debug logs
    #[arg(long)]
    pub debug: bool,

    /// Start with hidden entries shown
    #[arg(long)]
    pub show_hidden_files: bool,

    /// Log file location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Config file location (overrides $PSURF_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn no_arguments() -> Result<(), clap::Error> {
        let args = Args::try_parse_from(["psurf"])?;
        assert_eq!(args, Args::default());
        Ok(())
    }

    #[test]
    fn path_and_flags() -> Result<(), clap::Error> {
        let args = Args::try_parse_from([
            "psurf",
            "--show-hidden-files",
            "--config",
            "/etc/psurf.toml",
            "/tmp",
        ])?;
        assert_eq!(args.path, Some(PathBuf::from("/tmp")));
        assert!(args.show_hidden_files);
        assert!(!args.debug);
        assert_eq!(args.config, Some(PathBuf::from("/etc/psurf.toml")));
        Ok(())
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["psurf", "--frobnicate"]).is_err());
        assert!(Args::try_parse_from(["psurf", "/a", "/b"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }
}
