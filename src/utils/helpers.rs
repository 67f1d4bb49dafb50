//! Helpers for pathsurfer.
//!
//! - Color parsing from names or hex codes
//! - Displaying home directories as "~" in paths
//! - Resolving and validating the start directory
//! - Default locations of per-user files

use crate::error::AppError;

use ratatui::style::Color;

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => s.strip_prefix('#').and_then(parse_hex).unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Shortens the home directory prefix of `path` to `~`.
/// Used by the header line.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    match dirs::home_dir() {
        Some(home) => shorten_path_under(path.as_ref(), &home),
        None => path.as_ref().display().to_string(),
    }
}

fn shorten_path_under(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(stripped) if stripped.as_os_str().is_empty() => "~".to_string(),
        Ok(stripped) => format!("~{}{}", MAIN_SEPARATOR, stripped.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Resolves the start directory: `arg` if given, else the working directory.
///
/// The result is canonical and guaranteed to be a directory.
pub fn resolve_start_dir(arg: Option<&Path>) -> Result<PathBuf, AppError> {
    let raw = match arg {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let path = raw
        .canonicalize()
        .map_err(|e| AppError::InvalidPath(format!("{}: {e}", raw.display())))?;
    if !path.is_dir() {
        return Err(AppError::NotADirectory(path.display().to_string()));
    }
    Ok(path)
}

/// `<data_dir>/pathsurfer/pathsurfer.log`, or `pathsurfer.log` if there is no data directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("pathsurfer").join("pathsurfer.log"))
        .unwrap_or_else(|| PathBuf::from("pathsurfer.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn color_names_and_hex() {
        assert_eq!(parse_color("Green"), Color::Green);
        assert_eq!(parse_color("darkgray"), Color::DarkGray);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("chartreuse"), Color::Reset);
    }

    #[test]
    fn home_prefix_is_shortened() {
        let home = Path::new("/home/alice");
        assert_eq!(shorten_path_under(home, home), "~");
        assert_eq!(
            shorten_path_under(Path::new("/home/alice/src/psurf"), home),
            format!("~{MAIN_SEPARATOR}src/psurf")
        );
        assert_eq!(shorten_path_under(Path::new("/home/alicia"), home), "/home/alicia");
        assert_eq!(shorten_path_under(Path::new("/etc"), home), "/etc");
    }

    #[test]
    fn start_dir_is_canonical() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let nested = dir.path().join("a");
        fs::create_dir(&nested)?;

        let dotted = nested.join("..").join("a");
        assert_eq!(resolve_start_dir(Some(&dotted))?, nested.canonicalize()?);
        Ok(())
    }

    #[test]
    fn start_dir_must_exist_and_be_a_directory() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("notes.txt");
        File::create(&file)?;

        assert!(matches!(
            resolve_start_dir(Some(&dir.path().join("missing"))),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            resolve_start_dir(Some(&file)),
            Err(AppError::NotADirectory(_))
        ));
        Ok(())
    }

    #[test]
    fn default_log_path_names_the_file() {
        assert!(default_log_path().ends_with("pathsurfer.log"));
    }
}
