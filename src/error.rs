use thiserror::Error;

/// Errors that stop pathsurfer before or around the terminal session.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from the terminal or the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The start path does not exist or cannot be resolved.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The start path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}
