use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A report that cannot be loaded is not a failure: the demo dataset is
/// rendered instead and the process still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Dashboard rendered (from real reports or from demo data)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the viewer's outer surfaces.
///
/// These are the only errors that reach the user as failures. Report loading
/// problems are expressed as [`LoadFailure`] and recovered locally.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid config: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Failure to load one of the two report documents.
///
/// Every variant carries the location that failed. The loader never retries;
/// the caller discards both documents and falls back to demo data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("Failed to fetch {location}: server returned status {status}")]
    Status { location: String, status: u16 },

    #[error("Failed to fetch {location}: {details}")]
    Transport { location: String, details: String },

    #[error("Failed to read {location}: {details}")]
    File { location: String, details: String },

    #[error("Failed to parse {location} as JSON: {details}")]
    Parse { location: String, details: String },
}

impl LoadFailure {
    /// The report location (path or URL) that failed to load
    pub fn location(&self) -> &str {
        match self {
            LoadFailure::Status { location, .. }
            | LoadFailure::Transport { location, .. }
            | LoadFailure::File { location, .. }
            | LoadFailure::Parse { location, .. } => location,
        }
    }
}
