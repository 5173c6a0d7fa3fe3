use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let calling build scripts distinguish usage mistakes
/// from failures that happened while resolving licenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every fragment was emitted
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (listing, network lookup, file I/O error, etc.)
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

/// Application-specific errors for license report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum LicenseReportError {
    #[error("Dependency listing not found: {path}\n\n💡 Hint: {suggestion}")]
    ListingNotFound { path: PathBuf, suggestion: String },

    #[error("Listing command `{command}` failed in {path}\nDetails: {details}\n\n💡 Hint: Make sure the tool is installed and on PATH, or pass a file with its captured output instead")]
    ListingCommandFailed {
        command: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to parse dependency listing: {path}\nDetails: {details}")]
    ListingParseError { path: PathBuf, details: String },

    #[error("Unexpected response from {url}: missing field '{field}'\n\n💡 Hint: The request may have been rate limited. Set GH_API_USER and GH_API_TOKEN to authenticate")]
    MalformedResponse { url: String, field: String },

    #[error("License '{identifier}' of package '{package}' is ambiguous\n\n💡 Hint: Add an entry for '{package}' to bsd_overrides in the config file")]
    AmbiguousLicense { package: String, identifier: String },

    #[error("Failed to read license file: {path}\nDetails: {details}")]
    LicenseFileReadError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
