use crate::ports::outbound::{ListingCommand, ListingReader};
use crate::shared::error::LicenseReportError;
use crate::shared::security::read_checked_text;
use crate::shared::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// FileSystemReader adapter for dependency listings and license files
///
/// A directory argument runs the listing tool inside it; a file argument is
/// taken as the tool's previously captured output.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn run_listing_command(&self, directory: &Path, command: &ListingCommand) -> Result<String> {
        debug!(command = %command, directory = %directory.display(), "Running listing command");

        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(directory)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| LicenseReportError::ListingCommandFailed {
                command: command.to_string(),
                path: directory.to_path_buf(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(LicenseReportError::ListingCommandFailed {
                command: command.to_string(),
                path: directory.to_path_buf(),
                details: output.status.to_string(),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            LicenseReportError::ListingParseError {
                path: directory.to_path_buf(),
                details: format!("`{}` printed invalid UTF-8: {}", command, e),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingReader for FileSystemReader {
    fn read_listing(&self, path: &Path, command: &ListingCommand) -> Result<String> {
        if !path.exists() {
            return Err(LicenseReportError::ListingNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Pass a project directory (where `{}` is run) or a file holding its output",
                    command
                ),
            }
            .into());
        }

        if path.is_dir() {
            return self.run_listing_command(path, command);
        }

        read_checked_text(path, "dependency listing").map_err(|e| {
            LicenseReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_license_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            LicenseReportError::LicenseFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
