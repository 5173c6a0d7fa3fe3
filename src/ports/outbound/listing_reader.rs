use crate::shared::Result;
use std::fmt;
use std::path::Path;

/// External tool that lists a project's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ListingCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `go list -m all` for the backend module
    pub fn go_modules() -> Self {
        Self::new("go", &["list", "-m", "all"])
    }

    /// `license-checker --json` for the frontend packages
    pub fn license_checker() -> Self {
        Self::new("license-checker", &["--json"])
    }
}

impl fmt::Display for ListingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// ListingReader port for obtaining dependency listings and local license files
///
/// This port abstracts process execution and file system reads so the
/// report use cases can run against canned listings.
pub trait ListingReader {
    /// Returns the listing for `path`
    ///
    /// # Arguments
    /// * `path` - A project directory (the command runs there) or a file
    ///   holding previously captured command output
    /// * `command` - The listing tool to run for directories
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not exist
    /// - The command cannot be started or exits unsuccessfully
    /// - The file cannot be read
    fn read_listing(&self, path: &Path, command: &ListingCommand) -> Result<String>;

    /// Reads a license file shipped inside a package, verbatim
    fn read_license_file(&self, path: &Path) -> Result<String>;
}
