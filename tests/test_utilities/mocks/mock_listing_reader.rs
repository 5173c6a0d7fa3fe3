use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thirdparty_licenses::ports::outbound::ListingCommand;
use thirdparty_licenses::prelude::*;

/// Mock ListingReader serving listings by command and license files by path
#[derive(Default)]
pub struct MockListingReader {
    pub listings: HashMap<String, String>,
    pub license_files: HashMap<PathBuf, String>,
}

#[allow(dead_code)]
impl MockListingReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output returned for `go list -m all`
    pub fn with_modules(mut self, listing: &str) -> Self {
        self.listings
            .insert(ListingCommand::go_modules().to_string(), listing.to_string());
        self
    }

    /// Output returned for `license-checker --json`
    pub fn with_packages(mut self, listing: &str) -> Self {
        self.listings.insert(
            ListingCommand::license_checker().to_string(),
            listing.to_string(),
        );
        self
    }

    pub fn with_license_file(mut self, path: &str, text: &str) -> Self {
        self.license_files
            .insert(PathBuf::from(path), text.to_string());
        self
    }
}

impl ListingReader for MockListingReader {
    fn read_listing(&self, _path: &Path, command: &ListingCommand) -> Result<String> {
        self.listings
            .get(&command.to_string())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock listing missing for `{}`", command))
    }

    fn read_license_file(&self, path: &Path) -> Result<String> {
        self.license_files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Failed to read license file: {}", path.display()))
    }
}
