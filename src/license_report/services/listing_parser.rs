use crate::license_report::domain::{ModuleDependency, PackageEntry, PackageRecord};
use crate::shared::Result;

/// ListingParser - turns captured tool output into dependency references
pub struct ListingParser;

impl ListingParser {
    /// Parses `go list -m all` output.
    ///
    /// The first line names the main module and is dropped, as are blank
    /// lines. Replacement directives (`=> ...`) after the version are ignored.
    pub fn parse_modules(listing: &str) -> Result<Vec<ModuleDependency>> {
        listing
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(path), Some(version)) => Ok(ModuleDependency::new(path, version)),
                    _ => anyhow::bail!("Expected '<module> <version>' but found '{}'", line),
                }
            })
            .collect()
    }

    /// Parses `license-checker --json` output, keeping document order.
    pub fn parse_packages(listing: &str) -> Result<Vec<PackageEntry>> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(listing)
            .map_err(|e| anyhow::anyhow!("Invalid package listing JSON: {}", e))?;

        document
            .into_iter()
            .map(|(key, value)| {
                let record: PackageRecord = serde_json::from_value(value)
                    .map_err(|e| anyhow::anyhow!("Invalid record for '{}': {}", key, e))?;
                Ok(PackageEntry::new(key, record))
            })
            .collect()
    }
}
