use crate::license_report::domain::PackageEntry;

/// OwnPackageFilter - removes packages published by this project itself
///
/// The package scanner lists the scanned project alongside its dependencies;
/// entries whose key starts with the project's package name never belong in
/// a third-party report.
#[derive(Debug, Clone)]
pub struct OwnPackageFilter {
    prefix: String,
}

impl OwnPackageFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn is_own(&self, entry: &PackageEntry) -> bool {
        !self.prefix.is_empty() && entry.key().starts_with(&self.prefix)
    }

    /// Returns the third-party entries and the number of removed own entries
    pub fn filter(&self, entries: Vec<PackageEntry>) -> (Vec<PackageEntry>, usize) {
        let original_count = entries.len();
        let kept: Vec<PackageEntry> = entries.into_iter().filter(|e| !self.is_own(e)).collect();
        let removed = original_count - kept.len();
        (kept, removed)
    }
}
