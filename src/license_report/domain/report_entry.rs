/// Repository identity resolved for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Normalized repository URL, if the registry knows one
    pub url: Option<String>,
    /// Account segment of `url`
    pub account: Option<String>,
    /// Copyright holder used in license templates
    pub owner: String,
}

/// A fully resolved dependency, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Package key, or module path and version
    pub heading: String,
    /// Human readable license name(s)
    pub license_label: String,
    /// Raw (unescaped) license body
    pub license_text: String,
}

impl ReportEntry {
    pub fn new(
        heading: impl Into<String>,
        license_label: impl Into<String>,
        license_text: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            license_label: license_label.into(),
            license_text: license_text.into(),
        }
    }
}
