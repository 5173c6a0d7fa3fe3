use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// How the text of one license identifier is obtained
///
/// Identifiers with no special handling fall through to `PlatformTemplate`,
/// which looks the identifier up in the hosting platform's license catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseStrategy {
    /// No text to show
    PublicDomain,
    /// Academic Free License v2.1, served from a fixed archive URL
    AcademicFree,
    /// CC0 1.0 legal code
    CreativeCommonsZero,
    /// CC BY 3.0 legal code, prefixed with an attribution notice
    CreativeCommonsAttribution,
    /// Plain `BSD`; the clause count depends on the package
    AmbiguousBsd,
    /// Any other SPDX identifier
    PlatformTemplate(String),
}

impl LicenseStrategy {
    /// Classifies an identifier after removing the `*` "unconfirmed" marker
    pub fn classify(identifier: &str) -> Self {
        let identifier = strip_unconfirmed_marker(identifier);
        match identifier.as_str() {
            "Public Domain" => LicenseStrategy::PublicDomain,
            "AFLv2.1" => LicenseStrategy::AcademicFree,
            "CC0-1.0" => LicenseStrategy::CreativeCommonsZero,
            "CC-BY-3.0" => LicenseStrategy::CreativeCommonsAttribution,
            "BSD" => LicenseStrategy::AmbiguousBsd,
            _ => LicenseStrategy::PlatformTemplate(identifier),
        }
    }
}

/// Removes the trailing `*` the scanner adds to guessed licenses
pub fn strip_unconfirmed_marker(identifier: &str) -> String {
    identifier.replace('*', "")
}

/// Package name -> specific SPDX id for packages declaring plain `BSD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BsdOverrides(BTreeMap<String, String>);

impl BsdOverrides {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self(overrides)
    }

    /// Adds or replaces entries
    pub fn extend(&mut self, overrides: impl IntoIterator<Item = (String, String)>) {
        self.0.extend(overrides);
    }

    /// Fails for packages without an entry so new ambiguous cases get a human decision
    pub fn resolve(&self, package_name: &str) -> Result<&str> {
        self.0
            .get(package_name)
            .map(String::as_str)
            .ok_or_else(|| {
                LicenseReportError::AmbiguousLicense {
                    package: package_name.to_string(),
                    identifier: "BSD".to_string(),
                }
                .into()
            })
    }
}

impl Default for BsdOverrides {
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert("glob-to-regexp".to_string(), "BSD-2-Clause".to_string());
        overrides.insert("json-schema".to_string(), "BSD-3-Clause".to_string());
        Self(overrides)
    }
}
