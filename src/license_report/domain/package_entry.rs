use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The `licenses` field of a package record: one identifier or several
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    Single(String),
    Multiple(Vec<String>),
}

impl LicenseField {
    /// Identifiers in declaration order
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            LicenseField::Single(identifier) => vec![identifier.as_str()],
            LicenseField::Multiple(identifiers) => {
                identifiers.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Package record as produced by the license scanner (`license-checker --json`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub licenses: LicenseField,
    #[serde(default, rename = "licenseFile")]
    pub license_file: Option<PathBuf>,
}

/// A keyed package record; the key is `name@version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    key: String,
    record: PackageRecord,
}

impl PackageEntry {
    pub fn new(key: impl Into<String>, record: PackageRecord) -> Self {
        Self {
            key: key.into(),
            record,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn licenses(&self) -> &LicenseField {
        &self.record.licenses
    }

    /// Package name: the record's `name`, else the key without its version
    pub fn name(&self) -> String {
        self.record
            .name
            .clone()
            .unwrap_or_else(|| versionless(&self.key).to_string())
    }

    /// Local license file shipped with the package, unless it is really a README
    pub fn local_license_file(&self) -> Option<&Path> {
        self.record
            .license_file
            .as_deref()
            .filter(|path| !path.to_string_lossy().to_lowercase().contains("readme.m"))
    }
}

/// Strips the `@version` suffix from a package key, keeping a leading `@scope`
pub fn versionless(key: &str) -> &str {
    let Some((start, _)) = key.char_indices().nth(1) else {
        return key;
    };
    match key[start..].find('@') {
        Some(index) => &key[..start + index],
        None => key,
    }
}
