use crate::license_report::domain::LicenseField;

/// Readable license label for a report heading.
///
/// Lists are joined with `", "`, parentheses are dropped and the SPDX
/// connectives are lowercased: `(MIT OR Apache-2.0)` becomes `MIT or Apache-2.0`.
pub fn license_label(licenses: &LicenseField) -> String {
    let joined = match licenses {
        LicenseField::Single(identifier) => identifier.clone(),
        LicenseField::Multiple(identifiers) => identifiers.join(", "),
    };
    joined
        .replace(['(', ')'], "")
        .replace(" OR ", " or ")
        .replace(" AND ", " and ")
}
