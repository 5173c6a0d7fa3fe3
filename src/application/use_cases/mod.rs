/// Use cases module containing application business logic orchestration
mod generate_module_report;
mod generate_package_report;
mod substitute_placeholder;

pub use generate_module_report::GenerateModuleReportUseCase;
pub use generate_package_report::GeneratePackageReportUseCase;
pub use substitute_placeholder::SubstitutePlaceholderUseCase;

use crate::application::dto::ReportRequest;
use crate::shared::error::LicenseReportError;

/// Attaches the listing location to a parser failure
fn listing_parse_error(request: &ReportRequest, error: anyhow::Error) -> anyhow::Error {
    LicenseReportError::ListingParseError {
        path: request.listing_path.clone(),
        details: error.to_string(),
    }
    .into()
}
