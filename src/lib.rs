//! thirdparty-licenses - third-party license report generator
//!
//! This library resolves the dependencies of a Go backend and an npm frontend
//! to their license texts and renders them as HTML fragments for a static
//! third-party notice page, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Dependency models, license strategies
//!   and pure services (URL normalization, escaping, label formatting)
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP fetch cache, GitHub/npms clients,
//!   filesystem, console and formatter implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use thirdparty_licenses::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let fetcher = Fetcher::new(ReqwestTransport::new()?, RetryPolicy::default());
//! let use_case = GenerateModuleReportUseCase::new(
//!     FileSystemReader::new(),
//!     fetcher,
//!     GitHubClient::default(),
//!     GopkgResolver::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let mut cache = ResponseCache::new();
//! let response = use_case.execute(&ReportRequest::new("core"), &mut cache)?;
//!
//! let output = HtmlFragmentFormatter::new().format(&response.entries)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::HtmlFragmentFormatter;
    pub use crate::adapters::outbound::network::{
        Backoff, Fetcher, GitHubClient, GopkgResolver, LicenseTextResolver, NpmsClient,
        ReqwestTransport, ResponseCache, RetryPolicy, FAILURE_SENTINEL,
    };
    pub use crate::application::dto::{ReportRequest, ReportResponse, SubstitutionRequest};
    pub use crate::application::use_cases::{
        GenerateModuleReportUseCase, GeneratePackageReportUseCase, SubstitutePlaceholderUseCase,
    };
    pub use crate::license_report::domain::{
        BsdOverrides, LicenseField, LicenseStrategy, ModuleDependency, PackageEntry, ReportEntry,
    };
    pub use crate::license_report::services::url_normalizer::{account, normalize};
    pub use crate::license_report::services::{escape, license_label, OwnPackageFilter};
    pub use crate::ports::outbound::{
        HttpTransport, ListingReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
