use super::listing_parse_error;
use crate::adapters::outbound::network::{Fetcher, GitHubClient, GopkgResolver, ResponseCache};
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::license_report::domain::{ModuleDependency, ModuleHost, ReportEntry};
use crate::license_report::services::url_normalizer::{normalize_url, repository_root};
use crate::license_report::services::ListingParser;
use crate::ports::outbound::{HttpTransport, ListingCommand, ListingReader, ProgressReporter};
use crate::shared::Result;
use tracing::{info, warn};

/// GenerateModuleReportUseCase - license report for Go module dependencies
///
/// Each module is traced to its GitHub repository (directly, or through the
/// gopkg.in landing page) and reported with the license GitHub detected for
/// that repository.
///
/// # Type Parameters
/// * `LR` - ListingReader implementation
/// * `T` - HttpTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateModuleReportUseCase<LR, T: HttpTransport, PR> {
    listing_reader: LR,
    fetcher: Fetcher<T>,
    github: GitHubClient,
    gopkg: GopkgResolver,
    progress_reporter: PR,
}

impl<LR, T, PR> GenerateModuleReportUseCase<LR, T, PR>
where
    LR: ListingReader,
    T: HttpTransport,
    PR: ProgressReporter,
{
    pub fn new(
        listing_reader: LR,
        fetcher: Fetcher<T>,
        github: GitHubClient,
        gopkg: GopkgResolver,
        progress_reporter: PR,
    ) -> Self {
        Self {
            listing_reader,
            fetcher,
            github,
            gopkg,
            progress_reporter,
        }
    }

    /// Executes the module report use case
    ///
    /// # Arguments
    /// * `request` - Location of the module listing
    /// * `cache` - Response cache for this run, shared with other flows
    pub fn execute(
        &self,
        request: &ReportRequest,
        cache: &mut ResponseCache,
    ) -> Result<ReportResponse> {
        let modules = self.read_modules(request)?;

        let total = modules.len();
        let mut entries = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        for (index, module) in modules.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(module.path()));

            match self.repository_url(module, cache)? {
                Some(repository) => entries.push(self.resolve_entry(module, &repository, cache)?),
                None => {
                    let reason = format!(
                        "{}: unsupported module host, no license resolved",
                        module.heading()
                    );
                    warn!(module = module.path(), "Skipping module on unsupported host");
                    self.progress_reporter.report_error(&format!("⚠️  {}", reason));
                    skipped.push(reason);
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved licenses for {} module(s)",
            entries.len()
        ));

        Ok(ReportResponse::new(entries, skipped))
    }

    fn read_modules(&self, request: &ReportRequest) -> Result<Vec<ModuleDependency>> {
        self.progress_reporter.report(&format!(
            "📖 Reading Go module listing from: {}",
            request.listing_path.display()
        ));

        let listing = self
            .listing_reader
            .read_listing(&request.listing_path, &ListingCommand::go_modules())?;
        let modules = ListingParser::parse_modules(&listing)
            .map_err(|e| listing_parse_error(request, e))?;

        self.progress_reporter
            .report(&format!("✅ Detected {} module(s)", modules.len()));
        Ok(modules)
    }

    /// Repository URL of a module, or `None` when its host is not supported
    fn repository_url(
        &self,
        module: &ModuleDependency,
        cache: &mut ResponseCache,
    ) -> Result<Option<String>> {
        let repository = match module.host() {
            ModuleHost::GitHub => repository_root(&normalize_url(&module.https_url())),
            ModuleHost::Gopkg => {
                let source = self.gopkg.source_repository(&self.fetcher, cache, module)?;
                repository_root(&normalize_url(&source))
            }
            ModuleHost::Unsupported => return Ok(None),
        };
        Ok(Some(repository))
    }

    fn resolve_entry(
        &self,
        module: &ModuleDependency,
        repository: &str,
        cache: &mut ResponseCache,
    ) -> Result<ReportEntry> {
        info!(module = module.path(), repository, "Resolving module license");

        let license = self
            .github
            .repository_license(&self.fetcher, cache, repository)?;
        let text = self.fetcher.fetch(&license.download_url, cache, None);

        Ok(ReportEntry::new(module.heading(), license.name, text))
    }
}
