use super::listing_parse_error;
use crate::adapters::outbound::network::{
    Fetcher, GitHubClient, LicenseTextResolver, NpmsClient, ResponseCache,
};
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::license_report::domain::{PackageEntry, ReportEntry, RepositoryIdentity};
use crate::license_report::services::url_normalizer::account;
use crate::license_report::services::{license_label, ListingParser, OwnPackageFilter};
use crate::ports::outbound::{HttpTransport, ListingCommand, ListingReader, ProgressReporter};
use crate::shared::Result;
use tracing::{debug, info};

/// GeneratePackageReportUseCase - license report for npm package dependencies
///
/// Packages that ship a license file are reported with that file verbatim.
/// All others get a license template filled with the owner of the package's
/// repository account.
///
/// # Type Parameters
/// * `LR` - ListingReader implementation
/// * `T` - HttpTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct GeneratePackageReportUseCase<LR, T: HttpTransport, PR> {
    listing_reader: LR,
    fetcher: Fetcher<T>,
    npms: NpmsClient,
    github: GitHubClient,
    license_text: LicenseTextResolver,
    own_packages: OwnPackageFilter,
    progress_reporter: PR,
}

impl<LR, T, PR> GeneratePackageReportUseCase<LR, T, PR>
where
    LR: ListingReader,
    T: HttpTransport,
    PR: ProgressReporter,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        listing_reader: LR,
        fetcher: Fetcher<T>,
        npms: NpmsClient,
        github: GitHubClient,
        license_text: LicenseTextResolver,
        own_packages: OwnPackageFilter,
        progress_reporter: PR,
    ) -> Self {
        Self {
            listing_reader,
            fetcher,
            npms,
            github,
            license_text,
            own_packages,
            progress_reporter,
        }
    }

    /// Executes the package report use case
    ///
    /// # Arguments
    /// * `request` - Location of the package metadata listing
    /// * `cache` - Response cache for this run, shared with other flows
    pub fn execute(
        &self,
        request: &ReportRequest,
        cache: &mut ResponseCache,
    ) -> Result<ReportResponse> {
        let packages = self.read_packages(request)?;

        let total = packages.len();
        let mut entries = Vec::with_capacity(total);
        for (index, package) in packages.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(package.key()));
            entries.push(self.resolve_entry(package, cache)?);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved licenses for {} package(s)",
            entries.len()
        ));

        Ok(ReportResponse::new(entries, Vec::new()))
    }

    fn read_packages(&self, request: &ReportRequest) -> Result<Vec<PackageEntry>> {
        self.progress_reporter.report(&format!(
            "📖 Reading package license listing from: {}",
            request.listing_path.display()
        ));

        let listing = self
            .listing_reader
            .read_listing(&request.listing_path, &ListingCommand::license_checker())?;
        let packages = ListingParser::parse_packages(&listing)
            .map_err(|e| listing_parse_error(request, e))?;
        let (packages, removed) = self.own_packages.filter(packages);

        if removed > 0 {
            self.progress_reporter
                .report(&format!("🚫 Excluded {} own package(s)", removed));
        }
        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", packages.len()));
        Ok(packages)
    }

    fn resolve_entry(&self, package: &PackageEntry, cache: &mut ResponseCache) -> Result<ReportEntry> {
        let label = license_label(package.licenses());

        let text = match package.local_license_file() {
            Some(path) => {
                debug!(package = package.key(), path = %path.display(), "Using bundled license file");
                self.listing_reader.read_license_file(path)?
            }
            None => {
                let name = package.name();
                let identity = self.resolve_identity(&name, cache)?;
                info!(package = package.key(), owner = %identity.owner, "Resolving license template");
                self.license_text.resolve(
                    &self.fetcher,
                    cache,
                    &name,
                    &identity.owner,
                    package.licenses(),
                )?
            }
        };

        Ok(ReportEntry::new(package.key(), label, text))
    }

    /// Repository, account and owner of a package.
    ///
    /// The owner falls back from the profile name to the account id, then to
    /// `author(s) of <name>` when no repository is known.
    fn resolve_identity(&self, name: &str, cache: &mut ResponseCache) -> Result<RepositoryIdentity> {
        let url = self.npms.repository_url(&self.fetcher, cache, name)?;
        let account = account(url.as_deref());
        let owner = self
            .github
            .owner(&self.fetcher, cache, account.as_deref())?
            .unwrap_or_else(|| format!("author(s) of {}", name));

        Ok(RepositoryIdentity {
            url,
            account,
            owner,
        })
    }
}
