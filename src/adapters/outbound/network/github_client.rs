use super::fetcher::require_str;
use super::{Fetcher, ResponseCache};
use crate::ports::outbound::{HttpTransport, RequestHeaders};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use serde_json::Value;

/// Base URL of the GitHub REST API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// License metadata of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLicense {
    /// Display name, e.g. `MIT License`
    pub name: String,
    /// Raw license file URL
    pub download_url: String,
}

/// GitHubClient - user profiles, license templates and repository licenses
///
/// All requests carry the optional Basic authorization headers; responses
/// are memoized in the caller's cache.
#[derive(Debug, Clone, Default)]
pub struct GitHubClient {
    auth_headers: Option<RequestHeaders>,
}

impl GitHubClient {
    pub fn new(auth_headers: Option<RequestHeaders>) -> Self {
        Self { auth_headers }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_headers.is_some()
    }

    /// Display name of an account.
    ///
    /// Falls back to the account id when the profile has no name (including
    /// when the lookup failed), and yields `None` when there is no account.
    pub fn owner<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        account: Option<&str>,
    ) -> Result<Option<String>> {
        let Some(account) = account else {
            return Ok(None);
        };

        let url = format!("{}/users/{}", GITHUB_API_URL, urlencoding::encode(account));
        let profile = fetcher.fetch_json(&url, cache, self.auth_headers.as_ref())?;
        let name = profile
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(account);

        Ok(Some(name.to_string()))
    }

    /// License template body for an SPDX identifier
    pub fn license_template<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        identifier: &str,
    ) -> Result<String> {
        let url = format!(
            "{}/licenses/{}",
            GITHUB_API_URL,
            urlencoding::encode(identifier)
        );
        let description = fetcher.fetch_json(&url, cache, self.auth_headers.as_ref())?;
        require_str(&description, "/body", &url)
    }

    /// License detected by GitHub for a `https://github.com/<account>/<repo>` URL
    pub fn repository_license<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        repository_url: &str,
    ) -> Result<RepositoryLicense> {
        let url = Self::repository_license_url(repository_url)?;
        let license = fetcher.fetch_json(&url, cache, self.auth_headers.as_ref())?;

        Ok(RepositoryLicense {
            name: require_str(&license, "/license/name", &url)?,
            download_url: require_str(&license, "/download_url", &url)?,
        })
    }

    fn repository_license_url(repository_url: &str) -> Result<String> {
        let repository = repository_url
            .strip_prefix("https://github.com/")
            .filter(|path| !path.is_empty())
            .ok_or_else(|| LicenseReportError::Validation {
                message: format!("{} is not a GitHub repository URL", repository_url),
            })?;
        Ok(format!("{}/repos/{}/license", GITHUB_API_URL, repository))
    }
}
