use super::{Fetcher, ResponseCache};
use crate::license_report::services::url_normalizer;
use crate::ports::outbound::{HttpTransport, RequestHeaders};
use crate::shared::Result;
use serde_json::Value;

/// Package endpoint of the npms.io registry metadata API
pub const NPMS_PACKAGE_URL: &str = "https://api.npms.io/v2/package";

/// NpmsClient - looks up where an npm package's source lives
///
/// npms.io rejects some default client user agents, so requests carry the
/// configured `User-Agent` header.
#[derive(Debug, Clone)]
pub struct NpmsClient {
    headers: RequestHeaders,
}

impl NpmsClient {
    pub fn new(user_agent: &str) -> Self {
        Self {
            headers: RequestHeaders::from([("User-Agent".to_string(), user_agent.to_string())]),
        }
    }

    /// Normalized repository URL of a package, if the registry reports one
    pub fn repository_url<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        package_name: &str,
    ) -> Result<Option<String>> {
        let url = Self::package_url(package_name);
        let package = fetcher.fetch_json(&url, cache, Some(&self.headers))?;
        let repository = package
            .pointer("/collected/metadata/repository/url")
            .and_then(Value::as_str);
        Ok(url_normalizer::normalize(repository))
    }

    /// Scoped names keep their `@` and `/` only in encoded form
    fn package_url(package_name: &str) -> String {
        format!("{}/{}", NPMS_PACKAGE_URL, urlencoding::encode(package_name))
    }
}
