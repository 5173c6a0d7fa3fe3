/// Network adapters: HTTP transport, fetch cache and hosting-platform clients
pub mod credentials;
mod fetcher;
mod github_client;
mod gopkg_resolver;
mod license_text_resolver;
mod npms_client;
mod reqwest_transport;
mod response_cache;
mod retry_policy;

pub use credentials::{authorization_credentials, authorization_headers};
pub use fetcher::{require_str, Fetcher, FAILURE_SENTINEL};
pub use github_client::{GitHubClient, RepositoryLicense, GITHUB_API_URL};
pub use gopkg_resolver::GopkgResolver;
pub use license_text_resolver::{LicenseTextResolver, AFL_URL, CC_BY_URL, CC_ZERO_URL};
pub use npms_client::{NpmsClient, NPMS_PACKAGE_URL};
pub use reqwest_transport::ReqwestTransport;
pub use response_cache::ResponseCache;
pub use retry_policy::{Backoff, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
