use super::{ResponseCache, RetryPolicy};
use crate::ports::outbound::{HttpTransport, RequestHeaders};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use serde_json::Value;
use tracing::{debug, warn};

/// Body returned when every attempt failed; parses as an empty JSON object
pub const FAILURE_SENTINEL: &str = "{}";

/// Fetcher - GET with per-run memoization and bounded retry
///
/// The cache is passed in by the caller on every call, so one cache can be
/// shared across resolvers and a pre-seeded cache can stand in for the
/// network in tests.
pub struct Fetcher<T: HttpTransport> {
    transport: T,
    retry_policy: RetryPolicy,
}

impl<T: HttpTransport> Fetcher<T> {
    pub fn new(transport: T, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            retry_policy,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the body for `url`, from `cache` when present.
    ///
    /// Never fails: exhausting the retry budget yields [`FAILURE_SENTINEL`].
    /// Either outcome is stored in `cache` before returning.
    pub fn fetch(
        &self,
        url: &str,
        cache: &mut ResponseCache,
        headers: Option<&RequestHeaders>,
    ) -> String {
        if let Some(cached) = cache.get(url) {
            debug!(url, "Serving response from cache");
            return cached.to_string();
        }

        let body = self.fetch_with_retry(url, headers);
        cache.insert(url, body.clone());
        body
    }

    /// Fetches `url` and parses the body as JSON
    pub fn fetch_json(
        &self,
        url: &str,
        cache: &mut ResponseCache,
        headers: Option<&RequestHeaders>,
    ) -> Result<Value> {
        let body = self.fetch(url, cache, headers);
        serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Response from {} is not valid JSON: {}", url, e))
    }

    fn fetch_with_retry(&self, url: &str, headers: Option<&RequestHeaders>) -> String {
        let max_attempts = self.retry_policy.max_attempts();

        for attempt in 1..=max_attempts {
            match self.transport.get(url, headers) {
                Ok(body) => return body,
                Err(e) => {
                    warn!(url, attempt, max_attempts, error = %e, "Request failed");
                    if attempt < max_attempts {
                        let delay = self.retry_policy.delay_after(attempt);
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                    }
                }
            }
        }

        debug!(url, max_attempts, "All attempts failed, using the failure sentinel");
        FAILURE_SENTINEL.to_string()
    }
}

/// Reads a string field at a JSON pointer, failing with the URL it came from
pub fn require_str(value: &Value, pointer: &str, url: &str) -> Result<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            LicenseReportError::MalformedResponse {
                url: url.to_string(),
                field: pointer.trim_start_matches('/').replace('/', "."),
            }
            .into()
        })
}
