use crate::shared::Result;
use std::collections::BTreeMap;

/// Extra request headers (authorization, user agent overrides)
pub type RequestHeaders = BTreeMap<String, String>;

/// HttpTransport port for single HTTP GET attempts
///
/// This port abstracts the network so the fetch layer's caching and retry
/// behaviour can be exercised without real requests.
pub trait HttpTransport {
    /// Performs one GET request
    ///
    /// # Arguments
    /// * `url` - Absolute URL to request
    /// * `headers` - Optional headers added to the request
    ///
    /// # Returns
    /// The response body decoded as UTF-8 text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The connection or TLS handshake fails
    /// - The response status is anything other than 200
    fn get(&self, url: &str, headers: Option<&RequestHeaders>) -> Result<String>;
}
