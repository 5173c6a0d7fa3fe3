use crate::ports::outbound::{HttpTransport, RequestHeaders};
use crate::shared::Result;
use reqwest::StatusCode;

/// ReqwestTransport adapter performing blocking HTTP GET requests
///
/// This adapter implements the HttpTransport port. Requests are issued one
/// at a time; retries and caching live in [`super::Fetcher`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the tool's default user agent.
    ///
    /// GitHub rejects API requests without a user agent; per-request
    /// `User-Agent` headers replace this default.
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("thirdparty-licenses/{}", version);
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, headers: Option<&RequestHeaders>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send()?;
        if response.status() != StatusCode::OK {
            anyhow::bail!("{} returned status code {}", url, response.status());
        }

        let body = response.bytes()?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
