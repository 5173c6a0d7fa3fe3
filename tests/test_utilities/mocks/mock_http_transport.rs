use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thirdparty_licenses::ports::outbound::RequestHeaders;
use thirdparty_licenses::prelude::*;

/// One recorded request: the URL and the headers it was sent with
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub headers: Option<RequestHeaders>,
}

impl RecordedCall {
    /// Value of header `name`, if the request carried it
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(String::as_str)
    }
}

/// Mock HttpTransport answering from a URL table and recording every call
///
/// Unknown URLs fail like a 404 response. Clones share the call log, so a
/// test can keep a handle after moving the transport into a fetcher.
#[derive(Default, Clone)]
pub struct MockHttpTransport {
    responses: HashMap<String, String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.recorded_calls()
            .into_iter()
            .map(|call| call.url)
            .collect()
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// First recorded request to `url`; panics if it was never requested
    pub fn call_to(&self, url: &str) -> RecordedCall {
        self.recorded_calls()
            .into_iter()
            .find(|call| call.url == url)
            .unwrap_or_else(|| panic!("{} was never requested", url))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.url == url)
            .count()
    }
}

impl HttpTransport for MockHttpTransport {
    fn get(&self, url: &str, headers: Option<&RequestHeaders>) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            headers: headers.cloned(),
        });
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} returned status code 404 Not Found", url))
    }
}
