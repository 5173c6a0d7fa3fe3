use std::collections::HashMap;

/// In-memory map from request URL to response body for one run
///
/// Failed fetches are stored too (as the failure sentinel), so a URL is
/// requested over the network at most once per run. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: HashMap<String, String>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-seeded with responses
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(url, body)| (url.into(), body.into()))
                .collect(),
        }
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.entries.insert(url.into(), body.into());
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
