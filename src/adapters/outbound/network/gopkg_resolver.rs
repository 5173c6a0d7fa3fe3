use super::{Fetcher, ResponseCache};
use crate::license_report::domain::ModuleDependency;
use crate::ports::outbound::HttpTransport;
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use regex::Regex;

/// GopkgResolver - finds the source repository behind a gopkg.in module
///
/// gopkg.in landing pages link the backing repository from a "Source Code"
/// button; the link points at a tree view which is cut back to the repository.
pub struct GopkgResolver {
    href: Regex,
}

impl GopkgResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            href: Regex::new(r#"href=["'](.*?)["']"#)?,
        })
    }

    pub fn source_repository<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        module: &ModuleDependency,
    ) -> Result<String> {
        let url = module.https_url();
        let page = fetcher.fetch(&url, cache, None);
        self.extract_source_link(&page).ok_or_else(|| {
            LicenseReportError::MalformedResponse {
                url,
                field: "Source Code link".to_string(),
            }
            .into()
        })
    }

    fn extract_source_link(&self, page: &str) -> Option<String> {
        let line = page.lines().find(|line| line.contains("Source Code"))?;
        let href = self.href.captures(line)?.get(1)?.as_str();
        let repository = match href.find("/tree") {
            Some(index) => &href[..index],
            None => href,
        };
        Some(repository.to_string())
    }
}
