use super::{Fetcher, GitHubClient, ResponseCache};
use crate::license_report::domain::{BsdOverrides, LicenseField, LicenseStrategy};
use crate::license_report::services::license_text::{
    fill_placeholders, join_texts, CC_ATTRIBUTION_PREFIX,
};
use crate::ports::outbound::{HttpTransport, RequestHeaders};
use crate::shared::Result;
use tracing::debug;

/// Academic Free License 2.1 (no longer hosted by its publisher)
pub const AFL_URL: &str = "https://web.archive.org/web/20061013013632if_/http://opensource.linux-mirror.org/licenses/afl-2.1.txt";

/// CC0 1.0 Universal legal code
pub const CC_ZERO_URL: &str = "https://creativecommons.org/publicdomain/zero/1.0/legalcode.txt";

/// CC BY 3.0 Unported legal code
pub const CC_BY_URL: &str = "https://creativecommons.org/licenses/by/3.0/legalcode.txt";

/// LicenseTextResolver - builds the license text of a package from its identifiers
pub struct LicenseTextResolver {
    github: GitHubClient,
    bsd_overrides: BsdOverrides,
    template_year: String,
    plain_headers: RequestHeaders,
}

impl LicenseTextResolver {
    /// # Arguments
    /// * `github` - Client used for license templates
    /// * `bsd_overrides` - Disambiguation table for plain `BSD`
    /// * `template_year` - Value substituted for `[year]`
    /// * `user_agent` - User agent for the Creative Commons site
    pub fn new(
        github: GitHubClient,
        bsd_overrides: BsdOverrides,
        template_year: impl Into<String>,
        user_agent: &str,
    ) -> Self {
        Self {
            github,
            bsd_overrides,
            template_year: template_year.into(),
            plain_headers: RequestHeaders::from([(
                "User-Agent".to_string(),
                user_agent.to_string(),
            )]),
        }
    }

    /// Resolves every identifier of `licenses`, fills in year and owner,
    /// and joins the texts with a separator line.
    ///
    /// # Errors
    /// Fails for a plain `BSD` package missing from the override table and for
    /// identifiers the hosting platform has no template for.
    pub fn resolve<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        package_name: &str,
        owner: &str,
        licenses: &LicenseField,
    ) -> Result<String> {
        let mut texts = Vec::new();
        for identifier in licenses.identifiers() {
            let strategy = LicenseStrategy::classify(identifier);
            debug!(package = package_name, identifier, ?strategy, "Resolving license text");
            let template = self.template(fetcher, cache, package_name, strategy)?;
            texts.push(fill_placeholders(&template, &self.template_year, owner));
        }
        Ok(join_texts(&texts))
    }

    fn template<T: HttpTransport>(
        &self,
        fetcher: &Fetcher<T>,
        cache: &mut ResponseCache,
        package_name: &str,
        strategy: LicenseStrategy,
    ) -> Result<String> {
        let template = match strategy {
            LicenseStrategy::PublicDomain => String::new(),
            LicenseStrategy::AcademicFree => fetcher.fetch(AFL_URL, cache, None),
            LicenseStrategy::CreativeCommonsZero => {
                fetcher.fetch(CC_ZERO_URL, cache, Some(&self.plain_headers))
            }
            LicenseStrategy::CreativeCommonsAttribution => format!(
                "{}{}",
                CC_ATTRIBUTION_PREFIX,
                fetcher.fetch(CC_BY_URL, cache, Some(&self.plain_headers))
            ),
            LicenseStrategy::AmbiguousBsd => {
                let identifier = self.bsd_overrides.resolve(package_name)?;
                self.github.license_template(fetcher, cache, identifier)?
            }
            LicenseStrategy::PlatformTemplate(identifier) => {
                self.github.license_template(fetcher, cache, &identifier)?
            }
        };
        Ok(template)
    }
}
