use crate::license_report::domain::ReportEntry;
use crate::license_report::services::escape;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// HtmlFragmentFormatter adapter for the third-party license page
///
/// Every entry becomes a bold heading line followed by the escaped license
/// text in a `<pre>` block. The fragments are meant to be spliced into an
/// existing HTML template, so no document wrapper is emitted.
pub struct HtmlFragmentFormatter;

impl HtmlFragmentFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_entry(entry: &ReportEntry) -> String {
        format!(
            "<b>{}</b>; License - {}:<br/>\n<pre>\n{}\n</pre><br/><br/>\n",
            entry.heading,
            entry.license_label,
            escape(&entry.license_text)
        )
    }
}

impl Default for HtmlFragmentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFragmentFormatter {
    fn format(&self, entries: &[ReportEntry]) -> Result<String> {
        Ok(entries.iter().map(Self::render_entry).collect())
    }
}
