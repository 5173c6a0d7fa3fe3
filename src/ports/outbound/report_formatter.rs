use crate::license_report::domain::ReportEntry;
use crate::shared::Result;

/// ReportFormatter port for rendering resolved entries
///
/// This port abstracts the markup of the report so the use cases only
/// deal with resolved entries.
pub trait ReportFormatter {
    /// Renders one fragment per entry, in the given order
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, entries: &[ReportEntry]) -> Result<String>;
}
