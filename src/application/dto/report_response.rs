use crate::license_report::domain::ReportEntry;

/// ReportResponse - resolved entries of one report flow
#[derive(Debug, Clone, Default)]
pub struct ReportResponse {
    /// Entries in listing order
    pub entries: Vec<ReportEntry>,
    /// Dependencies left out of the report, with the reason
    pub skipped: Vec<String>,
}

impl ReportResponse {
    pub fn new(entries: Vec<ReportEntry>, skipped: Vec<String>) -> Self {
        Self { entries, skipped }
    }
}
