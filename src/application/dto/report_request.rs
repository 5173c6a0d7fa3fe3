use std::path::PathBuf;

/// ReportRequest - request DTO shared by both report flows
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Project directory to run the listing tool in, or a file holding its
    /// captured output
    pub listing_path: PathBuf,
}

impl ReportRequest {
    pub fn new(listing_path: impl Into<PathBuf>) -> Self {
        Self {
            listing_path: listing_path.into(),
        }
    }
}
