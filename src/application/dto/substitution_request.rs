use std::path::PathBuf;

/// SubstitutionRequest - splice a generated report into a template document
#[derive(Debug, Clone)]
pub struct SubstitutionRequest {
    /// File whose contents replace the placeholder
    pub input_path: PathBuf,
    /// Template document, rewritten in place
    pub template_path: PathBuf,
    /// Marker string to replace
    pub placeholder: String,
}

impl SubstitutionRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            template_path: template_path.into(),
            placeholder: placeholder.into(),
        }
    }
}
