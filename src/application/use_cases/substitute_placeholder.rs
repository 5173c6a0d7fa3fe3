use crate::application::dto::SubstitutionRequest;
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::LicenseReportError;
use crate::shared::security::read_checked_text;
use crate::shared::Result;
use tracing::warn;

/// SubstitutePlaceholderUseCase - splices a generated report into a template
///
/// Every occurrence of the placeholder in the template document is replaced
/// with the report contents and the result handed to the presenter, which
/// normally rewrites the template file in place.
pub struct SubstitutePlaceholderUseCase<OP> {
    presenter: OP,
}

impl<OP: OutputPresenter> SubstitutePlaceholderUseCase<OP> {
    pub fn new(presenter: OP) -> Self {
        Self { presenter }
    }

    /// Returns the number of replaced occurrences
    pub fn execute(&self, request: &SubstitutionRequest) -> Result<usize> {
        if request.placeholder.is_empty() {
            return Err(LicenseReportError::Validation {
                message: "Placeholder must not be empty".to_string(),
            }
            .into());
        }

        let replacement = Self::read(&request.input_path, "report")?;
        let template = Self::read(&request.template_path, "template")?;

        let occurrences = template.matches(request.placeholder.as_str()).count();
        if occurrences == 0 {
            warn!(
                placeholder = %request.placeholder,
                template = %request.template_path.display(),
                "Placeholder not found, template left unchanged"
            );
        }

        self.presenter
            .present(&template.replace(request.placeholder.as_str(), &replacement))?;
        Ok(occurrences)
    }

    fn read(path: &std::path::Path, description: &str) -> Result<String> {
        read_checked_text(path, description).map_err(|e| {
            LicenseReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::FileSystemWriter;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(template: &str, report: &str) -> (TempDir, SubstitutionRequest) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("ui.html");
        let output = temp_dir.path().join("ThirdPartyLicenses.html");
        fs::write(&input, report).unwrap();
        fs::write(&output, template).unwrap();
        let request = SubstitutionRequest::new(input, output, "<!-- UI -->");
        (temp_dir, request)
    }

    #[test]
    fn test_placeholder_replaced_in_place() {
        let (_temp_dir, request) = fixture(
            "<html><body>\n<!-- UI -->\n</body></html>",
            "<b>vue@2.6.12</b>; License - MIT:<br/>",
        );

        let use_case =
            SubstitutePlaceholderUseCase::new(FileSystemWriter::new(request.template_path.clone()));
        let count = use_case.execute(&request).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            fs::read_to_string(&request.template_path).unwrap(),
            "<html><body>\n<b>vue@2.6.12</b>; License - MIT:<br/>\n</body></html>"
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let (_temp_dir, request) = fixture("<!-- UI -->|<!-- UI -->", "x");

        let use_case =
            SubstitutePlaceholderUseCase::new(FileSystemWriter::new(request.template_path.clone()));

        assert_eq!(use_case.execute(&request).unwrap(), 2);
        assert_eq!(fs::read_to_string(&request.template_path).unwrap(), "x|x");
    }

    #[test]
    fn test_missing_placeholder_leaves_template() {
        let (_temp_dir, request) = fixture("<html></html>", "x");

        let use_case =
            SubstitutePlaceholderUseCase::new(FileSystemWriter::new(request.template_path.clone()));

        assert_eq!(use_case.execute(&request).unwrap(), 0);
        assert_eq!(fs::read_to_string(&request.template_path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let (_temp_dir, mut request) = fixture("<html></html>", "x");
        request.placeholder = String::new();

        let use_case =
            SubstitutePlaceholderUseCase::new(FileSystemWriter::new(request.template_path.clone()));
        let result = use_case.execute(&request);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }

    #[test]
    fn test_missing_input_fails() {
        let (temp_dir, mut request) = fixture("<!-- UI -->", "x");
        request.input_path = temp_dir.path().join("missing.html");

        let use_case =
            SubstitutePlaceholderUseCase::new(FileSystemWriter::new(request.template_path.clone()));

        assert!(use_case.execute(&request).is_err());
        assert_eq!(fs::read_to_string(&request.template_path).unwrap(), "<!-- UI -->");
    }
}
