/// Attribution notice required by CC BY when redistributing unmodified work
pub const CC_ATTRIBUTION_PREFIX: &str =
    "Copyright (c) [year] [fullname]\nNo changes were made to this package.\n";

/// Separator placed between the texts of a multi-licensed package
pub const TEXT_SEPARATOR: &str = "\n---\n";

/// Substitutes the `[year]` and `[fullname]` template placeholders
pub fn fill_placeholders(template: &str, year: &str, owner: &str) -> String {
    template.replace("[year]", year).replace("[fullname]", owner)
}

/// Joins the texts of all licenses a package declares
pub fn join_texts(texts: &[String]) -> String {
    texts.join(TEXT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders() {
        let template = "Copyright (c) [year] [fullname]\n\n[fullname] grants...";
        assert_eq!(
            fill_placeholders(template, "2020", "Jane Doe"),
            "Copyright (c) 2020 Jane Doe\n\nJane Doe grants..."
        );
    }

    #[test]
    fn test_fill_placeholders_attribution_prefix() {
        let text = fill_placeholders(CC_ATTRIBUTION_PREFIX, "2020", "author(s) of spdx-ranges");
        assert!(text.starts_with("Copyright (c) 2020 author(s) of spdx-ranges\n"));
        assert!(text.contains("No changes were made to this package."));
    }

    #[test]
    fn test_join_texts() {
        assert_eq!(
            join_texts(&["first".to_string(), "second".to_string()]),
            "first\n---\nsecond"
        );
        assert_eq!(join_texts(&["only".to_string()]), "only");
        assert_eq!(join_texts(&[]), "");
    }
}
