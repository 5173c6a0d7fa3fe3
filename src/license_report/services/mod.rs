pub mod html_escape;
pub mod license_label;
pub mod license_text;
pub mod listing_parser;
pub mod own_package_filter;
pub mod url_normalizer;

pub use html_escape::escape;
pub use license_label::license_label;
pub use listing_parser::ListingParser;
pub use own_package_filter::OwnPackageFilter;
