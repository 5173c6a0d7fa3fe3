/// Formatter adapters for the license report output
mod html_fragment_formatter;

pub use html_fragment_formatter::HtmlFragmentFormatter;
