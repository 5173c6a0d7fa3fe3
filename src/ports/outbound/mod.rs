/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, processes, file system, console).
pub mod http_transport;
pub mod listing_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use http_transport::{HttpTransport, RequestHeaders};
pub use listing_reader::{ListingCommand, ListingReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
