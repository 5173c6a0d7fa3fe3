/// Mock implementations for testing
mod mock_http_transport;
mod mock_listing_reader;
mod mock_progress_reporter;

pub use mock_http_transport::MockHttpTransport;
pub use mock_listing_reader::MockListingReader;
pub use mock_progress_reporter::MockProgressReporter;
