/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_reader;

pub use mock_progress_reporter::{Channel, MockProgressReporter};
pub use mock_report_reader::MockReportReader;
