/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_repository::MockReportRepository;
