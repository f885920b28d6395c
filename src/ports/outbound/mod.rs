/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod chart_renderer;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_repository;

pub use chart_renderer::{ChartRenderer, ChartTarget};
pub use formatter::DashboardFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_repository::{LoadResult, ReportRepository};
