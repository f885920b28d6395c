/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod filter_request;
mod load_outcome;
mod output_format;
mod report_request;

pub use filter_request::FilterRequest;
pub use load_outcome::LoadOutcome;
pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
