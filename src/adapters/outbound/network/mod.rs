/// Network adapters for fetching remote report documents
mod http_report_client;
mod report_client;

pub use http_report_client::HttpReportClient;
pub use report_client::ReportClient;
