pub mod component;
pub mod demo;
pub mod histogram;
pub mod report_documents;
pub mod report_location;
pub mod vulnerability;

pub use component::Component;
pub use demo::DemoDataset;
pub use histogram::{SeverityHistogram, TypeHistogram};
pub use report_documents::{DataOrigin, ReportDocuments};
pub use report_location::ReportLocation;
pub use vulnerability::{Severity, VulnerabilityMatch};
