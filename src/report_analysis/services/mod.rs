pub mod aggregator;
pub mod chart_layout;
pub mod filter;
pub mod normalizer;

pub use aggregator::ReportAggregator;
pub use filter::{PackageFilter, VulnerabilityFilter};
pub use normalizer::ReportNormalizer;
