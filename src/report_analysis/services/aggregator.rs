use crate::report_analysis::domain::{
    Component, SeverityHistogram, TypeHistogram, VulnerabilityMatch,
};

/// ReportAggregator service for deriving chart statistics
///
/// Both aggregations are total: they accept any input, including empty
/// slices, and never fail.
pub struct ReportAggregator;

impl ReportAggregator {
    /// Counts matches per canonical severity
    ///
    /// Matches whose severity is not one of the four canonical labels are
    /// skipped here; they stay in the collection and in the table.
    pub fn aggregate_severity(vulnerabilities: &[VulnerabilityMatch]) -> SeverityHistogram {
        let mut histogram = SeverityHistogram::new();
        for severity in vulnerabilities.iter().filter_map(|v| v.severity_level()) {
            histogram.increment(severity);
        }
        histogram
    }

    /// Counts components per type, keyed in first-seen order
    pub fn aggregate_type(components: &[Component]) -> TypeHistogram {
        let mut histogram = TypeHistogram::new();
        for component in components {
            histogram.increment(component.component_type());
        }
        histogram
    }
}
