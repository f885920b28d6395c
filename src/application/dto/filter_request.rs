use crate::report_analysis::services::{PackageFilter, VulnerabilityFilter};

/// FilterRequest - Initial values of the three table filter controls
///
/// Values are kept as entered; the domain filters derived from them apply
/// the lower-casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    /// Vulnerability text filter
    pub vulnerability_term: String,
    /// Severity filter; `None` means any severity
    pub severity: Option<String>,
    /// Package text filter
    pub package_term: String,
}

impl FilterRequest {
    pub fn new(
        vulnerability_term: impl Into<String>,
        severity: Option<String>,
        package_term: impl Into<String>,
    ) -> Self {
        Self {
            vulnerability_term: vulnerability_term.into(),
            severity: severity.filter(|s| !s.is_empty()),
            package_term: package_term.into(),
        }
    }

    pub fn vulnerability_filter(&self) -> VulnerabilityFilter {
        VulnerabilityFilter::new(&self.vulnerability_term, self.severity.as_deref())
    }

    pub fn package_filter(&self) -> PackageFilter {
        PackageFilter::new(&self.package_term)
    }
}
