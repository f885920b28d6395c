use crate::report_analysis::domain::ReportLocation;
use crate::shared::error::ViewerError;
use crate::shared::Result;

/// ReportRequest - Locations of the two report documents to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// SBOM document (CycloneDX JSON)
    pub sbom: ReportLocation,
    /// Vulnerability-scan document (Grype JSON)
    pub vulnerabilities: ReportLocation,
}

impl ReportRequest {
    pub fn new(sbom: ReportLocation, vulnerabilities: ReportLocation) -> Self {
        Self {
            sbom,
            vulnerabilities,
        }
    }

    /// Builds a request from user-supplied location strings
    ///
    /// # Errors
    /// Returns [`ViewerError::Validation`] if either location is blank.
    pub fn from_locations(sbom: &str, vulnerabilities: &str) -> Result<Self> {
        for (name, value) in [("SBOM", sbom), ("vulnerability report", vulnerabilities)] {
            if value.trim().is_empty() {
                return Err(ViewerError::Validation {
                    message: format!("{} location must not be empty", name),
                }
                .into());
            }
        }
        Ok(Self::new(
            ReportLocation::parse(sbom),
            ReportLocation::parse(vulnerabilities),
        ))
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new(
            ReportLocation::default_sbom(),
            ReportLocation::default_vulnerabilities(),
        )
    }
}
