use serde_json::Value;

/// Where the currently displayed data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Both report documents were loaded successfully
    Reports,
    /// Loading failed and the built-in demo dataset is shown
    Demo,
}

/// The two raw report documents, kept as loosely-typed JSON
///
/// Neither document is validated against its schema. Fields are read
/// tolerantly by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocuments {
    sbom: Value,
    vulnerabilities: Value,
}

impl ReportDocuments {
    pub fn new(sbom: Value, vulnerabilities: Value) -> Self {
        Self {
            sbom,
            vulnerabilities,
        }
    }

    /// The SBOM document (CycloneDX-shaped)
    pub fn sbom(&self) -> &Value {
        &self.sbom
    }

    /// The vulnerability-scan document (Grype-shaped)
    pub fn vulnerabilities(&self) -> &Value {
        &self.vulnerabilities
    }
}
