use crate::report_analysis::domain::{Component, DataOrigin, ReportDocuments, VulnerabilityMatch};
use crate::report_analysis::services::ReportNormalizer;

/// Status shown while a load is pending
pub const LOADING_MESSAGE: &str = "Loading reports…";

/// Status shown when the demo dataset replaced the reports
pub const FALLBACK_MESSAGE: &str = "No reports found. Using demo data.";

/// ApplicationState - The loaded documents and everything derived from them
///
/// Starts empty and is replaced as a whole on every load; nothing from an
/// earlier load is merged in. Renderers only ever see the derived
/// collections.
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    documents: Option<ReportDocuments>,
    components: Vec<Component>,
    vulnerabilities: Vec<VulnerabilityMatch>,
    origin: Option<DataOrigin>,
    scan_timestamp: Option<String>,
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: ReportDocuments, origin: DataOrigin) -> Self {
        let (components, vulnerabilities) =
            ReportNormalizer::normalize(documents.sbom(), documents.vulnerabilities());
        let scan_timestamp = ReportNormalizer::scan_timestamp(documents.vulnerabilities());
        Self {
            documents: Some(documents),
            components,
            vulnerabilities,
            origin: Some(origin),
            scan_timestamp,
        }
    }

    /// Replaces the whole state with one derived from `documents`
    pub fn replace(&mut self, documents: ReportDocuments, origin: DataOrigin) {
        *self = Self::from_documents(documents, origin);
    }

    pub fn is_loaded(&self) -> bool {
        self.documents.is_some()
    }

    pub fn documents(&self) -> Option<&ReportDocuments> {
        self.documents.as_ref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn vulnerabilities(&self) -> &[VulnerabilityMatch] {
        &self.vulnerabilities
    }

    pub fn origin(&self) -> Option<DataOrigin> {
        self.origin
    }

    pub fn scan_timestamp(&self) -> Option<&str> {
        self.scan_timestamp.as_deref()
    }

    /// Status text for the dashboard's status region
    pub fn status_message(&self) -> String {
        match self.origin {
            None => LOADING_MESSAGE.to_string(),
            Some(DataOrigin::Demo) => FALLBACK_MESSAGE.to_string(),
            Some(DataOrigin::Reports) => format!(
                "Packages: {}\nVulnerabilities: {}\nGenerated: {}",
                self.components.len(),
                self.vulnerabilities.len(),
                self.scan_timestamp.as_deref().unwrap_or("n/a")
            ),
        }
    }
}
