use crate::report_analysis::domain::ReportLocation;
use crate::shared::error::LoadFailure;
use async_trait::async_trait;
use serde_json::Value;

/// Result of fetching a single report document
pub type LoadResult<T> = std::result::Result<T, LoadFailure>;

/// ReportRepository port for fetching raw report documents
///
/// This port abstracts the transport (local files, HTTP) used to retrieve
/// the SBOM and the vulnerability-scan report.
///
/// # Async Support
/// Fetches are async so both documents can be requested concurrently.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetches and parses one JSON document
    ///
    /// # Errors
    /// Returns a [`LoadFailure`] if:
    /// - The transport reports a non-success status
    /// - The network request or file read fails
    /// - The content is not valid JSON
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value>;
}
