use super::HttpReportClient;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::ports::outbound::{LoadResult, ReportRepository};
use crate::report_analysis::domain::ReportLocation;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// ReportClient adapter dispatching each location to the matching transport
///
/// Paths are read through [`FileSystemReader`], URLs through
/// [`HttpReportClient`], so one repository serves a mix of both.
pub struct ReportClient {
    files: FileSystemReader,
    http: HttpReportClient,
}

impl ReportClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            files: FileSystemReader::new(),
            http: HttpReportClient::new()?,
        })
    }
}

#[async_trait]
impl ReportRepository for ReportClient {
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value> {
        match location {
            ReportLocation::Path(_) => self.files.fetch_document(location).await,
            ReportLocation::Url(_) => self.http.fetch_document(location).await,
        }
    }
}
