use crate::ports::outbound::{LoadResult, ReportRepository};
use crate::report_analysis::domain::ReportLocation;
use crate::shared::error::LoadFailure;
use crate::shared::security::validate_report_metadata;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// FileSystemReader adapter for reading report documents from local files
///
/// This adapter implements the ReportRepository port for
/// [`ReportLocation::Path`] locations. Every file is validated before it is
/// read: symbolic links, non-regular files and oversized files are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    async fn read_document(&self, path: &Path) -> LoadResult<Value> {
        let location = path.display().to_string();

        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| LoadFailure::File {
                location: location.clone(),
                details: format!("Failed to read report metadata: {}", e),
            })?;
        validate_report_metadata(&metadata, path).map_err(|e| LoadFailure::File {
            location: location.clone(),
            details: e.to_string(),
        })?;

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadFailure::File {
                location: location.clone(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| LoadFailure::Parse {
            location,
            details: e.to_string(),
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportRepository for FileSystemReader {
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value> {
        match location {
            ReportLocation::Path(path) => self.read_document(path).await,
            ReportLocation::Url(url) => Err(LoadFailure::Transport {
                location: url.clone(),
                details: "URL locations are not readable from the filesystem".to_string(),
            }),
        }
    }
}
