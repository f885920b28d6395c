use crate::ports::outbound::{LoadResult, ReportRepository};
use crate::report_analysis::domain::ReportLocation;
use crate::shared::error::LoadFailure;
use crate::shared::security::MAX_REPORT_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Request timeout for a single report fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HttpReportClient adapter for fetching report documents over HTTP(S)
///
/// This adapter implements the ReportRepository port for
/// [`ReportLocation::Url`] locations. It never retries: any failure is
/// returned immediately so the caller can fall back to demo data.
///
/// Response bodies are capped at the same size as local report files. The
/// declared `Content-Length` is checked first, then the body is read chunk by
/// chunk so a server that omits or understates it cannot exceed the cap.
pub struct HttpReportClient {
    client: reqwest::Client,
    max_body_size: u64,
}

impl HttpReportClient {
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-viewer/{}", version);
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_body_size: MAX_REPORT_SIZE,
        })
    }

    /// Overrides the response body limit
    pub fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    fn too_large(&self, url: &str, size: u64) -> LoadFailure {
        LoadFailure::Transport {
            location: url.to_string(),
            details: format!(
                "response is too large ({} bytes). Maximum allowed size is {} bytes.",
                size, self.max_body_size
            ),
        }
    }

    async fn get_document(&self, url: &str) -> LoadResult<Value> {
        let transport_error = |e: reqwest::Error| LoadFailure::Transport {
            location: url.to_string(),
            details: e.to_string(),
        };

        let mut response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            if length > self.max_body_size {
                return Err(self.too_large(url, length));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
            let size = (body.len() + chunk.len()) as u64;
            if size > self.max_body_size {
                return Err(self.too_large(url, size));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(|e| LoadFailure::Parse {
            location: url.to_string(),
            details: e.to_string(),
        })
    }
}

#[async_trait]
impl ReportRepository for HttpReportClient {
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value> {
        match location {
            ReportLocation::Url(url) => self.get_document(url).await,
            ReportLocation::Path(path) => Err(LoadFailure::Transport {
                location: path.display().to_string(),
                details: "Filesystem paths are not fetchable over HTTP".to_string(),
            }),
        }
    }
}
