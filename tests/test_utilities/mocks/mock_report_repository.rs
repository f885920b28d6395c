use async_trait::async_trait;
use sbom_viewer::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock ReportRepository serving canned results per location
///
/// Locations without a canned result fail with status 404, like a missing
/// file on a static server.
#[derive(Default, Clone)]
pub struct MockReportRepository {
    results: HashMap<String, LoadResult<Value>>,
    delay: Option<Duration>,
    fetch_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: &str, document: Value) -> Self {
        self.results.insert(location.to_string(), Ok(document));
        self
    }

    pub fn with_failure(mut self, location: &str, failure: LoadFailure) -> Self {
        self.results.insert(location.to_string(), Err(failure));
        self
    }

    /// Every fetch waits this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = location.to_string();
        match self.results.get(&key) {
            Some(result) => result.clone(),
            None => Err(LoadFailure::Status {
                location: key,
                status: 404,
            }),
        }
    }
}
