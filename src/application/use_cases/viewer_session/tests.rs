use super::*;
use crate::ports::outbound::{ChartTarget, LoadResult};
use crate::report_analysis::domain::{ReportLocation, SeverityHistogram, TypeHistogram};
use crate::shared::error::LoadFailure;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

/// Repository serving fixed documents after an optional delay
struct DelayedRepository {
    sbom: LoadResult<Value>,
    vulnerabilities: LoadResult<Value>,
    delay: Duration,
    fetches: Arc<AtomicUsize>,
}

impl DelayedRepository {
    fn reports(delay: Duration) -> Self {
        Self {
            sbom: Ok(json!({"components": [
                {"name": "lodash", "version": "4.17.21"},
                {"name": "express", "version": "4.18.2", "type": "framework"}
            ]})),
            vulnerabilities: Ok(json!({
                "matches": [{
                    "vulnerability": {"id": "CVE-2021-23337", "severity": "High"},
                    "artifact": {"name": "lodash", "version": "4.17.21"}
                }],
                "descriptor": {"timestamp": "2025-03-01T12:00:00Z"}
            })),
            delay,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing() -> Self {
        Self {
            sbom: Err(LoadFailure::Transport {
                location: "reports/sbom.cdx.json".to_string(),
                details: "connection refused".to_string(),
            }),
            vulnerabilities: Err(LoadFailure::Transport {
                location: "reports/grype.json".to_string(),
                details: "connection refused".to_string(),
            }),
            delay: Duration::ZERO,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ReportRepository for DelayedRepository {
    async fn fetch_document(&self, location: &ReportLocation) -> LoadResult<Value> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if location == &ReportLocation::default_sbom() {
            self.sbom.clone()
        } else {
            self.vulnerabilities.clone()
        }
    }
}

#[derive(Default)]
struct RecordingReporter {
    warnings: RefCell<Vec<String>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report_loading(&self, _message: &str) {}
    fn report(&self, _message: &str) {}
    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

struct NullRenderer;

impl ChartRenderer for NullRenderer {
    fn render_severity_chart(&self, target: &mut ChartTarget, _histogram: &SeverityHistogram) {
        target.clear();
    }
    fn render_type_chart(&self, target: &mut ChartTarget, _histogram: &TypeHistogram) {
        target.clear();
    }
}

fn session(repository: DelayedRepository) -> ViewerSession<DelayedRepository, RecordingReporter> {
    ViewerSession::new(
        LoadReportsUseCase::new(repository, RecordingReporter::default()),
        ReportRequest::default(),
    )
}

#[tokio::test]
async fn test_session_starts_empty() {
    let session = session(DelayedRepository::reports(Duration::ZERO));
    assert!(!session.snapshot().is_loaded());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_reload_loads_reports() {
    let session = session(DelayedRepository::reports(Duration::ZERO));

    let outcome = session.reload().await;

    assert_eq!(outcome, ReloadOutcome::Loaded(DataOrigin::Reports));
    let state = session.snapshot();
    assert_eq!(state.components().len(), 2);
    assert_eq!(state.vulnerabilities().len(), 1);
    assert_eq!(
        session.progress_reporter().completions.borrow().as_slice(),
        ["Packages: 2\nVulnerabilities: 1\nGenerated: 2025-03-01T12:00:00Z"]
    );
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_reload_falls_back_to_demo() {
    let session = session(DelayedRepository::failing());

    let outcome = session.reload().await;

    assert_eq!(outcome, ReloadOutcome::Loaded(DataOrigin::Demo));
    let state = session.snapshot();
    assert_eq!(state.components().len(), 3);
    assert_eq!(state.vulnerabilities().len(), 2);
    assert_eq!(
        session.progress_reporter().warnings.borrow().as_slice(),
        ["No reports found. Using demo data."]
    );
}

#[tokio::test]
async fn test_reload_while_in_flight_is_skipped() {
    let repository = DelayedRepository::reports(Duration::from_millis(50));
    let fetches = repository.fetches.clone();
    let session = session(repository);

    let (first, second) = tokio::join!(session.reload(), session.reload());

    assert_eq!(first, ReloadOutcome::Loaded(DataOrigin::Reports));
    assert_eq!(second, ReloadOutcome::Skipped);
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(
        session.progress_reporter().warnings.borrow().as_slice(),
        [RELOAD_SKIPPED_MESSAGE]
    );
}

#[tokio::test]
async fn test_sequential_reloads_both_run() {
    let repository = DelayedRepository::reports(Duration::ZERO);
    let fetches = repository.fetches.clone();
    let session = session(repository);

    assert_eq!(session.reload().await, ReloadOutcome::Loaded(DataOrigin::Reports));
    assert_eq!(session.reload().await, ReloadOutcome::Loaded(DataOrigin::Reports));
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_dashboard_reflects_current_state() {
    let session = session(DelayedRepository::reports(Duration::ZERO));
    session.reload().await;

    let filters = FilterRequest::new("", None, "framework");
    let model = session.dashboard(&filters, &NullRenderer);

    assert_eq!(model.package_count, 2);
    assert_eq!(model.package_table.visible_count(), 1);
    assert_eq!(model.type_histogram.get("library"), 1);
    assert_eq!(model.type_histogram.get("framework"), 1);
    assert_eq!(model.generated_at.as_deref(), Some("2025-03-01T12:00:00Z"));
}
