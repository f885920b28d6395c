use crate::application::dto::{LoadOutcome, ReportRequest};
use crate::application::state::LOADING_MESSAGE;
use crate::ports::outbound::{ProgressReporter, ReportRepository};
use crate::report_analysis::domain::{DemoDataset, ReportDocuments};
use crate::shared::error::LoadFailure;

/// LoadReportsUseCase - Fetches both report documents as one unit
///
/// The two documents are requested concurrently. A load either yields both
/// real documents or, through [`load_or_demo`](Self::load_or_demo), both
/// demo documents; a mix of the two is never produced.
///
/// # Type Parameters
/// * `R` - ReportRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadReportsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> LoadReportsUseCase<R, PR>
where
    R: ReportRepository,
    PR: ProgressReporter,
{
    /// Creates a new LoadReportsUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Fetches both documents concurrently
    ///
    /// No retries. The first failure from either fetch is returned and the
    /// other result, if any, is discarded.
    pub async fn load(&self, request: &ReportRequest) -> Result<ReportDocuments, LoadFailure> {
        let (sbom, vulnerabilities) = futures::try_join!(
            self.repository.fetch_document(&request.sbom),
            self.repository.fetch_document(&request.vulnerabilities),
        )?;
        Ok(ReportDocuments::new(sbom, vulnerabilities))
    }

    /// Loads the reports, substituting the demo dataset on any failure
    ///
    /// Never fails. The returned outcome records which source was used and
    /// why the reports were rejected.
    pub async fn load_or_demo(&self, request: &ReportRequest) -> LoadOutcome {
        self.progress_reporter.report_loading(LOADING_MESSAGE);

        match self.load(request).await {
            Ok(documents) => LoadOutcome::from_reports(documents),
            Err(failure) => {
                self.progress_reporter.report(&format!("   - {}", failure));
                LoadOutcome::demo(DemoDataset::documents(), failure)
            }
        }
    }
}
