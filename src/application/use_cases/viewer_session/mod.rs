use crate::application::dto::{FilterRequest, ReportRequest};
use crate::application::read_models::{DashboardReadModel, DashboardReadModelBuilder};
use crate::application::state::ApplicationState;
use crate::application::use_cases::LoadReportsUseCase;
use crate::ports::outbound::{ChartRenderer, ProgressReporter, ReportRepository};
use crate::report_analysis::domain::DataOrigin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Notice emitted when a reload is requested while another one is pending
pub const RELOAD_SKIPPED_MESSAGE: &str = "⚠️  Reload ignored: reports are still loading.";

/// Result of a reload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// A load ran and replaced the state; carries where the data came from
    Loaded(DataOrigin),
    /// Another load was in flight, nothing happened
    Skipped,
}

/// ViewerSession - Owns the application state and serializes reloads
///
/// At most one load runs at a time. A reload requested while another one is
/// in flight returns [`ReloadOutcome::Skipped`] immediately instead of
/// racing it, so the state always reflects exactly one completed load.
///
/// # Type Parameters
/// * `R` - ReportRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ViewerSession<R, PR> {
    loader: LoadReportsUseCase<R, PR>,
    request: ReportRequest,
    state: Mutex<ApplicationState>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the reload finishes or is dropped
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<R, PR> ViewerSession<R, PR>
where
    R: ReportRepository,
    PR: ProgressReporter,
{
    /// Creates a session with an empty state; call [`reload`](Self::reload)
    /// to perform the initial load
    pub fn new(loader: LoadReportsUseCase<R, PR>, request: ReportRequest) -> Self {
        Self {
            loader,
            request,
            state: Mutex::new(ApplicationState::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn request(&self) -> &ReportRequest {
        &self.request
    }

    pub fn progress_reporter(&self) -> &PR {
        self.loader.progress_reporter()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// A copy of the current state
    pub fn snapshot(&self) -> ApplicationState {
        self.lock_state().clone()
    }

    /// Loads both reports (or the demo dataset) and replaces the state
    pub async fn reload(&self) -> ReloadOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.progress_reporter().report_warning(RELOAD_SKIPPED_MESSAGE);
            return ReloadOutcome::Skipped;
        }
        let _guard = InFlightGuard(&self.in_flight);

        let outcome = self.loader.load_or_demo(&self.request).await;
        let origin = outcome.origin;

        let status = {
            let mut state = self.lock_state();
            state.replace(outcome.documents, origin);
            state.status_message()
        };

        match origin {
            DataOrigin::Reports => self.progress_reporter().report_completion(&status),
            DataOrigin::Demo => self.progress_reporter().report_warning(&status),
        }

        ReloadOutcome::Loaded(origin)
    }

    /// Builds the dashboard from one snapshot of the current state
    pub fn dashboard(
        &self,
        filters: &FilterRequest,
        renderer: &dyn ChartRenderer,
    ) -> DashboardReadModel {
        let state = self.lock_state();
        DashboardReadModelBuilder::build(&state, filters, renderer)
    }

    fn lock_state(&self) -> MutexGuard<'_, ApplicationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
