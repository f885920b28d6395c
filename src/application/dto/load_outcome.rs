use crate::report_analysis::domain::{DataOrigin, ReportDocuments};
use crate::shared::error::LoadFailure;

/// LoadOutcome - Documents produced by one load attempt
///
/// Either both documents came from the reports (`origin == Reports`,
/// `failure == None`) or both are the demo dataset and `failure` holds the
/// reason the reports could not be used.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub documents: ReportDocuments,
    pub origin: DataOrigin,
    pub failure: Option<LoadFailure>,
}

impl LoadOutcome {
    pub fn from_reports(documents: ReportDocuments) -> Self {
        Self {
            documents,
            origin: DataOrigin::Reports,
            failure: None,
        }
    }

    pub fn demo(documents: ReportDocuments, failure: LoadFailure) -> Self {
        Self {
            documents,
            origin: DataOrigin::Demo,
            failure: Some(failure),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.origin == DataOrigin::Demo
    }
}
