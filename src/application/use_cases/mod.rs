/// Use cases module containing application business logic orchestration
mod load_reports;
mod viewer_session;

pub use load_reports::LoadReportsUseCase;
pub use viewer_session::{ReloadOutcome, ViewerSession};
