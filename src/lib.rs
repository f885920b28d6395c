//! sbom-viewer - Dashboard for SBOM and vulnerability-scan reports
//!
//! This library loads a CycloneDX SBOM and a Grype vulnerability report,
//! normalizes both into uniform collections, aggregates them and renders a
//! dashboard with two charts and two filterable tables. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_analysis`): Report models, normalization,
//!   aggregation, filtering and chart geometry
//! - **Application Layer** (`application`): Use cases, state and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_viewer::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let loader = LoadReportsUseCase::new(ReportClient::new()?, StderrProgressReporter::new());
//! let session = ViewerSession::new(loader, ReportRequest::default());
//!
//! session.reload().await;
//!
//! let model = session.dashboard(&FilterRequest::default(), &SvgChartRenderer::new());
//! let output = HtmlFormatter::new().format(&model)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod report_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, JsonFormatter, MarkdownFormatter, SvgChartRenderer,
    };
    pub use crate::adapters::outbound::network::{HttpReportClient, ReportClient};
    pub use crate::application::dto::{FilterRequest, LoadOutcome, OutputFormat, ReportRequest};
    pub use crate::application::read_models::{
        render_pkg_table, render_vuln_table, DashboardReadModel, DashboardReadModelBuilder,
        PackageTable, VulnerabilityTable,
    };
    pub use crate::application::state::ApplicationState;
    pub use crate::application::use_cases::{LoadReportsUseCase, ReloadOutcome, ViewerSession};
    pub use crate::ports::outbound::{
        ChartRenderer, ChartTarget, DashboardFormatter, LoadResult, OutputPresenter,
        ProgressReporter, ReportRepository,
    };
    pub use crate::report_analysis::domain::{
        Component, DataOrigin, DemoDataset, ReportDocuments, ReportLocation, Severity,
        SeverityHistogram, TypeHistogram, VulnerabilityMatch,
    };
    pub use crate::report_analysis::services::{
        PackageFilter, ReportAggregator, ReportNormalizer, VulnerabilityFilter,
    };
    pub use crate::shared::error::{LoadFailure, ViewerError};
    pub use crate::shared::Result;
}
