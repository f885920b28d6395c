//! Dashboard read model for formatters

use super::table_view::{PackageTable, VulnerabilityTable};
use crate::application::dto::FilterRequest;
use crate::ports::outbound::ChartTarget;
use crate::report_analysis::domain::{DataOrigin, SeverityHistogram, TypeHistogram};

/// Element id of the severity bar chart container
pub const SEVERITY_CHART_ID: &str = "severityChart";

/// Element id of the component-type donut chart container
pub const TYPE_CHART_ID: &str = "typeChart";

/// Everything a formatter needs to render the dashboard
///
/// Built from a single application-state snapshot, so the status, charts
/// and tables always describe the same load.
#[derive(Debug, Clone)]
pub struct DashboardReadModel {
    /// Status region text (summary or fallback notice)
    pub status: String,
    /// Where the data came from; `None` before the first load
    pub origin: Option<DataOrigin>,
    /// Scan timestamp from the vulnerability report
    pub generated_at: Option<String>,
    pub package_count: usize,
    pub vulnerability_count: usize,
    pub severity_histogram: SeverityHistogram,
    pub type_histogram: TypeHistogram,
    /// Rendered severity bar chart
    pub severity_chart: ChartTarget,
    /// Rendered component-type donut chart
    pub type_chart: ChartTarget,
    pub vulnerability_table: VulnerabilityTable,
    pub package_table: PackageTable,
    /// Filter values the tables were filtered with
    pub filters: FilterRequest,
    /// Name and version of the tool that rendered the dashboard
    pub tool_name: String,
    pub tool_version: String,
}

impl DashboardReadModel {
    pub fn is_demo(&self) -> bool {
        self.origin == Some(DataOrigin::Demo)
    }
}
