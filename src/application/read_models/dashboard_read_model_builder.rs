//! Builder for constructing DashboardReadModel from application state

use super::dashboard_read_model::{DashboardReadModel, SEVERITY_CHART_ID, TYPE_CHART_ID};
use super::table_view::{render_pkg_table, render_vuln_table};
use crate::application::dto::FilterRequest;
use crate::application::state::ApplicationState;
use crate::ports::outbound::{ChartRenderer, ChartTarget};
use crate::report_analysis::services::ReportAggregator;

/// Builder for constructing DashboardReadModel
///
/// Aggregates the normalized collections, draws both charts through the
/// given renderer and builds both tables with the requested filters already
/// applied.
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    pub fn build(
        state: &ApplicationState,
        filters: &FilterRequest,
        renderer: &dyn ChartRenderer,
    ) -> DashboardReadModel {
        let severity_histogram = ReportAggregator::aggregate_severity(state.vulnerabilities());
        let type_histogram = ReportAggregator::aggregate_type(state.components());

        let mut severity_chart = ChartTarget::new(SEVERITY_CHART_ID);
        renderer.render_severity_chart(&mut severity_chart, &severity_histogram);
        let mut type_chart = ChartTarget::new(TYPE_CHART_ID);
        renderer.render_type_chart(&mut type_chart, &type_histogram);

        let mut vulnerability_table = render_vuln_table(state.vulnerabilities());
        vulnerability_table.apply_filter(&filters.vulnerability_filter());
        let mut package_table = render_pkg_table(state.components());
        package_table.apply_filter(&filters.package_filter());

        DashboardReadModel {
            status: state.status_message(),
            origin: state.origin(),
            generated_at: state.scan_timestamp().map(str::to_string),
            package_count: state.components().len(),
            vulnerability_count: state.vulnerabilities().len(),
            severity_histogram,
            type_histogram,
            severity_chart,
            type_chart,
            vulnerability_table,
            package_table,
            filters: filters.clone(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
