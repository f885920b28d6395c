use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::DashboardFormatter;
use crate::report_analysis::domain::DataOrigin;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDashboard<'a> {
    status: &'a str,
    origin: Option<&'static str>,
    generated_at: Option<&'a str>,
    tool: Tool<'a>,
    summary: Summary,
    severity_counts: IndexMap<&'static str, usize>,
    type_counts: IndexMap<&'a str, usize>,
    filters: Filters<'a>,
    vulnerabilities: Vec<VulnerabilityRow<'a>>,
    packages: Vec<PackageRow<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    packages: usize,
    vulnerabilities: usize,
}

#[derive(Debug, Serialize)]
struct Filters<'a> {
    term: &'a str,
    severity: Option<&'a str>,
    package: &'a str,
}

#[derive(Debug, Serialize)]
struct VulnerabilityRow<'a> {
    id: &'a str,
    severity: &'a str,
    package: &'a str,
    version: &'a str,
    visible: bool,
}

#[derive(Debug, Serialize)]
struct PackageRow<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    visible: bool,
}

/// JsonFormatter adapter dumping the normalized model and its aggregates
///
/// Every row is included together with its visibility under the active
/// filters.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn origin_label(origin: Option<DataOrigin>) -> Option<&'static str> {
    origin.map(|origin| match origin {
        DataOrigin::Reports => "reports",
        DataOrigin::Demo => "demo",
    })
}

impl DashboardFormatter for JsonFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let dashboard = JsonDashboard {
            status: &model.status,
            origin: origin_label(model.origin),
            generated_at: model.generated_at.as_deref(),
            tool: Tool {
                name: &model.tool_name,
                version: &model.tool_version,
            },
            summary: Summary {
                packages: model.package_count,
                vulnerabilities: model.vulnerability_count,
            },
            severity_counts: model
                .severity_histogram
                .iter()
                .map(|(severity, count)| (severity.as_str(), count))
                .collect(),
            type_counts: model.type_histogram.iter().collect(),
            filters: Filters {
                term: &model.filters.vulnerability_term,
                severity: model.filters.severity.as_deref(),
                package: &model.filters.package_term,
            },
            vulnerabilities: model
                .vulnerability_table
                .iter()
                .map(|(v, visible)| VulnerabilityRow {
                    id: v.id(),
                    severity: v.severity(),
                    package: v.package(),
                    version: v.version(),
                    visible,
                })
                .collect(),
            packages: model
                .package_table
                .iter()
                .map(|(c, visible)| PackageRow {
                    name: c.name(),
                    version: c.version(),
                    component_type: c.component_type(),
                    visible,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&dashboard)?)
    }
}
