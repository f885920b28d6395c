use super::escape::escape_markdown_table_cell;
use crate::application::read_models::{DashboardReadModel, PackageTable, VulnerabilityTable};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

/// Markdown table separator for the two-column count tables
const COUNT_TABLE_SEPARATOR: &str = "|---|---|\n";

/// MarkdownFormatter adapter for a plain-text dashboard summary
///
/// Charts are rendered as count tables. Only rows visible under the active
/// filters are listed.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("# SBOM Viewer Dashboard\n\n");
        for line in model.status.lines() {
            output.push_str(&format!("> {}\n", line));
        }
        output.push('\n');
    }

    fn render_severity_counts(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("## Vulnerabilities by Severity\n\n");
        output.push_str("| Severity | Count |\n");
        output.push_str(COUNT_TABLE_SEPARATOR);
        for (severity, count) in model.severity_histogram.iter() {
            output.push_str(&format!("| {} | {} |\n", severity, count));
        }
        output.push('\n');
    }

    fn render_type_counts(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("## Components by Type\n\n");
        if model.type_histogram.is_empty() {
            output.push_str("No components.\n\n");
            return;
        }
        output.push_str("| Type | Count |\n");
        output.push_str(COUNT_TABLE_SEPARATOR);
        for (component_type, count) in model.type_histogram.iter() {
            output.push_str(&format!(
                "| {} | {} |\n",
                escape_markdown_table_cell(component_type),
                count
            ));
        }
        output.push('\n');
    }

    fn render_table_header(output: &mut String, header: &[&str]) {
        output.push_str(&format!("| {} |\n", header.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(header.len())));
    }

    fn render_shown_count(output: &mut String, shown: usize, total: usize) {
        if shown != total {
            output.push_str(&format!("Showing {} of {} rows.\n\n", shown, total));
        }
    }

    fn render_vulnerabilities(&self, output: &mut String, table: &VulnerabilityTable) {
        output.push_str("## Vulnerabilities\n\n");
        Self::render_shown_count(output, table.visible_count(), table.len());
        Self::render_table_header(output, table.header());
        for vulnerability in table.visible_rows() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_markdown_table_cell(vulnerability.id()),
                escape_markdown_table_cell(vulnerability.severity()),
                escape_markdown_table_cell(vulnerability.package()),
                escape_markdown_table_cell(vulnerability.version())
            ));
        }
        output.push('\n');
    }

    fn render_packages(&self, output: &mut String, table: &PackageTable) {
        output.push_str("## Packages\n\n");
        Self::render_shown_count(output, table.visible_count(), table.len());
        Self::render_table_header(output, table.header());
        for component in table.visible_rows() {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_markdown_table_cell(component.name()),
                escape_markdown_table_cell(component.version()),
                escape_markdown_table_cell(component.component_type())
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for MarkdownFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);
        self.render_severity_counts(&mut output, model);
        self.render_type_counts(&mut output, model);
        self.render_vulnerabilities(&mut output, &model.vulnerability_table);
        self.render_packages(&mut output, &model.package_table);
        Ok(output)
    }
}
