//! HTML dashboard formatter.

use super::escape::{escape_html, escape_html_attr};
use crate::application::read_models::{DashboardReadModel, PackageTable, VulnerabilityTable};
use crate::ports::outbound::{ChartTarget, DashboardFormatter};
use crate::report_analysis::domain::Severity;
use crate::shared::Result;
use std::fmt::Write;

const STYLES: &str = r#"    <style>
        :root {
            --bg-color: #f8fafc;
            --text-color: #0f172a;
            --muted-color: #64748b;
            --border-color: #e2e8f0;
            --card-bg: #ffffff;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-color);
            margin: 0;
            padding: 20px;
            line-height: 1.5;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        .card {
            background-color: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            padding: 16px;
            margin-bottom: 20px;
        }
        #status { white-space: pre-line; color: var(--muted-color); margin: 0; }
        .charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px; }
        .chart { height: 220px; }
        .filters { display: flex; gap: 8px; margin-bottom: 12px; }
        input, select { padding: 6px 8px; border: 1px solid var(--border-color); border-radius: 4px; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 8px 12px; text-align: left; border-bottom: 1px solid var(--border-color); }
        th { font-weight: 600; }
        tr[hidden] { display: none; }
        .badge {
            display: inline-block;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 0.85em;
            font-weight: 500;
            background-color: #e2e8f0;
        }
        .badge.Critical { background-color: #b91c1c; color: #ffffff; }
        .badge.High { background-color: #ef4444; color: #ffffff; }
        .badge.Medium { background-color: #f59e0b; color: #0f172a; }
        .badge.Low { background-color: #10b981; color: #0f172a; }
        footer { color: var(--muted-color); font-size: 0.85em; }
    </style>
"#;

/// Live filtering in the page, applying the same predicates as the table view
const FILTER_SCRIPT: &str = r#"    <script>
    (function () {
        var vulnFilter = document.getElementById('vulnFilter');
        var sevFilter = document.getElementById('sevFilter');
        var pkgFilter = document.getElementById('pkgFilter');

        function filterVulns() {
            var term = vulnFilter.value.toLowerCase();
            var severity = sevFilter.value;
            document.querySelectorAll('#vulnTable tbody tr').forEach(function (row) {
                var cells = row.cells;
                var text = [cells[0].textContent, cells[2].textContent, cells[3].textContent]
                    .join(' ').toLowerCase();
                var severityMatches = !severity || cells[1].textContent.trim() === severity;
                row.hidden = !(text.indexOf(term) !== -1 && severityMatches);
            });
        }

        function filterPkgs() {
            var term = pkgFilter.value.toLowerCase();
            document.querySelectorAll('#pkgTable tbody tr').forEach(function (row) {
                row.hidden = row.textContent.toLowerCase().indexOf(term) === -1;
            });
        }

        vulnFilter.addEventListener('input', filterVulns);
        sevFilter.addEventListener('change', filterVulns);
        pkgFilter.addEventListener('input', filterPkgs);
    })();
    </script>
"#;

/// HtmlFormatter adapter generating a self-contained dashboard page
///
/// The page carries the status region, both charts as inline SVG and the
/// two tables. Rows hidden by the pre-applied filters are emitted with the
/// `hidden` attribute so the page opens in the filtered state.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_chart(out: &mut String, title: &str, chart: &ChartTarget) -> Result<()> {
        writeln!(out, "            <div class=\"card\">")?;
        writeln!(out, "                <h2>{}</h2>", escape_html(title))?;
        writeln!(
            out,
            "                <div id=\"{}\" class=\"chart\">{}</div>",
            escape_html_attr(chart.id()),
            chart.content()
        )?;
        writeln!(out, "            </div>")?;
        Ok(())
    }

    fn render_severity_options(out: &mut String, selected: Option<&str>) -> Result<()> {
        writeln!(out, "                    <option value=\"\">All severities</option>")?;
        for severity in Severity::ALL {
            let label = severity.as_str();
            let marker = if selected == Some(label) { " selected" } else { "" };
            writeln!(
                out,
                "                    <option value=\"{label}\"{marker}>{label}</option>"
            )?;
        }
        // A non-canonical pre-applied severity still needs a selectable option
        if let Some(custom) = selected.filter(|s| Severity::from_label(s).is_none()) {
            writeln!(
                out,
                "                    <option value=\"{}\" selected>{}</option>",
                escape_html_attr(custom),
                escape_html(custom)
            )?;
        }
        Ok(())
    }

    fn render_header_row(out: &mut String, header: &[&str]) -> Result<()> {
        out.push_str("                <thead><tr>");
        for cell in header {
            write!(out, "<th>{}</th>", escape_html(cell))?;
        }
        out.push_str("</tr></thead>\n");
        Ok(())
    }

    fn row_open(visible: bool) -> &'static str {
        if visible {
            "<tr>"
        } else {
            "<tr hidden>"
        }
    }

    fn render_vulnerabilities(out: &mut String, model: &DashboardReadModel) -> Result<()> {
        let filters = &model.filters;
        writeln!(out, "        <section class=\"card\">")?;
        writeln!(out, "            <h2>Vulnerabilities</h2>")?;
        writeln!(out, "            <div class=\"filters\">")?;
        writeln!(
            out,
            "                <input id=\"vulnFilter\" type=\"search\" placeholder=\"Filter by CVE, package or version\" value=\"{}\">",
            escape_html_attr(&filters.vulnerability_term)
        )?;
        writeln!(out, "                <select id=\"sevFilter\">")?;
        Self::render_severity_options(out, filters.severity.as_deref())?;
        writeln!(out, "                </select>")?;
        writeln!(out, "            </div>")?;
        writeln!(out, "            <table id=\"vulnTable\">")?;
        Self::render_vulnerability_rows(out, &model.vulnerability_table)?;
        writeln!(out, "            </table>")?;
        writeln!(out, "        </section>")?;
        Ok(())
    }

    fn render_vulnerability_rows(out: &mut String, table: &VulnerabilityTable) -> Result<()> {
        Self::render_header_row(out, table.header())?;
        out.push_str("                <tbody>\n");
        for (vulnerability, visible) in table.iter() {
            writeln!(
                out,
                "                {}<td>{}</td><td><span class=\"badge {}\">{}</span></td><td>{}</td><td>{}</td></tr>",
                Self::row_open(visible),
                escape_html(vulnerability.id()),
                escape_html_attr(vulnerability.severity()),
                escape_html(vulnerability.severity()),
                escape_html(vulnerability.package()),
                escape_html(vulnerability.version())
            )?;
        }
        out.push_str("                </tbody>\n");
        Ok(())
    }

    fn render_packages(out: &mut String, model: &DashboardReadModel) -> Result<()> {
        writeln!(out, "        <section class=\"card\">")?;
        writeln!(out, "            <h2>Packages</h2>")?;
        writeln!(out, "            <div class=\"filters\">")?;
        writeln!(
            out,
            "                <input id=\"pkgFilter\" type=\"search\" placeholder=\"Filter packages\" value=\"{}\">",
            escape_html_attr(&model.filters.package_term)
        )?;
        writeln!(out, "            </div>")?;
        writeln!(out, "            <table id=\"pkgTable\">")?;
        Self::render_package_rows(out, &model.package_table)?;
        writeln!(out, "            </table>")?;
        writeln!(out, "        </section>")?;
        Ok(())
    }

    fn render_package_rows(out: &mut String, table: &PackageTable) -> Result<()> {
        Self::render_header_row(out, table.header())?;
        out.push_str("                <tbody>\n");
        // No whitespace between cells: the live filter matches the row text
        for (component, visible) in table.iter() {
            writeln!(
                out,
                "                {}<td>{}</td><td>{}</td><td>{}</td></tr>",
                Self::row_open(visible),
                escape_html(component.name()),
                escape_html(component.version()),
                escape_html(component.component_type())
            )?;
        }
        out.push_str("                </tbody>\n");
        Ok(())
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for HtmlFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "    <meta charset=\"utf-8\">")?;
        writeln!(out, "    <title>SBOM Viewer</title>")?;
        out.push_str(STYLES);
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "    <div class=\"container\">")?;

        writeln!(out, "        <header class=\"card\">")?;
        writeln!(out, "            <h1>SBOM Viewer</h1>")?;
        writeln!(
            out,
            "            <p id=\"status\">{}</p>",
            escape_html(&model.status)
        )?;
        writeln!(out, "        </header>")?;

        writeln!(out, "        <section class=\"charts\">")?;
        Self::render_chart(&mut out, "Vulnerabilities by severity", &model.severity_chart)?;
        Self::render_chart(&mut out, "Components by type", &model.type_chart)?;
        writeln!(out, "        </section>")?;

        Self::render_vulnerabilities(&mut out, model)?;
        Self::render_packages(&mut out, model)?;

        writeln!(
            out,
            "        <footer>Generated by {} v{}</footer>",
            escape_html(&model.tool_name),
            escape_html(&model.tool_version)
        )?;
        writeln!(out, "    </div>")?;
        out.push_str(FILTER_SCRIPT);
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(out)
    }
}
