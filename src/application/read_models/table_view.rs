//! Filterable table views
//!
//! A table holds a fixed header, one row per entry of the source collection
//! and a visibility flag per row. Filtering only recomputes the flags; rows
//! are never rebuilt or reordered.

use crate::report_analysis::domain::{Component, VulnerabilityMatch};
use crate::report_analysis::services::{PackageFilter, VulnerabilityFilter};

pub const VULNERABILITY_TABLE_HEADER: &[&str] = &["CVE", "Severity", "Package", "Version"];
pub const PACKAGE_TABLE_HEADER: &[&str] = &["Package", "Version", "Type"];

/// A predicate deciding whether a table row stays visible
pub trait RowFilter<R> {
    fn accepts(&self, row: &R) -> bool;
}

impl RowFilter<VulnerabilityMatch> for VulnerabilityFilter {
    fn accepts(&self, row: &VulnerabilityMatch) -> bool {
        self.matches(row)
    }
}

impl RowFilter<Component> for PackageFilter {
    fn accepts(&self, row: &Component) -> bool {
        self.matches(row)
    }
}

/// Table rows plus cached visibility
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R> {
    header: &'static [&'static str],
    rows: Vec<R>,
    visible: Vec<bool>,
}

pub type VulnerabilityTable = TableView<VulnerabilityMatch>;
pub type PackageTable = TableView<Component>;

impl<R> TableView<R> {
    /// Creates a table with every row visible
    pub fn new(header: &'static [&'static str], rows: Vec<R>) -> Self {
        let visible = vec![true; rows.len()];
        Self {
            header,
            rows,
            visible,
        }
    }

    pub fn header(&self) -> &[&'static str] {
        self.header
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Out-of-range indices are reported as hidden
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Rows paired with their visibility, in table order
    pub fn iter(&self) -> impl Iterator<Item = (&R, bool)> + '_ {
        self.rows.iter().zip(self.visible.iter().copied())
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.iter().filter(|(_, visible)| *visible).map(|(row, _)| row)
    }

    /// Recomputes visibility of every row against `filter`
    pub fn apply_filter<F: RowFilter<R>>(&mut self, filter: &F) {
        for (row, visible) in self.rows.iter().zip(self.visible.iter_mut()) {
            *visible = filter.accepts(row);
        }
    }

    /// Makes every row visible again
    pub fn clear_filter(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = true);
    }
}

/// Builds the vulnerability table: `CVE | Severity | Package | Version`
pub fn render_vuln_table(vulnerabilities: &[VulnerabilityMatch]) -> VulnerabilityTable {
    TableView::new(VULNERABILITY_TABLE_HEADER, vulnerabilities.to_vec())
}

/// Builds the package table: `Package | Version | Type`
pub fn render_pkg_table(components: &[Component]) -> PackageTable {
    TableView::new(PACKAGE_TABLE_HEADER, components.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vulnerability(id: &str, severity: &str, package: &str, version: &str) -> VulnerabilityMatch {
        VulnerabilityMatch::new(
            Some(id.to_string()),
            Some(severity.to_string()),
            Some(package.to_string()),
            Some(version.to_string()),
        )
    }

    fn sample_vulnerabilities() -> Vec<VulnerabilityMatch> {
        vec![
            vulnerability("CVE-1", "High", "react", "18.2.0"),
            vulnerability("CVE-2", "Medium", "vite", "5.4.0"),
            vulnerability("GHSA-3", "High", "vite", "5.3.1"),
        ]
    }

    #[test]
    fn test_render_vuln_table_keeps_order_and_header() {
        let table = render_vuln_table(&sample_vulnerabilities());
        assert_eq!(table.header(), ["CVE", "Severity", "Package", "Version"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[2].id(), "GHSA-3");
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn test_render_pkg_table_header() {
        let components = vec![Component::new("react".into(), "18.2.0".into(), None)];
        let table = render_pkg_table(&components);
        assert_eq!(table.header(), ["Package", "Version", "Type"]);
        assert_eq!(table.rows()[0].component_type(), "library");
    }

    #[test]
    fn test_empty_tables_have_header_only() {
        let table = render_vuln_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.header().len(), 4);
        assert_eq!(table.visible_count(), 0);
    }

    #[test]
    fn test_apply_filter_toggles_visibility_only() {
        let source = sample_vulnerabilities();
        let mut table = render_vuln_table(&source);

        table.apply_filter(&VulnerabilityFilter::new("vite", Some("High")));

        assert!(!table.is_visible(0));
        assert!(!table.is_visible(1));
        assert!(table.is_visible(2));
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows(), source.as_slice());
    }

    #[test]
    fn test_apply_filter_recomputes_from_scratch() {
        let mut table = render_vuln_table(&sample_vulnerabilities());

        table.apply_filter(&VulnerabilityFilter::new("react", None));
        assert_eq!(table.visible_count(), 1);

        table.apply_filter(&VulnerabilityFilter::new("", None));
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn test_visible_rows() {
        let mut table = render_vuln_table(&sample_vulnerabilities());
        table.apply_filter(&VulnerabilityFilter::new("", Some("High")));

        let ids: Vec<&str> = table.visible_rows().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["CVE-1", "GHSA-3"]);
    }

    #[test]
    fn test_package_filter_and_clear() {
        let components = vec![
            Component::new("react".into(), "18.2.0".into(), None),
            Component::new("vite".into(), "5.4.0".into(), Some("application".into())),
        ];
        let mut table = render_pkg_table(&components);

        table.apply_filter(&PackageFilter::new("APP"));
        assert!(!table.is_visible(0));
        assert!(table.is_visible(1));

        table.clear_filter();
        assert_eq!(table.visible_count(), 2);
    }

    #[test]
    fn test_is_visible_out_of_range() {
        let table = render_pkg_table(&[]);
        assert!(!table.is_visible(0));
    }
}
