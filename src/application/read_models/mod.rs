//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that formatters consume:
//! the two filterable tables and the dashboard model that bundles them with
//! the status text and both charts.

pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;
pub mod table_view;

pub use dashboard_read_model::DashboardReadModel;
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
pub use table_view::{
    render_pkg_table, render_vuln_table, PackageTable, RowFilter, TableView, VulnerabilityTable,
    PACKAGE_TABLE_HEADER, VULNERABILITY_TABLE_HEADER,
};
