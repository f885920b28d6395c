use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardFormatter port for formatting the dashboard output
///
/// This port abstracts the output format (HTML page, Markdown summary,
/// JSON dump) of the rendered dashboard.
pub trait DashboardFormatter {
    /// Formats the dashboard read model
    ///
    /// # Arguments
    /// * `model` - Status, counts, histograms and filtered tables
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
