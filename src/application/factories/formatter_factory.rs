use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DashboardFormatter;

/// Factory for creating dashboard formatters
///
/// Kept in the application layer: it maps the requested output format to
/// the infrastructure adapter that produces it.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_viewer::application::dto::OutputFormat;
    /// use sbom_viewer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DashboardFormatter> {
        match format {
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Progress message shown before formatting
    ///
    /// # Examples
    /// ```
    /// use sbom_viewer::application::dto::OutputFormat;
    /// use sbom_viewer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Rendering HTML dashboard...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Rendering HTML dashboard...",
            OutputFormat::Markdown => "📝 Rendering Markdown summary...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
