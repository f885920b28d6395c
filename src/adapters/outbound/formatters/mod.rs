/// Formatter adapters for the dashboard output formats and charts
mod escape;
mod html_formatter;
mod json_formatter;
mod markdown_formatter;
mod svg_chart_renderer;

pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use svg_chart_renderer::SvgChartRenderer;
