/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the
/// application core depends on: report sources, chart rendering,
/// formatting, output presentation and progress reporting.
pub mod outbound;
