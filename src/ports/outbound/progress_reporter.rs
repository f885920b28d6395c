/// ProgressReporter port for user-facing status messages
///
/// The loader reports three kinds of status: a pending "loading" state,
/// the summary of loaded reports, and the demo fallback notice. Adapters
/// decide how these are displayed; they must not write to stdout, which
/// carries the formatted output.
pub trait ProgressReporter {
    /// Reports that a long-running operation has started
    ///
    /// The status stays visible until the next `report_*` call.
    fn report_loading(&self, message: &str);

    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a warning or a notice that the user should notice
    fn report_warning(&self, message: &str);

    /// Reports the final status of an operation
    fn report_completion(&self, message: &str);
}
