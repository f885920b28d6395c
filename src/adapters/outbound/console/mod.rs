/// Console adapters for terminal status output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
