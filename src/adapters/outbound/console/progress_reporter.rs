use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting status to stderr
///
/// This adapter implements the ProgressReporter port, writing status lines to
/// stderr so they don't interfere with a dashboard written to stdout.
/// While reports are loading, an indicatif spinner shows the loading message.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report_loading(&self, message: &str) {
        self.finish_spinner();
        self.start_spinner(message);
    }

    fn report(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.green());
    }
}
