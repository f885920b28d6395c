use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered dashboard goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// File output when a path is given, stdout otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
///
/// Kept in the application layer: it selects the infrastructure adapter for
/// the destination the user asked for.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the given destination
    ///
    /// # Examples
    /// ```
    /// use sbom_viewer::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output(Some(PathBuf::from("dashboard.html"))),
            PresenterType::File(PathBuf::from("dashboard.html"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.html");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("<html></html>").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("").is_ok());
    }
}
