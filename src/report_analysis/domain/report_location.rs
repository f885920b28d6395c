use std::fmt;
use std::path::PathBuf;

/// Well-known location of the SBOM document
pub const DEFAULT_SBOM_LOCATION: &str = "reports/sbom.cdx.json";

/// Well-known location of the vulnerability-scan document
pub const DEFAULT_VULNERABILITY_LOCATION: &str = "reports/grype.json";

/// Where a report document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLocation {
    /// A local file
    Path(PathBuf),
    /// An `http://` or `https://` URL
    Url(String),
}

impl ReportLocation {
    /// Interprets a location string: anything starting with `http://` or
    /// `https://` is a URL, everything else is a filesystem path
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ReportLocation::Url(location.to_string())
        } else {
            ReportLocation::Path(PathBuf::from(location))
        }
    }

    pub fn default_sbom() -> Self {
        Self::parse(DEFAULT_SBOM_LOCATION)
    }

    pub fn default_vulnerabilities() -> Self {
        Self::parse(DEFAULT_VULNERABILITY_LOCATION)
    }
}

impl fmt::Display for ReportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLocation::Path(path) => write!(f, "{}", path.display()),
            ReportLocation::Url(url) => f.write_str(url),
        }
    }
}
