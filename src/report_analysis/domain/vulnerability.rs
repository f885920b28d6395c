use std::fmt;

/// Identifier used when a match carries no vulnerability id
pub const DEFAULT_VULNERABILITY_ID: &str = "N/A";

/// Severity label used when a match carries no severity
pub const DEFAULT_SEVERITY: &str = "Unknown";

/// Package name used when a match carries no artifact name
pub const DEFAULT_PACKAGE: &str = "unknown";

/// Canonical severity levels, ordered from most to least severe
///
/// Scan reports may carry any severity text; only these four labels take part
/// in aggregation. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All canonical severities in display order
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Resolves a severity label to its canonical level
    ///
    /// Returns `None` for anything that is not exactly one of the four
    /// canonical labels (including `"Unknown"` and `"high"`).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Position of this severity within [`Severity::ALL`]
    pub fn index(self) -> usize {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vulnerability matched against a package by the scanner
///
/// The severity is kept as free text so that non-canonical values remain
/// visible in tables even though aggregation ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityMatch {
    id: String,
    severity: String,
    package: String,
    version: String,
}

impl VulnerabilityMatch {
    /// Creates a match, applying the defaults for each absent field
    pub fn new(
        id: Option<String>,
        severity: Option<String>,
        package: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(|| DEFAULT_VULNERABILITY_ID.to_string()),
            severity: severity.unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
            package: package.unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
            version: version.unwrap_or_default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical severity level, if the severity text is one
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::from_label(&self.severity)
    }
}
