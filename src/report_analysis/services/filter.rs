use crate::report_analysis::domain::{Component, VulnerabilityMatch};

/// VulnerabilityFilter - Text and severity predicate for vulnerability rows
///
/// A row passes when both hold:
/// - the lower-cased term is a substring of `"{id} {package} {version}"`
///   lower-cased (an empty term matches everything)
/// - the severity filter is unset, or equals the trimmed severity exactly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerabilityFilter {
    term: String,
    severity: Option<String>,
}

impl VulnerabilityFilter {
    /// Creates a filter; an empty severity string means "any severity"
    pub fn new(term: &str, severity: Option<&str>) -> Self {
        Self {
            term: term.to_lowercase(),
            severity: severity
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// The lower-cased search term
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty() || self.severity.is_some()
    }

    pub fn matches(&self, vulnerability: &VulnerabilityMatch) -> bool {
        self.matches_term(vulnerability) && self.matches_severity(vulnerability)
    }

    fn matches_term(&self, vulnerability: &VulnerabilityMatch) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {}",
            vulnerability.id(),
            vulnerability.package(),
            vulnerability.version()
        )
        .to_lowercase();
        haystack.contains(&self.term)
    }

    fn matches_severity(&self, vulnerability: &VulnerabilityMatch) -> bool {
        match &self.severity {
            None => true,
            Some(severity) => vulnerability.severity().trim() == severity,
        }
    }
}

/// PackageFilter - Text predicate for package rows
///
/// The lower-cased term is matched against the row's full text: name, version
/// and type joined without separators, lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    term: String,
}

impl PackageFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn matches(&self, component: &Component) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let row_text = format!(
            "{}{}{}",
            component.name(),
            component.version(),
            component.component_type()
        )
        .to_lowercase();
        row_text.contains(&self.term)
    }
}
