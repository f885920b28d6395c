use crate::report_analysis::domain::{Component, VulnerabilityMatch};
use serde_json::Value;

/// ReportNormalizer service for flattening raw report documents
///
/// Reads the SBOM `components` array and the scan report `matches` array into
/// uniform collections. Every lookup is tolerant: a missing, `null` or empty
/// field counts as absent and its default applies. Numbers and booleans are
/// kept in their JSON text form; arrays and objects count as absent. A
/// missing or non-array collection yields an empty list. Source order is kept.
pub struct ReportNormalizer;

impl ReportNormalizer {
    /// Normalizes both documents
    ///
    /// # Returns
    /// Tuple of (components, vulnerability matches)
    pub fn normalize(sbom: &Value, vulnerabilities: &Value) -> (Vec<Component>, Vec<VulnerabilityMatch>) {
        (
            Self::normalize_components(sbom),
            Self::normalize_matches(vulnerabilities),
        )
    }

    pub fn normalize_components(sbom: &Value) -> Vec<Component> {
        entries(sbom, "components")
            .iter()
            .map(|entry| {
                Component::new(
                    text(entry.get("name")).unwrap_or_default(),
                    text(entry.get("version")).unwrap_or_default(),
                    text(entry.get("type")),
                )
            })
            .collect()
    }

    pub fn normalize_matches(vulnerabilities: &Value) -> Vec<VulnerabilityMatch> {
        entries(vulnerabilities, "matches")
            .iter()
            .map(|entry| {
                let vulnerability = entry.get("vulnerability");
                let artifact = entry.get("artifact");
                VulnerabilityMatch::new(
                    text(vulnerability.and_then(|v| v.get("id"))),
                    text(vulnerability.and_then(|v| v.get("severity"))),
                    text(artifact.and_then(|a| a.get("name"))),
                    text(artifact.and_then(|a| a.get("version"))),
                )
            })
            .collect()
    }

    /// Reads `descriptor.timestamp` from the scan report
    pub fn scan_timestamp(vulnerabilities: &Value) -> Option<String> {
        text(
            vulnerabilities
                .get("descriptor")
                .and_then(|d| d.get("timestamp")),
        )
    }
}

/// Array stored under `key`, or an empty slice
fn entries<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Scalar value of a field as text; `None` when absent or empty
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        _ => None,
    }
}
