use super::report_documents::ReportDocuments;
use chrono::Utc;
use serde_json::json;

/// Built-in demo dataset shown when the real reports cannot be loaded
///
/// Three synthetic components and two synthetic vulnerabilities. Building it
/// has no external dependency and cannot fail.
pub struct DemoDataset;

impl DemoDataset {
    /// Demo documents stamped with the current time
    pub fn documents() -> ReportDocuments {
        Self::documents_at(&Utc::now().to_rfc3339())
    }

    /// Demo documents stamped with the given scan timestamp
    pub fn documents_at(timestamp: &str) -> ReportDocuments {
        let sbom = json!({
            "bomFormat": "CycloneDX",
            "components": [
                { "name": "react", "version": "18.2.0", "type": "library", "purl": "pkg:npm/react@18.2.0" },
                { "name": "vite", "version": "5.4.0", "type": "application", "purl": "pkg:npm/vite@5.4.0" },
                { "name": "eslint", "version": "9.13.0", "type": "library", "purl": "pkg:npm/eslint@9.13.0" }
            ]
        });

        let vulnerabilities = json!({
            "matches": [
                {
                    "vulnerability": { "id": "CVE-2024-1234", "severity": "High" },
                    "artifact": { "name": "react", "version": "18.2.0" }
                },
                {
                    "vulnerability": { "id": "CVE-2025-1111", "severity": "Medium" },
                    "artifact": { "name": "vite", "version": "5.4.0" }
                }
            ],
            "descriptor": { "timestamp": timestamp }
        });

        ReportDocuments::new(sbom, vulnerabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_documents_shape() {
        let documents = DemoDataset::documents_at("2025-01-01T00:00:00+00:00");

        let components = documents.sbom()["components"].as_array().unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[1]["type"], "application");

        let matches = documents.vulnerabilities()["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["vulnerability"]["id"], "CVE-2024-1234");
        assert_eq!(
            documents.vulnerabilities()["descriptor"]["timestamp"],
            "2025-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_demo_documents_fresh_timestamp() {
        let documents = DemoDataset::documents();
        let timestamp = documents.vulnerabilities()["descriptor"]["timestamp"]
            .as_str()
            .unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
