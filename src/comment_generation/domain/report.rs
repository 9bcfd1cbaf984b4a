//! Shape of an OWASP dependency-check JSON report.
//!
//! Only the fields the comment needs are modelled. Every field is optional and
//! tolerant of the wrong JSON type: a value that does not fit is treated as
//! absent instead of failing the whole report.

use serde::Deserialize;

/// Root of a dependency-check report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyCheckReport {
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub dependencies: Vec<Dependency>,
}

/// A scanned file (jar, package.json, lockfile entry, ...) and its vulnerabilities
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(default, deserialize_with = "lenient::text")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// A single vulnerability entry attached to a dependency
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Vulnerability {
    /// CVE identifier (e.g. "CVE-2021-44228")
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub cvssv3: Option<CvssV3>,
}

/// CVSS v3 block of a vulnerability
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssV3 {
    #[serde(default, deserialize_with = "lenient::text")]
    pub base_severity: Option<String>,
}

impl DependencyCheckReport {
    /// Total number of vulnerability entries across all dependencies
    pub fn vulnerability_count(&self) -> usize {
        self.dependencies
            .iter()
            .map(|d| d.vulnerabilities.len())
            .sum()
    }
}

impl Vulnerability {
    pub fn base_severity(&self) -> Option<&str> {
        self.cvssv3
            .as_ref()
            .and_then(|c| c.base_severity.as_deref())
    }
}

mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    /// Non-empty strings only; anything else is absent.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) if !s.is_empty() => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    /// An array of objects. A non-array is empty; a non-object element
    /// falls back to `T::default()` so positions are kept.
    pub fn sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items.into_iter().map(element).collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// A nested object; anything that is not an object is absent.
    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value).ok())
    }

    fn element<T: DeserializeOwned + Default>(value: Value) -> T {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DependencyCheckReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_report_shape() {
        let report = parse(
            r#"{
                "reportSchema": "1.1",
                "dependencies": [{
                    "isVirtual": false,
                    "fileName": "log4j-core-2.14.1.jar",
                    "filePath": "/github/workspace/lib/log4j-core-2.14.1.jar",
                    "vulnerabilities": [{
                        "source": "NVD",
                        "name": "CVE-2021-44228",
                        "cvssv3": { "baseScore": 10.0, "baseSeverity": "CRITICAL" }
                    }]
                }]
            }"#,
        );

        assert_eq!(report.dependencies.len(), 1);
        let dep = &report.dependencies[0];
        assert_eq!(dep.file_name.as_deref(), Some("log4j-core-2.14.1.jar"));
        assert_eq!(
            dep.file_path.as_deref(),
            Some("/github/workspace/lib/log4j-core-2.14.1.jar")
        );
        assert_eq!(dep.vulnerabilities[0].name.as_deref(), Some("CVE-2021-44228"));
        assert_eq!(dep.vulnerabilities[0].base_severity(), Some("CRITICAL"));
    }

    #[test]
    fn test_missing_dependencies_is_empty() {
        let report = parse(r#"{"scanInfo": {}}"#);
        assert!(report.dependencies.is_empty());
        assert_eq!(report.vulnerability_count(), 0);
    }

    #[test]
    fn test_non_array_dependencies_is_empty() {
        let report = parse(r#"{"dependencies": "none"}"#);
        assert!(report.dependencies.is_empty());

        let report = parse(r#"{"dependencies": null}"#);
        assert!(report.dependencies.is_empty());
    }

    #[test]
    fn test_non_array_vulnerabilities_is_empty() {
        let report = parse(r#"{"dependencies": [{"fileName": "a.jar", "vulnerabilities": {}}]}"#);
        assert_eq!(report.dependencies.len(), 1);
        assert!(report.dependencies[0].vulnerabilities.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_are_absent() {
        let report = parse(
            r#"{"dependencies": [{
                "filePath": 42,
                "fileName": "",
                "vulnerabilities": [{"name": ["x"], "cvssv3": "HIGH"}]
            }]}"#,
        );
        let dep = &report.dependencies[0];
        assert!(dep.file_path.is_none());
        assert!(dep.file_name.is_none());
        assert!(dep.vulnerabilities[0].name.is_none());
        assert!(dep.vulnerabilities[0].cvssv3.is_none());
        assert!(dep.vulnerabilities[0].base_severity().is_none());
    }

    #[test]
    fn test_non_object_elements_keep_positions() {
        let report = parse(
            r#"{"dependencies": [
                7,
                {"vulnerabilities": ["oops", {"name": "CVE-2"}]}
            ]}"#,
        );
        assert_eq!(report.dependencies.len(), 2);
        assert!(report.dependencies[0].vulnerabilities.is_empty());
        assert_eq!(report.dependencies[1].vulnerabilities.len(), 2);
        assert_eq!(report.dependencies[1].vulnerabilities[0], Vulnerability::default());
        assert_eq!(report.vulnerability_count(), 2);
    }

    #[test]
    fn test_cvssv3_without_base_severity() {
        let report = parse(
            r#"{"dependencies": [{"vulnerabilities": [{"name": "CVE-1", "cvssv3": {"baseScore": 5.0}}]}]}"#,
        );
        let vuln = &report.dependencies[0].vulnerabilities[0];
        assert!(vuln.cvssv3.is_some());
        assert!(vuln.base_severity().is_none());
    }
}
