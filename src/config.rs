//! Configuration file support for depcheck-comment.
//!
//! Provides YAML-based configuration through `depcheck-comment.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputMode;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depcheck-comment.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub report_path: Option<String>,
    pub mode: Option<String>,
    pub workspace_prefix: Option<String>,
    pub title: Option<String>,
    pub fail_on_critical_high: Option<bool>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output mode, already validated by [`load_config_from_path`]
    pub fn output_mode(&self) -> Option<OutputMode> {
        self.mode
            .as_deref()
            .and_then(|m| OutputMode::from_str(m).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null; treat it as "no settings"
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref mode) = config.mode {
        if let Err(e) = OutputMode::from_str(mode) {
            bail!("Invalid config: mode: {}", e);
        }
    }

    if let Some(ref title) = config.title {
        if title.trim().is_empty() {
            bail!(
                "Invalid config: title must not be empty.\n\n\
                 💡 Hint: Remove the 'title' field to use the default heading."
            );
        }
    }

    if let Some(ref report_path) = config.report_path {
        if report_path.trim().is_empty() {
            bail!("Invalid config: report_path must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
report_path: build/reports/dependency-check-report.json
mode: github-output
workspace_prefix: /home/runner/work/app/
title: End of Life and Outdated JS Scan Results
fail_on_critical_high: true
quiet: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.report_path.as_deref(),
            Some("build/reports/dependency-check-report.json")
        );
        assert_eq!(config.output_mode(), Some(OutputMode::GithubOutput));
        assert_eq!(
            config.workspace_prefix.as_deref(),
            Some("/home/runner/work/app/")
        );
        assert_eq!(
            config.title.as_deref(),
            Some("End of Life and Outdated JS Scan Results")
        );
        assert_eq!(config.fail_on_critical_high, Some(true));
        assert_eq!(config.quiet, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "mode: stdout\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().output_mode(), Some(OutputMode::Stdout));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_empty_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("empty.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.mode.is_none());
        assert!(config.title.is_none());
    }

    #[test]
    fn test_invalid_mode_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "mode: slack\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid mode"));
    }

    #[test]
    fn test_blank_title_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "title: \"   \"\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("title must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
mode: stdout
severity_threshold: HIGH
post_comment: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("severity_threshold"));
        assert!(config.unknown_fields.contains_key("post_comment"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.report_path.is_none());
        assert!(config.mode.is_none());
        assert!(config.output_mode().is_none());
        assert!(config.workspace_prefix.is_none());
        assert!(config.title.is_none());
        assert!(config.fail_on_critical_high.is_none());
        assert!(config.quiet.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
