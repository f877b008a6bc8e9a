//! Configuration for the extraction scan.
//!
//! `ExtractConfig` centralizes the tokens and policy knobs that drive row
//! classification, so no scanning constants are hardcoded in the extractor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tokens and policy knobs for one extraction run.
///
/// All token matching is case-insensitive. The marker and key tokens match
/// by substring; null sentinels match a cell exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Token located (as a substring) in a cell to find the parametric
    /// boundary column.
    #[serde(alias = "parametric")]
    pub parametric_marker: String,
    /// Token identifying a name row by its first cell.
    #[serde(alias = "key")]
    pub key_marker: String,
    /// Ordered limit labels; each is claimed by at most one row per file.
    #[serde(alias = "get_columns")]
    pub limit_labels: Vec<String>,
    /// Cell values treated as "no value" instead of being parsed.
    #[serde(alias = "null_values")]
    pub null_sentinels: Vec<String>,
    /// When true the boundary column itself is an eligible data column;
    /// when false eligibility starts one column after it.
    pub begin_from_parametric: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            parametric_marker: "parametric".to_string(),
            key_marker: "key".to_string(),
            limit_labels: vec!["min".to_string(), "max".to_string(), "avg".to_string()],
            null_sentinels: vec![
                "NA".to_string(),
                "N/A".to_string(),
                "NULL".to_string(),
                "-".to_string(),
                String::new(),
            ],
            begin_from_parametric: false,
        }
    }
}

impl ExtractConfig {
    /// Generic layout: `min`/`max`/`avg` value rows, data columns starting
    /// after the boundary column.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Fixed limit-report layout: `upper limit`/`lower limit` value rows,
    /// the boundary column itself carrying data.
    pub fn limit_report() -> Self {
        Self {
            limit_labels: vec!["upper limit".to_string(), "lower limit".to_string()],
            null_sentinels: vec!["NA".to_string(), String::new()],
            begin_from_parametric: true,
            ..Default::default()
        }
    }

    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder {
            inner: ExtractConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parametric_marker.is_empty() {
            return Err(ConfigError::EmptyToken {
                field: "parametric_marker",
            });
        }
        if self.key_marker.is_empty() {
            return Err(ConfigError::EmptyToken {
                field: "key_marker",
            });
        }
        if self.limit_labels.is_empty() {
            return Err(ConfigError::NoLimitLabels);
        }
        if self.limit_labels.iter().any(|label| label.is_empty()) {
            return Err(ConfigError::EmptyToken {
                field: "limit_labels",
            });
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.limit_labels.len());
        for label in &self.limit_labels {
            let lower = label.to_lowercase();
            if seen.contains(&lower) {
                return Err(ConfigError::DuplicateLimitLabel {
                    label: label.clone(),
                });
            }
            seen.push(lower);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyToken { field: &'static str },
    #[error("limit_labels must contain at least one label")]
    NoLimitLabels,
    #[error("limit_labels contains duplicate label '{label}' (labels match case-insensitively)")]
    DuplicateLimitLabel { label: String },
}

#[derive(Debug, Clone)]
pub struct ExtractConfigBuilder {
    inner: ExtractConfig,
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractConfigBuilder {
    pub fn new() -> Self {
        ExtractConfig::builder()
    }

    pub fn parametric_marker(mut self, value: impl Into<String>) -> Self {
        self.inner.parametric_marker = value.into();
        self
    }

    pub fn key_marker(mut self, value: impl Into<String>) -> Self {
        self.inner.key_marker = value.into();
        self
    }

    pub fn limit_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.limit_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn null_sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.null_sentinels = sentinels.into_iter().map(Into::into).collect();
        self
    }

    pub fn begin_from_parametric(mut self, value: bool) -> Self {
        self.inner.begin_from_parametric = value;
        self
    }

    pub fn build(self) -> Result<ExtractConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
