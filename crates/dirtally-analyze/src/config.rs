//! Statistics configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for inventory statistics.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StatsConfig {
    /// Upper bounds (inclusive, in MB) of the size buckets, ascending.
    /// One more bucket collects everything above the last bound.
    #[builder(default = "vec![1.0, 10.0]")]
    #[serde(default = "default_thresholds")]
    pub size_thresholds_mb: Vec<f64>,

    /// Number of largest files to report.
    #[builder(default = "10")]
    #[serde(default = "default_top_files")]
    pub top_files: usize,

    /// Label for files without an extension.
    #[builder(default = "\"NULL\".to_string()")]
    #[serde(default = "default_no_extension_label")]
    pub no_extension_label: String,

    /// Path separator used to derive file names.
    #[builder(default = "'\\\\'")]
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_thresholds() -> Vec<f64> {
    vec![1.0, 10.0]
}

fn default_top_files() -> usize {
    10
}

fn default_no_extension_label() -> String {
    "NULL".to_string()
}

fn default_separator() -> char {
    '\\'
}

impl StatsConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(thresholds) = &self.size_thresholds_mb {
            if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
                return Err("size thresholds must be finite and non-negative".to_string());
            }
            if thresholds.windows(2).any(|w| w[0] >= w[1]) {
                return Err("size thresholds must be strictly ascending".to_string());
            }
        }
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            size_thresholds_mb: default_thresholds(),
            top_files: default_top_files(),
            no_extension_label: default_no_extension_label(),
            separator: default_separator(),
        }
    }
}

impl StatsConfig {
    /// Create a new config builder.
    pub fn builder() -> StatsConfigBuilder {
        StatsConfigBuilder::default()
    }

    /// Bucket labels in threshold order, e.g. `≤ 1 MB`, `> 1 MB and ≤ 10 MB`, `> 10 MB`.
    pub fn bucket_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.size_thresholds_mb.len() + 1);
        let mut lower: Option<f64> = None;
        for &upper in &self.size_thresholds_mb {
            labels.push(match lower {
                None => format!("≤ {upper} MB"),
                Some(lower) => format!("> {lower} MB and ≤ {upper} MB"),
            });
            lower = Some(upper);
        }
        labels.push(match lower {
            None => "All sizes".to_string(),
            Some(lower) => format!("> {lower} MB"),
        });
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StatsConfig::default();
        assert_eq!(config.size_thresholds_mb, vec![1.0, 10.0]);
        assert_eq!(config.top_files, 10);
        assert_eq!(config.no_extension_label, "NULL");
        assert_eq!(config.separator, '\\');
        assert_eq!(StatsConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(
            StatsConfig::default().bucket_labels(),
            vec!["≤ 1 MB", "> 1 MB and ≤ 10 MB", "> 10 MB"]
        );

        let config = StatsConfig::builder()
            .size_thresholds_mb(Vec::<f64>::new())
            .build()
            .unwrap();
        assert_eq!(config.bucket_labels(), vec!["All sizes"]);
    }

    #[test]
    fn test_rejects_unsorted_thresholds() {
        let result = StatsConfig::builder()
            .size_thresholds_mb(vec![10.0, 1.0])
            .build();
        assert!(result.is_err());

        let result = StatsConfig::builder()
            .size_thresholds_mb(vec![-1.0])
            .build();
        assert!(result.is_err());
    }
}
