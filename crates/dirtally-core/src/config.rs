//! Tree build configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for turning path strings into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BuildConfig {
    /// Character separating path segments.
    #[builder(default = "'\\\\'")]
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Strip a leading doubled separator (network root marker) before
    /// segmenting, instead of reporting it as an empty segment.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub strip_network_prefix: bool,
}

fn default_separator() -> char {
    '\\'
}

fn default_true() -> bool {
    true
}

impl BuildConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(separator) = self.separator {
            if separator.is_whitespace() || separator.is_alphanumeric() || separator == '.' {
                return Err(format!("Invalid path separator: {separator:?}"));
            }
        }
        Ok(())
    }
}

impl BuildConfig {
    /// Create a new build config builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Config for backslash-delimited paths with network prefix stripping.
    pub fn new() -> Self {
        Self {
            separator: default_separator(),
            strip_network_prefix: true,
        }
    }

    /// Config for paths using another separator, validated like the builder.
    pub fn with_separator(separator: char) -> Result<Self, BuildConfigBuilderError> {
        Self::builder().separator(separator).build()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
