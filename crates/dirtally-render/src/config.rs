//! Render configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use dirtally_core::DisplayUnit;

/// Order in which a folder's children are emitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ChildOrder {
    /// Order in which the paths first appeared in the input.
    #[default]
    Insertion,
    /// Segment name, A-Z.
    Name,
    /// Cumulative size, largest first.
    SizeDescending,
}

/// Configuration for tree rendering.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct RenderConfig {
    /// Unit visible before the reader picks another.
    #[builder(default)]
    #[serde(default)]
    pub default_unit: DisplayUnit,

    /// Render folders without children with a "0 items" marker instead of
    /// leaving them out.
    #[builder(default = "false")]
    #[serde(default)]
    pub show_empty_folders: bool,

    /// Child ordering.
    #[builder(default)]
    #[serde(default)]
    pub order: ChildOrder,

    /// Decimal places for KB, MB and GB values.
    #[builder(default = "6")]
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_decimals() -> usize {
    6
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_unit: DisplayUnit::default(),
            show_empty_folders: false,
            order: ChildOrder::default(),
            decimals: default_decimals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.default_unit, DisplayUnit::Bytes);
        assert!(!config.show_empty_folders);
        assert_eq!(config.order, ChildOrder::Insertion);
        assert_eq!(config.decimals, 6);
        assert_eq!(RenderConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_child_order_parse() {
        assert_eq!(
            ChildOrder::from_str("size-descending").unwrap(),
            ChildOrder::SizeDescending
        );
        assert_eq!(ChildOrder::Name.to_string(), "name");
    }
}
