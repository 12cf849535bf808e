//! Binary size units.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub const BYTES_PER_KB: f64 = 1024.0;
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A byte count expressed in all four report units at once.
///
/// KB, MB and GB are binary units (1024-based) and are always derived from
/// `bytes`, so the four values can never drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeUnits {
    pub bytes: u64,
    pub kb: f64,
    pub mb: f64,
    pub gb: f64,
}

impl SizeUnits {
    /// Convert a byte count into all units.
    pub fn from_bytes(bytes: u64) -> Self {
        let b = bytes as f64;
        Self {
            bytes,
            kb: b / BYTES_PER_KB,
            mb: b / BYTES_PER_MB,
            gb: b / BYTES_PER_GB,
        }
    }

    /// Value in the given unit.
    pub fn get(&self, unit: DisplayUnit) -> f64 {
        match unit {
            DisplayUnit::Bytes => self.bytes as f64,
            DisplayUnit::Kb => self.kb,
            DisplayUnit::Mb => self.mb,
            DisplayUnit::Gb => self.gb,
        }
    }
}

impl From<u64> for SizeUnits {
    fn from(bytes: u64) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Unit shown by default in rendered reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    #[strum(to_string = "bytes")]
    Bytes,
    #[strum(to_string = "kb")]
    Kb,
    #[strum(to_string = "mb")]
    Mb,
    #[strum(to_string = "gb")]
    Gb,
}

impl DisplayUnit {
    /// Suffix printed after a value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
        }
    }

    /// CSS class carried by the span holding a value in this unit.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Bytes => "size-bytes",
            Self::Kb => "size-kb",
            Self::Mb => "size-mb",
            Self::Gb => "size-gb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_one_mebibyte() {
        let units = SizeUnits::from_bytes(1_048_576);
        assert_eq!(units.kb, 1024.0);
        assert_eq!(units.mb, 1.0);
        assert_eq!(units.gb, 1.0 / 1024.0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(SizeUnits::from_bytes(0), SizeUnits::default());
    }

    #[test]
    fn test_display_unit_parse() {
        assert_eq!(DisplayUnit::from_str("MB").unwrap(), DisplayUnit::Mb);
        assert_eq!(DisplayUnit::from_str("bytes").unwrap(), DisplayUnit::Bytes);
        assert!(DisplayUnit::from_str("tb").is_err());
        assert_eq!(DisplayUnit::iter().count(), 4);
    }
}
