//! Per-extension file counts and sizes.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use dirtally_core::SizeUnits;

use crate::entry::FileEntry;

/// Files sharing one extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionStats {
    pub extension: String,
    pub file_count: u64,
    pub total_size: SizeUnits,
}

/// Extension breakdown in both report orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionReport {
    /// Most files first.
    pub by_count: Vec<ExtensionStats>,
    /// Most bytes first.
    pub by_size: Vec<ExtensionStats>,
}

impl ExtensionReport {
    /// Group files by extension; empty extensions take `no_extension_label`.
    pub fn collect(files: &[FileEntry], no_extension_label: &str) -> Self {
        let mut totals: HashMap<&str, (u64, u64)> = HashMap::new();
        for file in files {
            let key = if file.extension.is_empty() {
                no_extension_label
            } else {
                file.extension.as_str()
            };
            let slot = totals.entry(key).or_default();
            slot.0 += 1;
            slot.1 = slot.1.saturating_add(file.size);
        }

        let stats: Vec<ExtensionStats> = totals
            .into_iter()
            .map(|(extension, (file_count, bytes))| ExtensionStats {
                extension: extension.to_string(),
                file_count,
                total_size: SizeUnits::from_bytes(bytes),
            })
            .collect();

        // Ties fall back to the extension name so output is stable.
        let by_count = stats
            .iter()
            .cloned()
            .sorted_by(|a, b| {
                b.file_count
                    .cmp(&a.file_count)
                    .then_with(|| a.extension.cmp(&b.extension))
            })
            .collect();
        let by_size = stats
            .into_iter()
            .sorted_by(|a, b| {
                b.total_size
                    .bytes
                    .cmp(&a.total_size.bytes)
                    .then_with(|| a.extension.cmp(&b.extension))
            })
            .collect();

        Self { by_count, by_size }
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.by_count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_count.is_empty()
    }

    /// Stats for one extension.
    pub fn get(&self, extension: &str) -> Option<&ExtensionStats> {
        self.by_count.iter().find(|s| s.extension == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<FileEntry> {
        vec![
            FileEntry::new("C:\\a.txt", 10, '\\'),
            FileEntry::new("C:\\b.TXT", 20, '\\'),
            FileEntry::new("C:\\movie.mp4", 5_000, '\\'),
            FileEntry::new("C:\\Makefile", 1, '\\'),
        ]
    }

    #[test]
    fn test_orders() {
        let report = ExtensionReport::collect(&files(), "NULL");

        assert_eq!(report.len(), 3);
        assert_eq!(report.by_count[0].extension, "txt");
        assert_eq!(report.by_count[0].file_count, 2);
        assert_eq!(report.by_size[0].extension, "mp4");
        assert_eq!(report.by_size[0].total_size.bytes, 5_000);
    }

    #[test]
    fn test_missing_extension_label() {
        let report = ExtensionReport::collect(&files(), "NULL");
        let none = report.get("NULL").unwrap();
        assert_eq!(none.file_count, 1);
        assert_eq!(none.total_size.bytes, 1);
    }
}
