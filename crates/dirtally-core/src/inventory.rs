//! Flat path inventories as produced by an upstream collector.

use std::path::Path;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::node::{EntryKind, Record};

/// A collected inventory: report header details plus one entry per path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Header fields shown at the top of reports, in document order.
    #[serde(default)]
    pub details: IndexMap<String, String>,

    /// Files and folders.
    #[serde(default)]
    pub entries: Vec<InventoryEntry>,
}

/// One file or folder row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub created: Option<NaiveDateTime>,
    /// Extension without the leading dot, when the collector recorded one.
    #[serde(default)]
    pub extension: Option<String>,
}

impl Inventory {
    /// Parse an inventory from JSON text.
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an inventory file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| InventoryError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Tree-builder records, in entry order.
    pub fn records(&self) -> Vec<Record> {
        self.entries.iter().map(InventoryEntry::record).collect()
    }

    /// Iterate over file entries only.
    pub fn files(&self) -> impl Iterator<Item = &InventoryEntry> + '_ {
        self.entries.iter().filter(|e| e.kind.is_file())
    }
}

impl InventoryEntry {
    /// Create a file entry with no timestamps.
    pub fn file(path: impl Into<String>, size: i64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size: Some(size),
            created: None,
            extension: None,
        }
    }

    /// Set the creation time.
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// The record this entry contributes to the tree.
    pub fn record(&self) -> Record {
        Record::new(self.path.clone(), self.kind, self.size)
    }

    /// Size with missing and negative values taken as zero.
    pub fn size_bytes(&self) -> u64 {
        self.size.map_or(0, |s| u64::try_from(s).unwrap_or(0))
    }

    /// Last non-empty segment of the path.
    pub fn name(&self, separator: char) -> &str {
        self.path
            .split(separator)
            .rfind(|s| !s.is_empty())
            .unwrap_or(self.path.as_str())
    }

    /// Recorded extension, or the text after the last dot of the name.
    ///
    /// Returns an empty string for names without an extension.
    pub fn extension(&self, separator: char) -> String {
        if let Some(ext) = &self.extension {
            return ext.trim_start_matches('.').to_lowercase();
        }
        match self.name(separator).rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_and_extension() {
        let entry = InventoryEntry::file("C:\\data\\Report.PDF", 10);
        assert_eq!(entry.name('\\'), "Report.PDF");
        assert_eq!(entry.extension('\\'), "pdf");
    }

    #[test]
    fn test_entry_extension_missing() {
        assert_eq!(InventoryEntry::file("C:\\Makefile", 1).extension('\\'), "");
        assert_eq!(InventoryEntry::file("C:\\.bashrc", 1).extension('\\'), "");
    }

    #[test]
    fn test_recorded_extension_wins() {
        let entry = InventoryEntry::file("C:\\a.tar.gz", 1).with_extension(".TGZ");
        assert_eq!(entry.extension('\\'), "tgz");
    }

    #[test]
    fn test_unread_collector_fields_ignored() {
        let inventory = Inventory::from_json(
            r#"{"entries": [{"path": "C:\\a.txt", "type": "File", "size": 3,
                "modified": "2020-01-01T00:00:00", "owner": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(inventory.entries[0].size_bytes(), 3);
        assert!(inventory.entries[0].created.is_none());
    }

    #[test]
    fn test_size_bytes_clamps() {
        assert_eq!(InventoryEntry::file("a", -5).size_bytes(), 0);
        assert_eq!(InventoryEntry::file("a", 5).size_bytes(), 5);
    }
}
