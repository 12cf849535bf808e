//! Per-file input to the statistics.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use dirtally_core::InventoryEntry;

/// The attributes statistics are computed from, for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    /// Lowercase, without the dot; empty when the file has none.
    pub extension: String,
    pub created: Option<NaiveDateTime>,
    pub size: u64,
}

impl FileEntry {
    /// Create an entry, deriving name and extension from `path`.
    pub fn new(path: impl Into<String>, size: u64, separator: char) -> Self {
        let entry = InventoryEntry::file(path, i64::try_from(size).unwrap_or(i64::MAX));
        Self::from_inventory(&entry, separator)
    }

    /// Take the file attributes of an inventory entry.
    pub fn from_inventory(entry: &InventoryEntry, separator: char) -> Self {
        Self {
            name: entry.name(separator).to_string(),
            path: entry.path.clone(),
            extension: entry.extension(separator),
            created: entry.created,
            size: entry.size_bytes(),
        }
    }

    /// Set the creation time.
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inventory() {
        let entry = InventoryEntry::file("C:\\docs\\Notes.TXT", -5);
        let file = FileEntry::from_inventory(&entry, '\\');

        assert_eq!(file.name, "Notes.TXT");
        assert_eq!(file.extension, "txt");
        assert_eq!(file.size, 0);
        assert!(file.created.is_none());
    }

    #[test]
    fn test_new_with_slash() {
        let file = FileEntry::new("/srv/archive.tar.gz", 42, '/');
        assert_eq!(file.name, "archive.tar.gz");
        assert_eq!(file.extension, "gz");
        assert_eq!(file.size, 42);
    }
}
