//! Error and warning types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::EntryKind;

/// Reasons a path string cannot be split into segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Nothing left after normalization.
    #[error("Path has no segments")]
    EmptyPath,

    /// Two consecutive separators inside the path.
    #[error("Empty segment at position {index}")]
    EmptySegment { index: usize },
}

/// Errors that can occur while loading an inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid inventory.
    #[error("Invalid inventory: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl InventoryError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Kind of build warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// Path produced an empty segment; the record was skipped.
    MalformedPath,
    /// Size was negative and has been clamped to zero.
    NegativeSize,
    /// Size was absent and has been taken as zero.
    MissingSize,
    /// A record disagreed with the type already recorded for its path.
    TypeConflict,
}

/// Non-fatal problem encountered while building a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWarning {
    /// Raw path of the offending record.
    pub path: String,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl BuildWarning {
    /// Create a new build warning.
    pub fn new(path: impl Into<String>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a malformed path warning.
    pub fn malformed_path(path: impl Into<String>, error: &SegmentError) -> Self {
        Self::new(
            path,
            format!("Malformed path, record skipped: {error}"),
            WarningKind::MalformedPath,
        )
    }

    /// Create a negative size warning.
    pub fn negative_size(path: impl Into<String>, size: i64) -> Self {
        Self::new(
            path,
            format!("Negative size {size} treated as 0"),
            WarningKind::NegativeSize,
        )
    }

    /// Create a missing size warning.
    pub fn missing_size(path: impl Into<String>) -> Self {
        Self::new(path, "Missing size treated as 0", WarningKind::MissingSize)
    }

    /// Create a type conflict warning.
    pub fn type_conflict(path: impl Into<String>, previous: EntryKind, resolved: EntryKind) -> Self {
        Self::new(
            path,
            format!("Type conflict: {previous} resolved as {resolved}"),
            WarningKind::TypeConflict,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_io() {
        let err = InventoryError::io(
            "/test/inventory.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, InventoryError::Io { .. }));
        assert!(err.to_string().contains("/test/inventory.json"));
    }

    #[test]
    fn test_malformed_path_warning() {
        let warning =
            BuildWarning::malformed_path("A\\\\B", &SegmentError::EmptySegment { index: 1 });
        assert_eq!(warning.kind, WarningKind::MalformedPath);
        assert!(warning.message.contains("position 1"));
    }

    #[test]
    fn test_type_conflict_warning() {
        let warning = BuildWarning::type_conflict("X", EntryKind::File, EntryKind::Folder);
        assert_eq!(warning.kind, WarningKind::TypeConflict);
        assert_eq!(warning.message, "Type conflict: File resolved as Folder");
    }
}
