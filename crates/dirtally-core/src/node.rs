//! Records and tree node types.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::units::SizeUnits;

/// Index of a node within a [`PathTree`](crate::PathTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from an arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Type tag carried by a record and by every tree node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum EntryKind {
    /// A file; its size is its own.
    File,
    /// A folder; its size is the sum of everything beneath it.
    Folder,
}

impl EntryKind {
    /// Check if this is a folder.
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }

    /// Check if this is a file.
    pub fn is_file(self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// One input row: a path, its type and its declared size.
///
/// The size is kept exactly as the upstream table provides it. Missing and
/// negative values are clamped to zero when the record is ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size_bytes: Option<i64>,
}

impl Record {
    /// Create a record with a raw, possibly missing size.
    pub fn new(path: impl Into<String>, kind: EntryKind, size_bytes: Option<i64>) -> Self {
        Self {
            path: path.into(),
            kind,
            size_bytes,
        }
    }

    /// Create a file record.
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self::new(path, EntryKind::File, Some(clamp_to_i64(size)))
    }

    /// Create a folder record.
    pub fn folder(path: impl Into<String>, size: u64) -> Self {
        Self::new(path, EntryKind::Folder, Some(clamp_to_i64(size)))
    }
}

fn clamp_to_i64(size: u64) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}

/// A single segment of the reconstructed tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Position of this node in the arena.
    pub id: NodeId,

    /// Segment name (not full path).
    pub name: CompactString,

    /// File or folder.
    pub kind: EntryKind,

    /// Size declared by the record terminating here; 0 for synthetic folders.
    pub own_size: u64,

    /// Own size plus all descendants, filled in by propagation.
    pub cumulative: SizeUnits,

    /// Whether a record terminated at this node, as opposed to the node
    /// existing only as an ancestor of other paths.
    pub explicit: bool,

    /// Number of segments above this node (0 for top-level nodes).
    pub depth: u32,

    /// Parent node, `None` at the top level.
    pub parent: Option<NodeId>,

    /// Children keyed by segment name, in insertion order.
    pub children: IndexMap<CompactString, NodeId>,
}

impl TreeNode {
    /// Create a folder that exists only because it is an ancestor.
    pub fn new_synthetic(
        id: NodeId,
        name: impl Into<CompactString>,
        parent: Option<NodeId>,
        depth: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: EntryKind::Folder,
            own_size: 0,
            cumulative: SizeUnits::default(),
            explicit: false,
            depth,
            parent,
            children: IndexMap::new(),
        }
    }

    /// Create a node for a record terminating at this segment.
    pub fn new_explicit(
        id: NodeId,
        name: impl Into<CompactString>,
        kind: EntryKind,
        own_size: u64,
        parent: Option<NodeId>,
        depth: u32,
    ) -> Self {
        Self {
            kind,
            own_size,
            explicit: true,
            ..Self::new_synthetic(id, name, parent, depth)
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check whether anything lives beneath this node.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Look up a direct child by segment name.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }
}
