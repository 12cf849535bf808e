//! Path tree container and statistics.

use std::time::Duration;

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::error::BuildWarning;
use crate::node::{EntryKind, NodeId, TreeNode};
use crate::units::SizeUnits;

/// Summary statistics for a built tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Records offered to the builder.
    pub records_seen: u64,
    /// Records skipped because their path was malformed.
    pub records_skipped: u64,
    /// Number of file nodes.
    pub total_files: u64,
    /// Number of folder nodes, synthetic ones included.
    pub total_folders: u64,
    /// Folder nodes that no record named directly.
    pub synthetic_folders: u64,
    /// Deepest node depth (top level is 0).
    pub max_depth: u32,
    /// Largest file (full path, size).
    pub largest_file: Option<(String, u64)>,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount node totals from a finished arena.
    ///
    /// Record counters are left untouched; they are tracked during ingestion.
    pub fn recount(&mut self, tree: &PathTree) {
        self.total_files = 0;
        self.total_folders = 0;
        self.synthetic_folders = 0;
        self.max_depth = 0;
        self.largest_file = None;

        for node in &tree.nodes {
            self.max_depth = self.max_depth.max(node.depth);
            match node.kind {
                EntryKind::File => {
                    self.total_files += 1;
                    if self
                        .largest_file
                        .as_ref()
                        .is_none_or(|(_, s)| node.own_size > *s)
                    {
                        self.largest_file = Some((tree.full_path(node.id), node.own_size));
                    }
                }
                EntryKind::Folder => {
                    self.total_folders += 1;
                    if !node.explicit {
                        self.synthetic_folders += 1;
                    }
                }
            }
        }
    }
}

/// A filesystem hierarchy reconstructed from path strings.
///
/// Nodes live in an arena; a child is always allocated after its parent, so
/// walking the arena backwards visits every child before its parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathTree {
    /// Node arena, indexed by [`NodeId`].
    pub nodes: Vec<TreeNode>,

    /// Top-level nodes keyed by segment name, in insertion order.
    pub roots: IndexMap<CompactString, NodeId>,

    /// Configuration the tree was built with.
    pub config: BuildConfig,

    /// Summary statistics.
    pub stats: TreeStats,

    /// Non-fatal problems encountered while building.
    pub warnings: Vec<BuildWarning>,

    /// Grand total, valid once `propagated` is set.
    pub total: SizeUnits,

    /// Whether cumulative sizes have been computed.
    pub propagated: bool,

    /// Time spent building.
    pub build_duration: Duration,
}

impl PathTree {
    /// Create an empty tree.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// Get a node by id, mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the top-level nodes in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.roots.values().filter_map(|id| self.node(*id))
    }

    /// Iterate over the direct children of a node in insertion order.
    pub fn children<'a>(&'a self, node: &'a TreeNode) -> impl Iterator<Item = &'a TreeNode> + 'a {
        node.children.values().filter_map(|id| self.node(*id))
    }

    /// Child map of `parent`, or the top-level map when `parent` is `None`.
    pub fn child_map(&self, parent: Option<NodeId>) -> Option<&IndexMap<CompactString, NodeId>> {
        match parent {
            Some(id) => self.node(id).map(|n| &n.children),
            None => Some(&self.roots),
        }
    }

    /// Find the node at the end of a sequence of segments.
    pub fn find<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TreeNode> {
        let mut level = &self.roots;
        let mut found = None;
        for segment in segments {
            let node = self.node(*level.get(segment.as_ref())?)?;
            level = &node.children;
            found = Some(node);
        }
        found
    }

    /// Add a node under `parent` (or at the top level) and return its id.
    ///
    /// The caller guarantees that `name` is not already present at that level.
    pub fn push_node(&mut self, parent: Option<NodeId>, mut node: TreeNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        node.id = id;
        node.parent = parent;
        let name = node.name.clone();
        self.nodes.push(node);

        match parent.and_then(|p| self.nodes.get_mut(p.index())) {
            Some(parent_node) => {
                parent_node.children.insert(name, id);
            }
            None => {
                self.roots.insert(name, id);
            }
        }
        id
    }

    /// Segments from the top level down to `id`, inclusive.
    pub fn segments(&self, id: NodeId) -> Vec<&str> {
        let mut segments = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            segments.push(node.name.as_str());
            current = node.parent.and_then(|p| self.node(p));
        }
        segments.reverse();
        segments
    }

    /// Full path of a node joined with the configured separator.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut separator = [0u8; 4];
        let separator = self.config.separator.encode_utf8(&mut separator);
        self.segments(id).join(separator)
    }

    /// Grand total in bytes (0 before propagation).
    pub fn total_size(&self) -> u64 {
        self.total.bytes
    }

    /// Get the total number of files.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Get the total number of folders.
    pub fn total_folders(&self) -> u64 {
        self.stats.total_folders
    }

    /// Check if there were any warnings during building.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
