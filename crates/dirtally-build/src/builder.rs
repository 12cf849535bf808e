//! Reconstructing a tree from flat path records.

use std::borrow::Borrow;
use std::time::Instant;

use dirtally_core::{
    BuildConfig, BuildWarning, EntryKind, NodeId, PathTree, Record, TreeNode, WarningKind,
};

use crate::segment::PathSegmenter;

/// Builds a [`PathTree`] from records, one path at a time.
pub struct TreeBuilder {
    config: BuildConfig,
    segmenter: PathSegmenter,
}

impl TreeBuilder {
    /// Create a builder for backslash-delimited paths.
    pub fn new() -> Self {
        Self::with_config(BuildConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        let segmenter = PathSegmenter::new(&config);
        Self { config, segmenter }
    }

    /// Configuration in use.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a tree from all records. Sizes are not propagated yet.
    pub fn build<I>(&self, records: I) -> PathTree
    where
        I: IntoIterator,
        I::Item: Borrow<Record>,
    {
        let start = Instant::now();
        let mut tree = PathTree::new(self.config.clone());

        for record in records {
            self.insert(&mut tree, record.borrow());
        }

        let mut stats = std::mem::take(&mut tree.stats);
        stats.recount(&tree);
        tree.stats = stats;
        tree.build_duration = start.elapsed();

        tracing::debug!(
            records = tree.stats.records_seen,
            skipped = tree.stats.records_skipped,
            nodes = tree.len(),
            synthetic_folders = tree.stats.synthetic_folders,
            warnings = tree.warnings.len(),
            "Built path tree"
        );

        tree
    }

    /// Add one record to an existing tree.
    ///
    /// Malformed paths are skipped with a warning. The terminal segment takes
    /// the record's type and size, replacing whatever an earlier record set;
    /// ancestors are only created, never overwritten.
    ///
    /// Any earlier propagation is invalidated; run [`propagate`] again
    /// before reading cumulative sizes.
    ///
    /// [`propagate`]: crate::propagate
    pub fn insert(&self, tree: &mut PathTree, record: &Record) {
        tree.propagated = false;
        tree.stats.records_seen += 1;

        let segments = match self.segmenter.segment(&record.path) {
            Ok(segments) => segments,
            Err(err) => {
                tree.stats.records_skipped += 1;
                push_warning(tree, BuildWarning::malformed_path(&record.path, &err));
                return;
            }
        };

        let size = ingest_size(tree, record);
        let last = segments.len() - 1;
        let mut parent: Option<NodeId> = None;

        for (depth, segment) in segments.into_iter().enumerate() {
            let existing = tree
                .child_map(parent)
                .and_then(|children| children.get(segment).copied());
            let terminal = depth == last;

            let id = match existing {
                Some(id) if terminal => {
                    overwrite_terminal(tree, id, record, size);
                    id
                }
                Some(id) => {
                    ensure_folder(tree, id, record);
                    id
                }
                None => {
                    let id = NodeId::new(tree.len());
                    let node = if terminal {
                        TreeNode::new_explicit(id, segment, record.kind, size, parent, depth as u32)
                    } else {
                        TreeNode::new_synthetic(id, segment, parent, depth as u32)
                    };
                    tree.push_node(parent, node)
                }
            };
            parent = Some(id);
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw record size to a non-negative byte count.
fn ingest_size(tree: &mut PathTree, record: &Record) -> u64 {
    match record.size_bytes {
        Some(size) if size >= 0 => size as u64,
        Some(size) => {
            push_warning(tree, BuildWarning::negative_size(&record.path, size));
            0
        }
        None => {
            push_warning(tree, BuildWarning::missing_size(&record.path));
            0
        }
    }
}

/// Apply a record to a node that already exists at its terminal position.
fn overwrite_terminal(tree: &mut PathTree, id: NodeId, record: &Record, size: u64) {
    let Some(node) = tree.node_mut(id) else {
        return;
    };

    let previous = node.kind;
    // A node with children stays a folder whatever the record says.
    let resolved = if node.has_children() {
        EntryKind::Folder
    } else {
        record.kind
    };
    let conflict = (node.explicit && previous != record.kind) || resolved != record.kind;

    node.kind = resolved;
    node.own_size = size;
    node.explicit = true;

    if conflict {
        push_warning(
            tree,
            BuildWarning::type_conflict(&record.path, previous, resolved),
        );
    }
}

/// Make sure a node traversed as an ancestor is a folder.
fn ensure_folder(tree: &mut PathTree, id: NodeId, record: &Record) {
    let Some(node) = tree.node_mut(id) else {
        return;
    };
    if node.is_folder() {
        return;
    }

    node.kind = EntryKind::Folder;
    let path = tree.full_path(id);
    push_warning(
        tree,
        BuildWarning::new(
            path,
            format!(
                "File used as a folder by {}; promoted to Folder",
                record.path
            ),
            WarningKind::TypeConflict,
        ),
    );
}

fn push_warning(tree: &mut PathTree, warning: BuildWarning) {
    tracing::warn!(kind = ?warning.kind, path = %warning.path, "{}", warning.message);
    tree.warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_records() -> Vec<Record> {
        vec![
            Record::file("X\\f1.txt", 500),
            Record::file("X\\Y\\f2.txt", 1500),
            Record::folder("X", 0),
        ]
    }

    #[test]
    fn test_basic_build() {
        let tree = TreeBuilder::new().build(create_test_records());

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.stats.records_seen, 3);
        assert_eq!(tree.stats.total_files, 2);
        assert_eq!(tree.stats.total_folders, 2);
        assert_eq!(tree.stats.synthetic_folders, 1);
        assert!(!tree.has_warnings());
        assert!(!tree.propagated);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let tree = TreeBuilder::new().build(create_test_records());
        let x = tree.find(&["X"]).unwrap();
        let names: Vec<_> = x.children.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["f1.txt", "Y"]);
    }

    #[test]
    fn test_explicit_folder_after_synthetic() {
        let tree = TreeBuilder::new().build(create_test_records());
        let x = tree.find(&["X"]).unwrap();
        assert!(x.is_folder());
        assert!(x.explicit);
        assert_eq!(x.own_size, 0);

        let y = tree.find(&["X", "Y"]).unwrap();
        assert!(!y.explicit);
    }

    #[test]
    fn test_ancestor_not_overwritten() {
        let records = vec![Record::folder("A", 7), Record::file("A\\b.txt", 3)];
        let tree = TreeBuilder::new().build(&records);

        let a = tree.find(&["A"]).unwrap();
        assert_eq!(a.own_size, 7);
        assert!(a.is_folder());
    }

    #[test]
    fn test_malformed_record_skipped() {
        let records = vec![Record::file("A\\\\b.txt", 3), Record::file("A\\c.txt", 4)];
        let tree = TreeBuilder::new().build(&records);

        assert_eq!(tree.stats.records_skipped, 1);
        assert_eq!(tree.warnings.len(), 1);
        assert_eq!(tree.warnings[0].kind, WarningKind::MalformedPath);
        assert!(tree.find(&["A", "c.txt"]).is_some());
        assert_eq!(tree.find(&["A"]).unwrap().child_count(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let records = vec![Record::file("A\\x", 10), Record::folder("A\\x", 2)];
        let tree = TreeBuilder::new().build(&records);

        let x = tree.find(&["A", "x"]).unwrap();
        assert!(x.is_folder());
        assert_eq!(x.own_size, 2);
        assert_eq!(tree.warnings.len(), 1);
        assert_eq!(tree.warnings[0].kind, WarningKind::TypeConflict);
    }

    #[test]
    fn test_file_promoted_when_used_as_ancestor() {
        let records = vec![Record::file("A\\x", 10), Record::file("A\\x\\y", 5)];
        let tree = TreeBuilder::new().build(&records);

        let x = tree.find(&["A", "x"]).unwrap();
        assert!(x.is_folder());
        assert_eq!(x.own_size, 10);
        assert_eq!(tree.warnings[0].kind, WarningKind::TypeConflict);
        assert_eq!(tree.warnings[0].path, "A\\x");
    }
}
