//! Tree reconstruction engine for dirtally.
//!
//! This crate turns a flat list of path records into a [`PathTree`] and
//! aggregates sizes bottom-up.
//!
//! # Overview
//!
//! The engine runs in three phases over one tree value:
//!
//! - **Segmenting** splits each raw path on the separator, stripping a
//!   network-root prefix (`\\server`) first
//! - **Building** materializes one node per unique segment; intermediate
//!   segments become folders even when no record names them
//! - **Propagating** computes each node's cumulative size in bytes, KB, MB
//!   and GB, exactly once
//!
//! # Example
//!
//! ```rust
//! use dirtally_build::{propagate, Record, TreeBuilder};
//!
//! let records = vec![
//!     Record::file("X\\f1.txt", 500),
//!     Record::file("X\\Y\\f2.txt", 1500),
//!     Record::folder("X", 0),
//! ];
//!
//! let mut tree = TreeBuilder::new().build(&records);
//! let total = propagate(&mut tree);
//!
//! assert_eq!(total, 2000);
//! assert_eq!(tree.find(&["X", "Y"]).unwrap().cumulative.bytes, 1500);
//! ```

mod builder;
mod propagate;
mod segment;

pub use builder::TreeBuilder;
pub use propagate::propagate;
pub use segment::{segment, PathSegmenter};

// Re-export core types for convenience
pub use dirtally_core::{
    BuildConfig, BuildWarning, EntryKind, NodeId, PathTree, Record, SegmentError, SizeUnits,
    TreeNode, TreeStats, WarningKind,
};

/// Build a tree from records and propagate its sizes.
pub fn build_tree<I>(records: I, config: BuildConfig) -> PathTree
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<Record>,
{
    let mut tree = TreeBuilder::with_config(config).build(records);
    propagate(&mut tree);
    tree
}
