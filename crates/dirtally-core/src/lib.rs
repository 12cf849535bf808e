//! Core types for dirtally.
//!
//! This crate provides the fundamental data structures shared by the
//! dirtally crates: input records, the arena-backed path tree, size units,
//! build configuration, warnings, and inventory loading.

mod config;
mod error;
mod inventory;
mod node;
mod tree;
mod units;

pub use config::{BuildConfig, BuildConfigBuilder};
pub use error::{BuildWarning, InventoryError, SegmentError, WarningKind};
pub use inventory::{Inventory, InventoryEntry};
pub use node::{EntryKind, NodeId, Record, TreeNode};
pub use tree::{PathTree, TreeStats};
pub use units::{DisplayUnit, SizeUnits, BYTES_PER_GB, BYTES_PER_KB, BYTES_PER_MB};
