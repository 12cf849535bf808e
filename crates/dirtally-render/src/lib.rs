//! HTML rendering for dirtally path trees.
//!
//! [`TreeRenderer`] turns a propagated [`PathTree`] into a nested `<ul>`/`<li>`
//! fragment. Every entry carries its size in bytes, KB, MB and GB; one unit is
//! visible and the others are hidden, so a page script can switch units
//! without asking for the tree again. [`ReportDocument`] wraps a fragment in a
//! standalone page with that script.
//!
//! ```rust
//! use dirtally_build::{build_tree, BuildConfig, Record};
//! use dirtally_render::TreeRenderer;
//!
//! let tree = build_tree([Record::file("A\\b.txt", 10)], BuildConfig::default());
//! let html = TreeRenderer::new().render(&tree, "");
//! assert!(html.contains("b.txt"));
//! ```

mod config;
mod document;
mod markup;
mod tree;

pub use config::{ChildOrder, RenderConfig, RenderConfigBuilder};
pub use document::ReportDocument;
pub use markup::{escape_html, folder_id, FolderKey};
pub use tree::TreeRenderer;

// Re-export core types for convenience
pub use dirtally_core::{DisplayUnit, PathTree, SizeUnits};
