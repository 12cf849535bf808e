//! Inventory statistics for dirtally.
//!
//! Computed from file entries only:
//!
//! - **Extensions** - file count and total size per extension
//! - **Dates** - file counts by creation year, month and day
//! - **Size buckets** - counts and bytes per configurable MB range
//! - **Top files** - the largest files
//!
//! ```rust
//! use dirtally_analyze::{FileEntry, StatsAnalyzer};
//!
//! let files = vec![
//!     FileEntry::new("C:\\docs\\a.pdf", 2048, '\\'),
//!     FileEntry::new("C:\\docs\\b.pdf", 1024, '\\'),
//! ];
//! let report = StatsAnalyzer::new().analyze(&files);
//!
//! assert_eq!(report.total_files, 2);
//! assert_eq!(report.extensions.by_count[0].extension, "pdf");
//! assert_eq!(report.top_files[0].name, "a.pdf");
//! ```

mod config;
mod dates;
mod entry;
mod extensions;
mod stats;

pub use config::{StatsConfig, StatsConfigBuilder};
pub use dates::{DateCount, DateReport};
pub use entry::FileEntry;
pub use extensions::{ExtensionReport, ExtensionStats};
pub use stats::{SizeBucketStats, StatsAnalyzer, StatsReport, TopFile};

// Re-export core types
pub use dirtally_core::{Inventory, InventoryEntry, SizeUnits};
