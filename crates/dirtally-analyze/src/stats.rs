//! Inventory statistics.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use dirtally_core::{BYTES_PER_MB, Inventory, SizeUnits};

use crate::config::StatsConfig;
use crate::dates::DateReport;
use crate::entry::FileEntry;
use crate::extensions::ExtensionReport;

/// Files falling into one size bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBucketStats {
    pub label: String,
    /// Inclusive upper bound in MB; `None` for the open-ended last bucket.
    pub max_mb: Option<f64>,
    pub file_count: u64,
    pub total_size: SizeUnits,
}

/// One of the largest files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFile {
    pub name: String,
    pub path: String,
    pub size: SizeUnits,
}

/// Everything computed for an inventory's files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_files: u64,
    pub total_size: SizeUnits,
    pub extensions: ExtensionReport,
    pub dates: DateReport,
    pub size_buckets: Vec<SizeBucketStats>,
    /// Largest first.
    pub top_files: Vec<TopFile>,
}

impl StatsReport {
    /// Bucket holding the most files.
    pub fn largest_bucket(&self) -> Option<&SizeBucketStats> {
        self.size_buckets.iter().max_by_key(|b| b.file_count)
    }

    /// The largest file, if any.
    pub fn largest_file(&self) -> Option<&TopFile> {
        self.top_files.first()
    }
}

/// Computes [`StatsReport`]s.
pub struct StatsAnalyzer {
    config: StatsConfig,
}

impl StatsAnalyzer {
    /// Create a new analyzer with default config.
    pub fn new() -> Self {
        Self {
            config: StatsConfig::default(),
        }
    }

    /// Create a new analyzer with custom config.
    pub fn with_config(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Analyze the file entries of an inventory. Folder entries are ignored.
    pub fn analyze_inventory(&self, inventory: &Inventory) -> StatsReport {
        let files: Vec<FileEntry> = inventory
            .files()
            .map(|e| FileEntry::from_inventory(e, self.config.separator))
            .collect();
        self.analyze(&files)
    }

    /// Analyze a set of files.
    pub fn analyze(&self, files: &[FileEntry]) -> StatsReport {
        let start = Instant::now();

        let mut buckets: Vec<BucketCollector> = self
            .config
            .bucket_labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| BucketCollector::new(label, self.config.size_thresholds_mb.get(i).copied()))
            .collect();
        let mut top = TopCollector::new(self.config.top_files);
        let mut total_bytes: u64 = 0;

        for file in files {
            total_bytes = total_bytes.saturating_add(file.size);
            top.add(file);

            let mb = file.size as f64 / BYTES_PER_MB;
            // Last collector is open-ended and always matches.
            if let Some(bucket) = buckets
                .iter_mut()
                .find(|b| b.max_mb.is_none_or(|max| mb <= max))
            {
                bucket.add(file.size);
            }
        }

        let report = StatsReport {
            total_files: files.len() as u64,
            total_size: SizeUnits::from_bytes(total_bytes),
            extensions: ExtensionReport::collect(files, &self.config.no_extension_label),
            dates: DateReport::collect(files),
            size_buckets: buckets.into_iter().map(BucketCollector::finish).collect(),
            top_files: top.finish(),
        };

        tracing::debug!(
            files = report.total_files,
            extensions = report.extensions.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Computed inventory statistics"
        );
        report
    }
}

impl Default for StatsAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

struct BucketCollector {
    label: String,
    max_mb: Option<f64>,
    file_count: u64,
    total_bytes: u64,
}

impl BucketCollector {
    fn new(label: String, max_mb: Option<f64>) -> Self {
        Self {
            label,
            max_mb,
            file_count: 0,
            total_bytes: 0,
        }
    }

    fn add(&mut self, size: u64) {
        self.file_count += 1;
        self.total_bytes = self.total_bytes.saturating_add(size);
    }

    fn finish(self) -> SizeBucketStats {
        SizeBucketStats {
            label: self.label,
            max_mb: self.max_mb,
            file_count: self.file_count,
            total_size: SizeUnits::from_bytes(self.total_bytes),
        }
    }
}

/// Keeps the `limit` largest files seen so far, largest first.
struct TopCollector<'a> {
    files: Vec<&'a FileEntry>,
    limit: usize,
}

impl<'a> TopCollector<'a> {
    fn new(limit: usize) -> Self {
        Self {
            files: Vec::with_capacity(limit),
            limit,
        }
    }

    fn add(&mut self, file: &'a FileEntry) {
        if self.limit == 0 {
            return;
        }
        if self.files.len() < self.limit {
            self.files.push(file);
        } else if let Some(smallest) = self.files.last() {
            if file.size <= smallest.size {
                return;
            }
            self.files.pop();
            self.files.push(file);
        }
        // Stable sort keeps the first-seen file ahead on equal sizes.
        self.files.sort_by(|a, b| b.size.cmp(&a.size));
    }

    fn finish(self) -> Vec<TopFile> {
        self.files
            .into_iter()
            .map(|f| TopFile {
                name: f.name.clone(),
                path: f.path.clone(),
                size: SizeUnits::from_bytes(f.size),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_size_bucket_bounds() {
        let files = vec![
            FileEntry::new("C:\\a", MB, '\\'),
            FileEntry::new("C:\\b", MB + 1, '\\'),
            FileEntry::new("C:\\c", 10 * MB, '\\'),
            FileEntry::new("C:\\d", 10 * MB + 1, '\\'),
            FileEntry::new("C:\\e", 0, '\\'),
        ];
        let report = StatsAnalyzer::new().analyze(&files);

        let counts: Vec<u64> = report.size_buckets.iter().map(|b| b.file_count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
        assert_eq!(report.size_buckets[2].max_mb, None);
        assert_eq!(report.size_buckets[2].total_size.bytes, 10 * MB + 1);
    }

    #[test]
    fn test_top_collector_keeps_largest() {
        let files: Vec<FileEntry> = (1..=20)
            .map(|i| FileEntry::new(format!("C:\\f{i}"), i, '\\'))
            .collect();
        let mut top = TopCollector::new(3);
        for file in &files {
            top.add(file);
        }
        let sizes: Vec<u64> = top.finish().iter().map(|f| f.size.bytes).collect();
        assert_eq!(sizes, vec![20, 19, 18]);
    }

    #[test]
    fn test_top_collector_zero_limit() {
        let file = FileEntry::new("C:\\f", 5, '\\');
        let mut top = TopCollector::new(0);
        top.add(&file);
        assert!(top.finish().is_empty());
    }
}
