//! Creation-date histograms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::FileEntry;

const YEAR: &str = "%Y";
const YEAR_MONTH: &str = "%Y/%m";
const YEAR_MONTH_DAY: &str = "%Y/%m/%d";

/// One histogram bar: a formatted date and how many files fall on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub file_count: u64,
}

/// File counts grouped by creation date at three granularities.
///
/// Every grouping is in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateReport {
    pub by_year: Vec<DateCount>,
    pub by_month: Vec<DateCount>,
    pub by_day: Vec<DateCount>,
    /// Files without a creation date.
    pub undated: u64,
}

impl DateReport {
    /// Count files per year, month and day of creation.
    pub fn collect(files: &[FileEntry]) -> Self {
        let mut years: BTreeMap<String, u64> = BTreeMap::new();
        let mut months: BTreeMap<String, u64> = BTreeMap::new();
        let mut days: BTreeMap<String, u64> = BTreeMap::new();
        let mut undated = 0;

        for file in files {
            let Some(created) = file.created else {
                undated += 1;
                continue;
            };
            *years.entry(created.format(YEAR).to_string()).or_default() += 1;
            *months.entry(created.format(YEAR_MONTH).to_string()).or_default() += 1;
            *days
                .entry(created.format(YEAR_MONTH_DAY).to_string())
                .or_default() += 1;
        }

        Self {
            by_year: into_counts(years),
            by_month: into_counts(months),
            by_day: into_counts(days),
            undated,
        }
    }

    /// Number of files that had a creation date.
    pub fn dated(&self) -> u64 {
        self.by_year.iter().map(|c| c.file_count).sum()
    }

    /// Year with the most files created.
    pub fn busiest_year(&self) -> Option<&DateCount> {
        self.by_year.iter().max_by_key(|c| c.file_count)
    }
}

fn into_counts(map: BTreeMap<String, u64>) -> Vec<DateCount> {
    map.into_iter()
        .map(|(date, file_count)| DateCount { date, file_count })
        .collect()
}
