//! Rename report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::spec::{SpecRenameFailure, SpecRenameRecord};

const C_HEADER_RENAMED: &str = "Renamed the following paths:";
const C_NOTHING_RENAMED: &str = "No filenames needed renaming.";

/// Renames, failures and diagnostics for one `rename_tree` run.
#[derive(Debug, Default, Clone)]
pub struct ReportRename {
    /// Number of directory/file entries examined.
    pub cnt_scanned: u64,
    /// Number of entries skipped by exclude patterns.
    pub cnt_excluded: u64,
    /// Completed renames, in the order they were performed.
    pub records: Vec<SpecRenameRecord>,
    /// Failed rename attempts, in the order they happened.
    pub failures: Vec<SpecRenameFailure>,
    /// Non-fatal warnings collected during traversal.
    pub warnings: Vec<String>,
}

impl ReportRename {
    /// Number of completed renames.
    pub fn renamed_count(&self) -> usize {
        self.records.len()
    }

    /// Number of failed rename attempts.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_excluded".to_string(), self.cnt_excluded);
        dict_counts.insert("cnt_renamed".to_string(), self.renamed_count() as u64);
        dict_counts.insert("cnt_failed".to_string(), self.failure_count() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} scanned={} renamed={} failed={} excluded={} warnings={}",
            dict_counts["cnt_scanned"],
            dict_counts["cnt_renamed"],
            dict_counts["cnt_failed"],
            dict_counts["cnt_excluded"],
            dict_counts["cnt_warnings"]
        )
    }

    /// End-of-run listing: a header plus one `src -> dst` line per rename,
    /// or a single line when nothing was renamed.
    pub fn render_lines(&self) -> Vec<String> {
        if self.records.is_empty() {
            return vec![C_NOTHING_RENAMED.to_string()];
        }
        let mut l_lines = Vec::with_capacity(self.records.len() + 1);
        l_lines.push(C_HEADER_RENAMED.to_string());
        l_lines.extend(self.records.iter().map(|record| record.to_string()));
        l_lines
    }
}

impl fmt::Display for ReportRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[RENAME]"))
    }
}

/// Mutable accumulator for rename results.
#[derive(Debug, Default, Clone)]
pub struct ReportRenameBuilder {
    /// See [`ReportRename::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportRename::cnt_excluded`].
    pub cnt_excluded: u64,
    /// See [`ReportRename::records`].
    pub records: Vec<SpecRenameRecord>,
    /// See [`ReportRename::failures`].
    pub failures: Vec<SpecRenameFailure>,
    /// See [`ReportRename::warnings`].
    pub warnings: Vec<String>,
}

impl ReportRenameBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment excluded count by one.
    pub fn add_excluded(&mut self) {
        self.cnt_excluded += 1;
    }

    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Add one completed rename.
    pub fn add_record(&mut self, record: SpecRenameRecord) {
        self.records.push(record);
    }

    /// Add one failed rename.
    pub fn add_failure(&mut self, failure: SpecRenameFailure) {
        self.failures.push(failure);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportRename {
        ReportRename {
            cnt_scanned: self.cnt_scanned,
            cnt_excluded: self.cnt_excluded,
            records: self.records,
            failures: self.failures,
            warnings: self.warnings,
        }
    }
}
