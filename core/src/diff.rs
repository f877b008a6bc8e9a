//! Diff partitions and reports for collection comparison.
//!
//! This module defines the types used to represent differences between two
//! extracted collections:
//! - [`ChangedEntry`]: An old/new pair whose limit maps differ
//! - [`DiffReport`]: A versioned set of added/removed/changed partitions
//! - [`diff_collections`]: The comparison itself

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Collection, Entry};

/// An entry present in both versions whose limit maps differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedEntry {
    pub old: Entry,
    pub new: Entry,
}

/// A versioned report of the differences between two collections.
///
/// The `version` field indicates the schema version for forwards
/// compatibility.
///
/// # Warnings
///
/// Some input conditions (a duplicate entry name shadowing an earlier one, a
/// file without a marker column) mean comparisons may be missing from the
/// partitions. In that case:
///
/// - `complete == false`
/// - `warnings` contains at least one human-readable explanation
///
/// The CLI prints warnings to stderr as `Warning: ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version (currently "1").
    pub version: String,
    /// Entries present only in the new collection, sorted by name.
    pub added: Vec<Entry>,
    /// Entries present only in the old collection, sorted by name.
    pub removed: Vec<Entry>,
    /// Entries present in both collections with differing limits, sorted by
    /// name.
    pub changed: Vec<ChangedEntry>,
    /// Number of names present in both collections with equal limits.
    #[serde(default)]
    pub unchanged: usize,
    /// Whether every entry was compared. When `false`, some comparisons may
    /// be missing; see `warnings`.
    #[serde(default = "default_complete")]
    pub complete: bool,
    /// Warnings generated during extraction or comparison.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_complete() -> bool {
    true
}

impl DiffReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new() -> DiffReport {
        DiffReport {
            version: Self::SCHEMA_VERSION.to_string(),
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            unchanged: 0,
            complete: true,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
        self.complete = false;
    }

    /// Total number of reported differences across the three partitions.
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    pub fn has_differences(&self) -> bool {
        self.change_count() > 0
    }
}

impl Default for DiffReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two collections by entry name.
///
/// Every distinct name lands in exactly one of the added, removed or changed
/// partitions, or in the unchanged count. Partitions come out sorted by name
/// so output is deterministic; consumers should still treat them as sets.
/// When a collection holds several entries with the same name the last
/// definition wins and a warning is recorded.
pub fn diff_collections(old: &Collection, new: &Collection) -> DiffReport {
    let mut report = DiffReport::new();

    for warning in &old.warnings {
        report.add_warning(format!("old file: {}", warning));
    }
    for warning in &new.warnings {
        report.add_warning(format!("new file: {}", warning));
    }

    let old_by_name = index_by_name(old, "old", &mut report);
    let new_by_name = index_by_name(new, "new", &mut report);

    for (name, new_entry) in &new_by_name {
        if !old_by_name.contains_key(name) {
            report.added.push((*new_entry).clone());
        }
    }

    for (name, old_entry) in &old_by_name {
        match new_by_name.get(name) {
            None => report.removed.push((*old_entry).clone()),
            Some(new_entry) => {
                if old_entry.limits_differ(new_entry) {
                    report.changed.push(ChangedEntry {
                        old: (*old_entry).clone(),
                        new: (*new_entry).clone(),
                    });
                } else {
                    report.unchanged += 1;
                }
            }
        }
    }

    report
}

fn index_by_name<'a>(
    collection: &'a Collection,
    side: &str,
    report: &mut DiffReport,
) -> BTreeMap<&'a str, &'a Entry> {
    let mut by_name: BTreeMap<&'a str, &'a Entry> = BTreeMap::new();
    for entry in &collection.entries {
        if by_name.insert(entry.name.as_str(), entry).is_some() {
            report.add_warning(format!(
                "duplicate entry name in {} file: '{}'; later definition overwrites earlier one. \
                 The file may define the same parametric twice.",
                side, entry.name
            ));
        }
    }
    by_name
}
