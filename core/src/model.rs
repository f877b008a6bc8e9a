//! Entry and collection data structures.
//!
//! This module defines the core intermediate representation for parametric
//! limit files:
//! - [`Entry`]: A named parametric with its limit values
//! - [`Collection`]: All entries extracted from one file, plus scan metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single named parametric with its limit values.
///
/// `limits` maps a configured label (e.g. `"min"`, `"upper limit"`) to the
/// parsed value, or `None` when the source cell held a null sentinel. Labels
/// are stored exactly as configured, and values compare by exact equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The display name of the parametric; the join key across versions.
    pub name: String,
    /// Named limit bounds, keyed by configured label.
    #[serde(default)]
    pub limits: BTreeMap<String, Option<f64>>,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Entry {
        Entry {
            name: name.into(),
            limits: BTreeMap::new(),
        }
    }

    pub fn with_limit(mut self, label: impl Into<String>, value: Option<f64>) -> Entry {
        self.limits.insert(label.into(), value);
        self
    }

    /// Whether two entries' limit maps differ.
    ///
    /// Maps differ when their sizes differ, when a label is present on only
    /// one side, or when a shared label's values are unequal. A `None` vs
    /// `Some` mismatch counts as unequal; two `None`s are equal.
    pub fn limits_differ(&self, other: &Entry) -> bool {
        if self.limits.len() != other.limits.len() {
            return true;
        }
        self.limits
            .iter()
            .any(|(label, value)| match other.limits.get(label) {
                None => true,
                Some(other_value) => other_value != value,
            })
    }
}

/// All entries extracted from one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Extracted entries, in column order. Names are expected to be unique
    /// within a file; the differ joins by name and warns when a duplicate
    /// name shadows an earlier entry.
    pub entries: Vec<Entry>,
    /// Zero-based index of the column whose cell matched the parametric
    /// marker, or `None` when no marker was found.
    pub parametric_column: Option<usize>,
    /// Number of name cells seen during extraction. Can exceed
    /// `entries.len()` when a later name row reassigns a column.
    pub entry_count: usize,
    /// Warnings accumulated during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Collection {
    pub fn empty() -> Collection {
        Collection {
            entries: Vec::new(),
            parametric_column: None,
            entry_count: 0,
            warnings: Vec::new(),
        }
    }

    /// Look up an entry by name. When a name occurs more than once the last
    /// definition wins, matching the differ's join semantics.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().rev().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
