//! Row-scan extraction: classify raw CSV rows into named entries.
//!
//! The scan is a single top-to-bottom pass:
//! 1. Find the parametric boundary: the first cell whose text contains the
//!    configured marker token fixes the boundary column. Rows before that
//!    point, and the marker row itself, carry no data.
//! 2. Classify each later row by its first cell: a name row (key token), a
//!    value row (an unclaimed limit label), or noise to be ignored.
//! 3. Flatten the per-column entries into a [`Collection`].

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::config::ExtractConfig;
use crate::error_codes;
use crate::model::{Collection, Entry};

/// Errors produced while classifying and parsing rows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    #[error(
        "[PARDIFF_EXTRACT_001] invalid {label} value '{value}' at row {row}, column {column}: {source}. Suggestion: correct the cell or add the token to the null values."
    )]
    InvalidNumber {
        label: String,
        row: usize,
        column: usize,
        value: String,
        source: std::num::ParseFloatError,
    },
}

impl ExtractError {
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::InvalidNumber { .. } => error_codes::EXTRACT_INVALID_NUMBER,
        }
    }
}

/// Extract a [`Collection`] from raw CSV rows.
///
/// Absence of the marker yields an empty collection with a warning, not an
/// error. A numeric cell that is neither parseable nor a configured null
/// sentinel aborts the extraction, reporting 1-based coordinates.
pub fn extract(rows: &[Vec<String>], config: &ExtractConfig) -> Result<Collection, ExtractError> {
    let marker = config.parametric_marker.to_lowercase();
    let key_marker = config.key_marker.to_lowercase();

    let mut boundary: Option<usize> = None;
    let mut data_start = 0usize;
    let mut by_column: BTreeMap<usize, Entry> = BTreeMap::new();
    let mut claimed: BTreeSet<usize> = BTreeSet::new();
    let mut entry_count = 0usize;

    for (row_idx, row) in rows.iter().enumerate() {
        if boundary.is_none() {
            if let Some(col_idx) = row
                .iter()
                .position(|cell| cell.to_lowercase().contains(&marker))
            {
                boundary = Some(col_idx);
                data_start = if config.begin_from_parametric {
                    col_idx
                } else {
                    col_idx + 1
                };
            }
            continue;
        }

        let Some(first) = row.first() else {
            continue;
        };

        if first.to_lowercase().contains(&key_marker) {
            // Name row: every eligible cell starts a fresh entry for its
            // column, discarding whatever the column held before.
            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx == 0 || col_idx < data_start {
                    continue;
                }
                by_column.insert(col_idx, Entry::new(cell.clone()));
                entry_count += 1;
            }
            continue;
        }

        let Some(label_idx) = match_unclaimed_label(first, config, &claimed) else {
            continue;
        };
        claimed.insert(label_idx);
        let label = &config.limit_labels[label_idx];

        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx == 0 || col_idx < data_start {
                continue;
            }
            let value = if config.null_sentinels.iter().any(|sentinel| sentinel == cell) {
                None
            } else {
                let parsed =
                    cell.parse::<f64>()
                        .map_err(|source| ExtractError::InvalidNumber {
                            label: label.clone(),
                            row: row_idx + 1,
                            column: col_idx + 1,
                            value: cell.clone(),
                            source,
                        })?;
                Some(parsed)
            };
            by_column
                .entry(col_idx)
                .or_insert_with(|| Entry::new(""))
                .limits
                .insert(label.clone(), value);
        }
    }

    let mut warnings = Vec::new();
    if boundary.is_none() {
        warnings.push(format!(
            "no cell matched the parametric marker '{}'; extracted zero entries",
            config.parametric_marker
        ));
    }

    Ok(Collection {
        entries: by_column.into_values().collect(),
        parametric_column: boundary,
        entry_count,
        warnings,
    })
}

/// First label, in configured order, that is not yet claimed and whose text
/// appears in `cell` (case-insensitive).
fn match_unclaimed_label(
    cell: &str,
    config: &ExtractConfig,
    claimed: &BTreeSet<usize>,
) -> Option<usize> {
    let cell_lower = cell.to_lowercase();
    config
        .limit_labels
        .iter()
        .enumerate()
        .filter(|(idx, _)| !claimed.contains(idx))
        .find(|(_, label)| cell_lower.contains(&label.to_lowercase()))
        .map(|(idx, _)| idx)
}
