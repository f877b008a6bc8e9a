//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use param_diff::{Collection, Entry, ExtractConfig, ParametricFile};

pub fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn entry(name: &str, limits: &[(&str, Option<f64>)]) -> Entry {
    let mut entry = Entry::new(name);
    for (label, value) in limits {
        entry.limits.insert(label.to_string(), *value);
    }
    entry
}

pub fn collection(entries: Vec<Entry>) -> Collection {
    let entry_count = entries.len();
    Collection {
        entries,
        parametric_column: Some(1),
        entry_count,
        warnings: Vec::new(),
    }
}

pub fn open_csv(text: &str, config: &ExtractConfig) -> ParametricFile {
    ParametricFile::open(text.as_bytes(), config)
        .unwrap_or_else(|e| panic!("failed to open CSV fixture: {e}"))
}

/// Configuration matching the worked-example fixtures below: `upper`/`lower`
/// labels with the boundary column carrying data.
pub fn upper_lower_config() -> ExtractConfig {
    ExtractConfig::builder()
        .limit_labels(["upper", "lower"])
        .begin_from_parametric(true)
        .build()
        .expect("valid config")
}

pub const OLD_CSV: &str = "Result,Parametric\nkey,P1,P2\nupper,10,20\nlower,5,8\n";
pub const NEW_CSV: &str = "Result,Parametric\nkey,P2,P3\nupper,20,30\nlower,9,1\n";
