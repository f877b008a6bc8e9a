//! Param Diff: a library for comparing parametric limit CSV files.
//!
//! This crate provides functionality for:
//! - Reading flat CSV files into rows of string cells
//! - Extracting named parametric entries and their limit values
//! - Computing the added/removed/changed differences between two versions
//! - Serializing diff reports to JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use param_diff::{ExtractConfig, ParametricFile};
//!
//! let config = ExtractConfig::default();
//! let old = ParametricFile::open(std::fs::File::open("dummy.csv")?, &config)?;
//! let new = ParametricFile::open(std::fs::File::open("dummy2.csv")?, &config)?;
//! let report = old.diff(&new);
//!
//! for entry in &report.added {
//!     println!("added: {}", entry.name);
//! }
//! ```

mod config;
mod csv_read;
mod diff;
pub(crate) mod error_codes;
mod extract;
mod model;
mod output;
mod package;

pub use config::{ConfigError, ExtractConfig, ExtractConfigBuilder};
pub use csv_read::{CsvError, read_rows, read_rows_from_path};
pub use diff::{ChangedEntry, DiffReport, diff_collections};
pub use extract::{ExtractError, extract};
pub use model::{Collection, Entry};
pub use output::json::{diff_report_from_json, serialize_diff_report};
pub use package::{PackageError, ParametricFile};
