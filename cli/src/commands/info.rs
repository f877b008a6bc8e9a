use crate::commands::build_extract_config;
use crate::output::text;
use anyhow::{Context, Result};
use param_diff::ParametricFile;
use std::fs::File;
use std::process::ExitCode;

pub fn run(
    path: &str,
    parametric: Option<String>,
    key: Option<String>,
    get_columns: Option<Vec<String>>,
    null_values: Option<Vec<String>>,
    begin_from_parametric: bool,
    limit_report: bool,
) -> Result<ExitCode> {
    let config = build_extract_config(
        parametric,
        key,
        get_columns,
        null_values,
        begin_from_parametric,
        limit_report,
    )?;

    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
    let pkg = ParametricFile::open(file, &config)
        .with_context(|| format!("Failed to extract file: {}", path))?;

    for warning in &pkg.collection.warnings {
        eprintln!("Warning: {}", warning);
    }

    println!("File: {}", path);
    match pkg.collection.parametric_column {
        Some(col_idx) => println!("Parametric column: {}", col_idx + 1),
        None => println!("Parametric column: not found"),
    }
    println!("Entries: {}", pkg.collection.len());
    for entry in &pkg.collection.entries {
        println!("  {}", text::render_entry(entry));
    }

    Ok(ExitCode::SUCCESS)
}
