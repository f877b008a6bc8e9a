use crate::OutputFormat;
use crate::commands::build_extract_config;
use crate::output::{json, text};
use anyhow::{Context, Result, bail};
use param_diff::{DiffReport, ParametricFile};
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

pub fn run(
    old_path: &str,
    new_path: &str,
    format: OutputFormat,
    parametric: Option<String>,
    key: Option<String>,
    get_columns: Option<Vec<String>>,
    null_values: Option<Vec<String>>,
    begin_from_parametric: bool,
    limit_report: bool,
    quiet: bool,
    verbose: bool,
) -> Result<ExitCode> {
    if quiet && verbose {
        bail!("Cannot use both --quiet and --verbose flags together");
    }

    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = build_extract_config(
        parametric,
        key,
        get_columns,
        null_values,
        begin_from_parametric,
        limit_report,
    )?;

    let old_file =
        File::open(old_path).with_context(|| format!("Failed to open old file: {}", old_path))?;
    let new_file =
        File::open(new_path).with_context(|| format!("Failed to open new file: {}", new_path))?;

    let old_pkg = ParametricFile::open(old_file, &config)
        .with_context(|| format!("Failed to extract old file: {}", old_path))?;
    let new_pkg = ParametricFile::open(new_file, &config)
        .with_context(|| format!("Failed to extract new file: {}", new_path))?;

    let report = old_pkg.diff(&new_pkg);

    print_warnings_to_stderr(&report);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &report, old_path, new_path, verbosity)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &report)?;
        }
    }

    Ok(exit_code_from_report(&report))
}

fn print_warnings_to_stderr(report: &DiffReport) {
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn exit_code_from_report(report: &DiffReport) -> ExitCode {
    if !report.has_differences() && report.complete {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}
