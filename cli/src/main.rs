mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "param-diff")]
#[command(about = "Compare parametric limit CSV files and show differences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two parametric CSV files")]
    Diff {
        #[arg(default_value = "dummy.csv", help = "Path to the old/base CSV file")]
        old: String,
        #[arg(default_value = "dummy2.csv", help = "Path to the new/changed CSV file")]
        new: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "TOKEN", help = "Marker token locating the parametric column")]
        parametric: Option<String>,
        #[arg(long, value_name = "TOKEN", help = "Marker token identifying name rows")]
        key: Option<String>,
        #[arg(
            long,
            value_delimiter = ',',
            value_name = "LABELS",
            help = "Comma-separated limit labels to extract, in priority order"
        )]
        get_columns: Option<Vec<String>>,
        #[arg(
            long,
            value_delimiter = ',',
            value_name = "TOKENS",
            help = "Comma-separated cell values treated as null"
        )]
        null_values: Option<Vec<String>>,
        #[arg(long, help = "Treat the marker column itself as the first data column")]
        begin_from_parametric: bool,
        #[arg(long, help = "Use the limit-report preset (upper/lower limit labels)")]
        limit_report: bool,
        #[arg(long, short, help = "Quiet mode: only show summary")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: show unchanged limits too")]
        verbose: bool,
    },
    #[command(about = "Show the entries extracted from a parametric CSV file")]
    Info {
        #[arg(help = "Path to the CSV file")]
        path: String,
        #[arg(long, value_name = "TOKEN", help = "Marker token locating the parametric column")]
        parametric: Option<String>,
        #[arg(long, value_name = "TOKEN", help = "Marker token identifying name rows")]
        key: Option<String>,
        #[arg(
            long,
            value_delimiter = ',',
            value_name = "LABELS",
            help = "Comma-separated limit labels to extract, in priority order"
        )]
        get_columns: Option<Vec<String>>,
        #[arg(
            long,
            value_delimiter = ',',
            value_name = "TOKENS",
            help = "Comma-separated cell values treated as null"
        )]
        null_values: Option<Vec<String>>,
        #[arg(long, help = "Treat the marker column itself as the first data column")]
        begin_from_parametric: bool,
        #[arg(long, help = "Use the limit-report preset (upper/lower limit labels)")]
        limit_report: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            parametric,
            key,
            get_columns,
            null_values,
            begin_from_parametric,
            limit_report,
            quiet,
            verbose,
        } => commands::diff::run(
            &old,
            &new,
            format,
            parametric,
            key,
            get_columns,
            null_values,
            begin_from_parametric,
            limit_report,
            quiet,
            verbose,
        ),
        Commands::Info {
            path,
            parametric,
            key,
            get_columns,
            null_values,
            begin_from_parametric,
            limit_report,
        } => commands::info::run(
            &path,
            parametric,
            key,
            get_columns,
            null_values,
            begin_from_parametric,
            limit_report,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

// Input problems (missing files, bad flag combinations, malformed CSV) are
// user errors; only a failure to serialize our own report is internal.
fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<serde_json::Error>())
}
