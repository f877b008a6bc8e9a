pub mod diff;
pub mod info;

use anyhow::{Result, bail};
use param_diff::ExtractConfig;

/// Build the extraction configuration from CLI flags, starting from the
/// selected preset and overriding field by field.
pub(crate) fn build_extract_config(
    parametric: Option<String>,
    key: Option<String>,
    get_columns: Option<Vec<String>>,
    null_values: Option<Vec<String>>,
    begin_from_parametric: bool,
    limit_report: bool,
) -> Result<ExtractConfig> {
    if limit_report && get_columns.is_some() {
        bail!("Cannot use both --limit-report and --get-columns together");
    }

    let mut config = if limit_report {
        ExtractConfig::limit_report()
    } else {
        ExtractConfig::generic()
    };

    if let Some(marker) = parametric {
        config.parametric_marker = marker;
    }
    if let Some(marker) = key {
        config.key_marker = marker;
    }
    if let Some(labels) = get_columns {
        config.limit_labels = labels;
    }
    if let Some(sentinels) = null_values {
        config.null_sentinels = sentinels;
    }
    if begin_from_parametric {
        config.begin_from_parametric = true;
    }

    config.validate()?;
    Ok(config)
}
