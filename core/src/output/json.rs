use crate::diff::DiffReport;

/// Serialize a report to a compact JSON string.
pub fn serialize_diff_report(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Parse a report back from its JSON form.
///
/// Fields added after a payload was written fall back to their defaults, so
/// older payloads keep deserializing.
pub fn diff_report_from_json(json: &str) -> serde_json::Result<DiffReport> {
    serde_json::from_str(json)
}
