use crate::commands::diff::Verbosity;
use anyhow::Result;
use param_diff::{ChangedEntry, DiffReport, Entry};
use std::collections::BTreeSet;
use std::io::Write;

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    old_path: &str,
    new_path: &str,
    verbosity: Verbosity,
) -> Result<()> {
    if verbosity != Verbosity::Quiet {
        writeln!(w, "Comparing \"{}\" → \"{}\"", old_path, new_path)?;
        writeln!(w)?;
    }

    if !report.has_differences() {
        writeln!(w, "No differences found.")?;
        write_summary(w, report, verbosity)?;
        return Ok(());
    }

    if verbosity != Verbosity::Quiet {
        if !report.added.is_empty() {
            writeln!(w, "Added entries:")?;
            for entry in &report.added {
                writeln!(w, "  {}", render_entry(entry))?;
            }
            writeln!(w)?;
        }

        if !report.removed.is_empty() {
            writeln!(w, "Removed entries:")?;
            for entry in &report.removed {
                writeln!(w, "  {}", render_entry(entry))?;
            }
            writeln!(w)?;
        }

        if !report.changed.is_empty() {
            writeln!(w, "Changed entries:")?;
            for change in &report.changed {
                for line in render_change(change, verbosity) {
                    writeln!(w, "  {}", line)?;
                }
            }
            writeln!(w)?;
        }
    }

    write_summary(w, report, verbosity)?;

    Ok(())
}

/// One-line rendering of an entry and its limits, used for the added and
/// removed sections and by `info`.
pub(crate) fn render_entry(entry: &Entry) -> String {
    let limits = entry
        .limits
        .iter()
        .map(|(label, value)| format!("{}: {}", label, format_slot(Some(value))))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {{{}}}", display_name(entry), limits)
}

fn render_change(change: &ChangedEntry, verbosity: Verbosity) -> Vec<String> {
    let mut lines = vec![format!("{}:", display_name(&change.old))];

    let labels: BTreeSet<&str> = change
        .old
        .limits
        .keys()
        .chain(change.new.limits.keys())
        .map(String::as_str)
        .collect();

    for label in labels {
        let old = change.old.limits.get(label);
        let new = change.new.limits.get(label);
        if old == new {
            if verbosity == Verbosity::Verbose {
                lines.push(format!("  {}: {} (unchanged)", label, format_slot(old)));
            }
            continue;
        }
        lines.push(format!(
            "  {}: {} → {}",
            label,
            format_slot(old),
            format_slot(new)
        ));
    }

    lines
}

fn display_name(entry: &Entry) -> &str {
    if entry.name.is_empty() {
        "(unnamed)"
    } else {
        entry.name.as_str()
    }
}

/// A limit slot is either missing from the map entirely, present but null, or
/// a number.
fn format_slot(slot: Option<&Option<f64>>) -> String {
    match slot {
        None => "<absent>".to_string(),
        Some(None) => "<null>".to_string(),
        Some(Some(n)) => format_number(*n),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn write_summary<W: Write>(w: &mut W, report: &DiffReport, verbosity: Verbosity) -> Result<()> {
    if verbosity == Verbosity::Quiet && !report.has_differences() {
        return Ok(());
    }

    writeln!(w, "---")?;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Total changes: {}", report.change_count())?;

    if !report.added.is_empty() {
        writeln!(w, "  Added: {}", report.added.len())?;
    }
    if !report.removed.is_empty() {
        writeln!(w, "  Removed: {}", report.removed.len())?;
    }
    if !report.changed.is_empty() {
        writeln!(w, "  Changed: {}", report.changed.len())?;
    }
    if report.unchanged > 0 {
        writeln!(w, "  Unchanged: {}", report.unchanged)?;
    }

    if !report.complete {
        writeln!(w, "  Status: INCOMPLETE (some comparisons may be missing)")?;
    } else {
        writeln!(w, "  Status: complete")?;
    }

    Ok(())
}
