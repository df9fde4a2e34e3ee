//! Terminal rendering of a [`DirectoryView`].

use std::io::Write;

use fffinder_core::{DirectoryView, FacilityRecord, FacilityStatus, LoadState};

/// Writes the view as a count followed by one card per facility, or as a JSON
/// array of records when `json` is set.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn render_view<W: Write>(
    out: &mut W,
    view: &DirectoryView,
    json: bool,
) -> anyhow::Result<()> {
    match &view.state {
        LoadState::Loading => {
            writeln!(out, "Loading...")?;
            return Ok(());
        }
        LoadState::Failed(_) => {
            writeln!(out, "Error loading data")?;
            return Ok(());
        }
        LoadState::Ready => {}
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &view.results)?;
        writeln!(out)?;
        return Ok(());
    }

    if view.results.is_empty() {
        writeln!(out, "No facilities found")?;
        return Ok(());
    }

    writeln!(out, "Found {} facilities", view.results.len())?;
    for facility in &view.results {
        writeln!(out)?;
        write_card(out, facility)?;
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, facility: &FacilityRecord) -> std::io::Result<()> {
    let status = facility.status.map(FacilityStatus::as_str).unwrap_or_default();
    writeln!(out, "{}", facility.applicant_name)?;
    writeln!(out, "  {}", facility.address)?;
    writeln!(out, "  Status: {status}")
}

/// Prints each status value, one per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn print_statuses<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for status in FacilityStatus::ALL {
        writeln!(out, "{status}")?;
    }
    Ok(())
}
