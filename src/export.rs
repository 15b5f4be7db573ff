//! CSV export of ranking results
//!
//! One file per (metric, direction). Rows are written in ascending rank
//! order; rows without a rank go last. Target files qualify every header
//! except the country code with `_target`.

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::radar::{Direction, RankedEntry};

/// Written in place of any missing field
pub const MISSING: &str = "N/A";

const ORIGIN_HEADER: [&str; 4] = ["CountryCode", "CountryName", "Value", "Rank"];
const TARGET_HEADER: [&str; 4] = ["CountryCode", "CountryName_target", "Value_target", "Rank_target"];

/// Header row for a direction
pub fn header_for(direction: Direction) -> [&'static str; 4] {
    match direction {
        Direction::Origin => ORIGIN_HEADER,
        Direction::Target => TARGET_HEADER,
    }
}

/// Entries ordered by rank, unranked entries last, ties kept in input order
pub fn sorted_by_rank(entries: &[RankedEntry]) -> Vec<&RankedEntry> {
    let mut sorted: Vec<&RankedEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.rank.unwrap_or(u32::MAX));
    sorted
}

/// Write a ranking to `destination`
///
/// Returns the number of data rows written. An empty list is reported and
/// skipped without creating a file.
pub fn export(entries: &[RankedEntry], destination: &Path, direction: Direction) -> Result<usize, ExportError> {
    if entries.is_empty() {
        log::warn!("No data to write to {}", destination.display());
        return Ok(0);
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_err = |source: csv::Error| ExportError::Csv {
        path: destination.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(destination).map_err(csv_err)?;
    writer.write_record(header_for(direction)).map_err(csv_err)?;

    let rows = sorted_by_rank(entries);
    for entry in &rows {
        writer.write_record(row_fields(entry)).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: destination.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} rows to {}", rows.len(), destination.display());
    Ok(rows.len())
}

fn row_fields(entry: &RankedEntry) -> [String; 4] {
    [
        entry.country_code.clone().unwrap_or_else(|| MISSING.to_string()),
        entry.country_name.clone().unwrap_or_else(|| MISSING.to_string()),
        entry
            .value_text
            .clone()
            .or_else(|| entry.value.map(|v| v.to_string()))
            .unwrap_or_else(|| MISSING.to_string()),
        entry.rank.map(|r| r.to_string()).unwrap_or_else(|| MISSING.to_string()),
    ]
}
