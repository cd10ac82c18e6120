//! Seed-file export.
//!
//! CSV is the canonical seed format loaded into the metering-history
//! table; JSON is available for stores that ingest it directly. Both
//! overwrite any existing file at the target path.

use std::path::Path;

use metering_core::UsageRow;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export rows as the metering seed CSV.
///
/// Writes the header
/// `START_TIME,END_TIME,WAREHOUSE_NAME,TOTAL_CREDITS_USED,TOTAL_COST_USD`
/// followed by one record per warehouse-hour, timestamps formatted as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if the batch is empty or if file creation or CSV
/// writing fails.
pub fn export_to_csv(
    rows: &[UsageRow],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(rows)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(rows, file)
}

/// Export rows as a JSON array.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    rows: &[UsageRow],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(rows, file)
}
