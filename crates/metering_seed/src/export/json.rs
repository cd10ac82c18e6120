use std::fs::File;

use metering_core::UsageRow;

pub(crate) fn export_to_json_impl(
    rows: &[UsageRow],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, rows)?;
    Ok(())
}
