use std::fs::File;

use metering_core::UsageRow;

/// Timestamp layout used in the seed file.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn export_to_csv_impl(
    rows: &[UsageRow],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "START_TIME",
        "END_TIME",
        "WAREHOUSE_NAME",
        "TOTAL_CREDITS_USED",
        "TOTAL_COST_USD",
    ])?;

    for row in rows {
        wtr.write_record([
            &row.start_time.format(TIMESTAMP_FORMAT).to_string(),
            &row.end_time.format(TIMESTAMP_FORMAT).to_string(),
            &row.warehouse_name,
            &row.credits_used.to_string(),
            &row.cost_usd.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
