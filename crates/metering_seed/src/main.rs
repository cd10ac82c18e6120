//! One-shot batch generator for demo metering history.
//!
//! Reads environment configuration, generates the full warehouse × day ×
//! hour row set, validates it, and writes the seed CSV. Exit status is 0
//! unless writing the output file fails.

use metering_core::generate_rows;
use metering_core::validate::validate_rows;
use metering_seed::config::SeedConfig;
use metering_seed::export::export_to_csv;
use metering_seed::summary::summarize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SeedConfig::from_env();
    let params = &config.params;

    println!(
        "Generating {} days of metering history for {} warehouses (seed {})...",
        params.days + 1,
        params.warehouses.len(),
        params.seed
    );

    let rows = generate_rows(params);
    if let Some(problem) = validate_rows(&rows, params.price_per_credit) {
        return Err(format!("generated batch failed validation: {problem}").into());
    }

    if let Some(dir) = config.out_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    export_to_csv(&rows, &config.out_path)?;

    let summary = summarize(&rows);
    println!("\n=== Seed Summary ===");
    println!("Total credits: {:.3}", summary.total_credits);
    println!("Total cost:    ${:.2}", summary.total_cost_usd);
    for (dept, credits) in &summary.credits_by_department {
        println!("  {dept:<22} {credits:>10.3} credits");
    }

    println!(
        "\nWrote {} rows to {} for {} warehouses over {} days.",
        summary.row_count,
        config.out_path.display(),
        summary.warehouse_count,
        summary.day_count
    );

    Ok(())
}
