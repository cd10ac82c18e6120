//! Invariant checks over emitted row batches.

use chrono::{Duration, Timelike};

use crate::generate::UsageRow;
use crate::pricing::cost_for_credits;

/// Validate an emitted batch: non-negative values, hour-aligned one-hour
/// spans, warehouse-major/day/hour ordering, and cost derivation.
///
/// Returns a description of the first violation, or `None` when clean.
pub fn validate_rows(rows: &[UsageRow], price_per_credit: f64) -> Option<String> {
    let mut seen_warehouses: Vec<&str> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if row.credits_used < 0.0 || row.cost_usd < 0.0 {
            return Some(format!(
                "row {i}: negative credits ({}) or cost ({})",
                row.credits_used, row.cost_usd
            ));
        }
        if row.start_time.minute() != 0 || row.start_time.second() != 0 {
            return Some(format!("row {i}: start is not hour-aligned"));
        }
        if row.end_time - row.start_time != Duration::hours(1) {
            return Some(format!("row {i}: span is not one hour"));
        }

        let expected_cost = cost_for_credits(row.credits_used, price_per_credit);
        if (row.cost_usd - expected_cost).abs() > 1e-9 {
            return Some(format!(
                "row {i}: cost {} does not match {} for {} credits",
                row.cost_usd, expected_cost, row.credits_used
            ));
        }

        let continues_block = seen_warehouses
            .last()
            .is_some_and(|w| *w == row.warehouse_name);
        if continues_block {
            let prev = &rows[i - 1];
            if row.start_time <= prev.start_time {
                return Some(format!(
                    "row {i}: timestamps not ascending within {}",
                    row.warehouse_name
                ));
            }
        } else {
            if seen_warehouses.iter().any(|w| *w == row.warehouse_name) {
                return Some(format!(
                    "row {i}: warehouse {} split across blocks",
                    row.warehouse_name
                ));
            }
            seen_warehouses.push(row.warehouse_name.as_str());
        }
    }

    None
}
