//! Run summary aggregated from emitted rows.

use std::collections::{BTreeMap, BTreeSet};

use metering_core::{Department, UsageRow};

/// Aggregates for one generation run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunSummary {
    pub row_count: usize,
    pub warehouse_count: usize,
    pub day_count: usize,
    pub total_credits: f64,
    pub total_cost_usd: f64,
    /// Credits per department label, sorted by label.
    pub credits_by_department: BTreeMap<&'static str, f64>,
}

/// Aggregate a generated batch.
pub fn summarize(rows: &[UsageRow]) -> RunSummary {
    let mut warehouses = BTreeSet::new();
    let mut days = BTreeSet::new();
    let mut total_credits = 0.0;
    let mut total_cost_usd = 0.0;
    let mut credits_by_department: BTreeMap<&'static str, f64> = BTreeMap::new();

    for row in rows {
        warehouses.insert(row.warehouse_name.as_str());
        days.insert(row.start_time.date());
        total_credits += row.credits_used;
        total_cost_usd += row.cost_usd;
        *credits_by_department
            .entry(Department::of_warehouse(&row.warehouse_name).label())
            .or_insert(0.0) += row.credits_used;
    }

    RunSummary {
        row_count: rows.len(),
        warehouse_count: warehouses.len(),
        day_count: days.len(),
        total_credits,
        total_cost_usd,
        credits_by_department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use metering_core::{generate_rows, GeneratorParams};

    #[test]
    fn summary_counts_default_fleet() {
        let params = GeneratorParams::default()
            .with_days(1)
            .with_start_date(NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date"));
        let summary = summarize(&generate_rows(&params));

        assert_eq!(summary.row_count, 288);
        assert_eq!(summary.warehouse_count, 6);
        assert_eq!(summary.day_count, 2);
        assert!(summary.total_credits > 0.0);
        assert!(summary.total_cost_usd > 0.0);
        // Five mapped departments in the default fleet, no Unmapped bucket.
        assert_eq!(summary.credits_by_department.len(), 5);
        assert!(!summary.credits_by_department.contains_key("Unmapped"));
    }

    #[test]
    fn empty_batch_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.warehouse_count, 0);
        assert_eq!(summary.total_credits, 0.0);
    }
}
