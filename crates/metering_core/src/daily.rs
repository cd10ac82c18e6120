//! Daily multiplier model: how heavy a calendar day is per department.
//!
//! A multiplier of 1.0 is baseline; weekends dip, reporting and close
//! periods spike, and Data Science gets a few deterministic burst days
//! each month.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::calendar::{days_in_month, in_eom_window, is_weekend};
use crate::departments::Department;
use crate::params::GeneratorParams;

/// Slight Monday bump for Business Intelligence reporting.
const BI_MONDAY_BUMP: f64 = 1.05;

/// Data Science runs slightly below baseline outside burst days.
const DS_WEEKDAY_BASE: f64 = 0.95;

/// Analytics leans a little heavier late in the week.
const ANALYTICS_LATE_WEEK_BUMP: f64 = 1.05;

/// Deterministic burst days for a Data Science month.
///
/// Seeded from (year, month, seed) only, so the selection is identical
/// across warehouses and independent of draw order elsewhere. The first
/// and last days of the month are never selected. The target count is
/// min(`count`, days in month), capped at the selectable range so the
/// loop always terminates.
pub fn burst_days_for_month(year: i32, month: u32, count: u32, seed: u64) -> BTreeSet<u32> {
    let month_len = days_in_month(
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month"),
    );
    let mut rng = StdRng::seed_from_u64(((year as i64 * 100 + month as i64) as u64) ^ seed);

    // Selectable days are 2..=month_len-2.
    let selectable = month_len.saturating_sub(3);
    let target = count.min(month_len).min(selectable);

    let mut days = BTreeSet::new();
    while (days.len() as u32) < target {
        days.insert(rng.gen_range(2..=month_len - 2));
    }
    days
}

/// Multiplier for a department on a given date (1.0 = baseline).
pub fn daily_multiplier(dept: Department, date: NaiveDate, params: &GeneratorParams) -> f64 {
    let weekend = if is_weekend(date) {
        params.weekend_dip
    } else {
        1.0
    };

    match dept {
        Department::DataPlatform => {
            // Steady weekdays; mild end-of-month spike.
            let mut base = weekend;
            if in_eom_window(date, params.eom_window_days) {
                base *= params.dp_eom_spike;
            }
            base
        }
        Department::BusinessIntelligence => {
            // Strong end-of-month reporting crunch; slight Monday bump.
            let monday = if date.weekday() == Weekday::Mon {
                BI_MONDAY_BUMP
            } else {
                1.0
            };
            let mut base = monday * weekend;
            if in_eom_window(date, params.eom_window_days) {
                base *= params.bi_eom_spike;
            }
            base
        }
        Department::Finance => {
            // Mid-month close and end-of-month close are independent
            // conditions; both multiply when both hold.
            let mut base = weekend;
            if (14..=16).contains(&date.day()) {
                base *= params.fin_mid_eom_spike;
            }
            if in_eom_window(date, params.eom_window_days) {
                base *= params.fin_mid_eom_spike;
            }
            base
        }
        Department::DataScience => {
            // Bursty experimentation on a few deterministic days per month.
            let bursts = burst_days_for_month(
                date.year(),
                date.month(),
                params.ds_bursts_per_month,
                params.seed,
            );
            let mut base = DS_WEEKDAY_BASE * weekend;
            if bursts.contains(&date.day()) {
                base *= params.ds_burst_mult;
            }
            base
        }
        Department::Analytics => {
            let late_week = if matches!(date.weekday(), Weekday::Thu | Weekday::Fri) {
                ANALYTICS_LATE_WEEK_BUMP
            } else {
                1.0
            };
            late_week * weekend
        }
        Department::Unmapped => weekend,
    }
}
