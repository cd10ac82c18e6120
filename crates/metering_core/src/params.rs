//! Generator configuration with documented defaults.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::departments::DEFAULT_WAREHOUSES;
use crate::pricing::DEFAULT_PRICE_PER_CREDIT;

/// Parameters for one generation run.
///
/// Constructed once at startup and passed down; nothing reads the
/// environment or the clock during generation. Two runs with equal
/// parameters (including a pinned `start_date`) produce identical rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Days of history counting back from the anchor date. The generated
    /// window is `days + 1` days long, inclusive of the anchor.
    pub days: u32,
    /// USD charged per credit.
    pub price_per_credit: f64,
    /// Master determinism seed.
    pub seed: u64,
    /// First generated day. `None` anchors to today minus `days`.
    pub start_date: Option<NaiveDate>,
    /// Multiplier applied on Saturday and Sunday.
    pub weekend_dip: f64,
    /// Business Intelligence end-of-month spike.
    pub bi_eom_spike: f64,
    /// Data Platform end-of-month spike.
    pub dp_eom_spike: f64,
    /// Finance mid-month and end-of-month spike. The two conditions are
    /// applied independently and multiply when both hold.
    pub fin_mid_eom_spike: f64,
    /// Burst days selected per month for Data Science.
    pub ds_bursts_per_month: u32,
    /// Multiplier on Data Science burst days.
    pub ds_burst_mult: f64,
    /// Std dev of the day-level wiggle around the daily target.
    pub daily_noise_sd: f64,
    /// Length of the end-of-month window in days.
    pub eom_window_days: u32,
    /// Warehouses to generate, in emission order.
    pub warehouses: Vec<String>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            days: 75,
            price_per_credit: DEFAULT_PRICE_PER_CREDIT,
            seed: 42,
            start_date: None,
            weekend_dip: 0.70,
            bi_eom_spike: 1.60,
            dp_eom_spike: 1.10,
            fin_mid_eom_spike: 1.30,
            ds_bursts_per_month: 3,
            ds_burst_mult: 1.80,
            daily_noise_sd: 0.20,
            eom_window_days: 4,
            warehouses: DEFAULT_WAREHOUSES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl GeneratorParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the history window length in days (window is `days + 1` long).
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Pin the first generated day instead of anchoring to today.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_price_per_credit(mut self, price: f64) -> Self {
        self.price_per_credit = price;
        self
    }

    /// Replace the generated fleet.
    pub fn with_warehouses(mut self, warehouses: Vec<String>) -> Self {
        self.warehouses = warehouses;
        self
    }

    /// Resolved first generated day.
    pub fn resolved_start_date(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| Local::now().date_naive() - Duration::days(self.days as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = GeneratorParams::default();
        assert_eq!(params.days, 75);
        assert_eq!(params.seed, 42);
        assert_eq!(params.price_per_credit, 3.0);
        assert_eq!(params.weekend_dip, 0.70);
        assert_eq!(params.ds_bursts_per_month, 3);
        assert_eq!(params.eom_window_days, 4);
        assert_eq!(params.warehouses.len(), 6);
    }

    #[test]
    fn pinned_start_date_wins_over_today() {
        let pinned = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let params = GeneratorParams::default().with_start_date(pinned);
        assert_eq!(params.resolved_start_date(), pinned);
    }

    #[test]
    fn builders_chain() {
        let params = GeneratorParams::default()
            .with_seed(7)
            .with_days(10)
            .with_price_per_credit(2.5);
        assert_eq!(params.seed, 7);
        assert_eq!(params.days, 10);
        assert_eq!(params.price_per_credit, 2.5);
    }
}
