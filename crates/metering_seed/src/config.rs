//! Environment-driven configuration with safe fallbacks.
//!
//! Every knob is optional. Malformed numeric input falls back to the
//! documented default rather than failing the run.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use metering_core::GeneratorParams;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUT_PATH: &str = "seeds/metering_demo_seed.csv";

/// Full configuration for one seed run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub params: GeneratorParams,
    pub out_path: PathBuf,
}

impl SeedConfig {
    /// Read configuration from the environment, applying defaults.
    ///
    /// Recognized keys: `DEMO_DAYS`, `COST_PER_CREDIT`, `DEMO_SEED`,
    /// `DEMO_START_DATE` (`YYYY-MM-DD`), `WEEKEND_DIP`, `BI_EOM_SPIKE`,
    /// `DP_EOM_SPIKE`, `FIN_MID_EOM_SPIKE`, `DS_BURSTS_PER_MONTH`,
    /// `DS_BURST_MULT`, `DAILY_NOISE_SD`, `EOM_WINDOW_DAYS`,
    /// `SEED_OUT_PATH`.
    pub fn from_env() -> Self {
        let defaults = GeneratorParams::default();
        let params = GeneratorParams {
            days: env_parsed("DEMO_DAYS", defaults.days),
            price_per_credit: env_parsed("COST_PER_CREDIT", defaults.price_per_credit),
            seed: env_parsed("DEMO_SEED", defaults.seed),
            start_date: env_date("DEMO_START_DATE"),
            weekend_dip: env_parsed("WEEKEND_DIP", defaults.weekend_dip),
            bi_eom_spike: env_parsed("BI_EOM_SPIKE", defaults.bi_eom_spike),
            dp_eom_spike: env_parsed("DP_EOM_SPIKE", defaults.dp_eom_spike),
            fin_mid_eom_spike: env_parsed("FIN_MID_EOM_SPIKE", defaults.fin_mid_eom_spike),
            ds_bursts_per_month: env_parsed("DS_BURSTS_PER_MONTH", defaults.ds_bursts_per_month),
            ds_burst_mult: env_parsed("DS_BURST_MULT", defaults.ds_burst_mult),
            daily_noise_sd: env_parsed("DAILY_NOISE_SD", defaults.daily_noise_sd),
            eom_window_days: env_parsed("EOM_WINDOW_DAYS", defaults.eom_window_days),
            warehouses: defaults.warehouses,
        };

        let out_path = env::var("SEED_OUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUT_PATH));

        Self { params, out_path }
    }
}

/// Parse an env var, falling back to `default` when unset or malformed.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a `YYYY-MM-DD` env var; unset or malformed yields `None`.
fn env_date(key: &str) -> Option<NaiveDate> {
    env::var(key)
        .ok()
        .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}
