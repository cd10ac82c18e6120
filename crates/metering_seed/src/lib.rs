//! Batch seed tool around the deterministic metering generator.
//!
//! Reads environment-style configuration with safe fallbacks, generates
//! the demo metering history via [`metering_core`], and writes the seed
//! file consumed by the dashboard's metering-history table.
//!
//! # Quick Start
//!
//! ```no_run
//! use metering_core::generate_rows;
//! use metering_seed::{export_to_csv, summarize, SeedConfig};
//!
//! let config = SeedConfig::from_env();
//! let rows = generate_rows(&config.params);
//! export_to_csv(&rows, &config.out_path).expect("write seed file");
//! println!("{} rows", summarize(&rows).row_count);
//! ```

pub mod config;
pub mod export;
pub mod summary;

pub use config::SeedConfig;
pub use export::{export_to_csv, export_to_json};
pub use summary::{summarize, RunSummary};
