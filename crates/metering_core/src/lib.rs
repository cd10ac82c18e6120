//! Deterministic synthetic metering generator for warehouse cost demos.
//!
//! Produces per-warehouse, per-hour credit usage with department-distinct
//! shapes (weekday/weekend cycles, end-of-month spikes, bursty
//! experimentation) while exactly preserving each day's credit total under
//! injected noise. The same configuration always reproduces the same rows,
//! regardless of iteration order: every random draw is seeded from stable
//! inputs rather than a shared stream.
//!
//! # Architecture
//!
//! - [`departments`]: warehouse → department mapping and department profiles
//! - [`calendar`]: month-window and weekend helpers
//! - [`daily`]: per-day multiplier model, including burst-day selection
//! - [`hourly`]: static 24-hour weight profiles per department
//! - [`noise`]: multiplicative jitter with total-preserving rescaling
//! - [`pricing`]: credit → USD conversion
//! - [`generate`]: warehouse × day × hour row assembly
//! - [`validate`]: invariant checks over emitted batches

pub mod calendar;
pub mod daily;
pub mod departments;
pub mod generate;
pub mod hourly;
pub mod noise;
pub mod params;
pub mod pricing;
pub mod rng;
pub mod validate;

pub use departments::Department;
pub use generate::{generate_rows, UsageRow};
pub use params::GeneratorParams;
