//! Department profiles and the warehouse fleet they meter.

use serde::{Deserialize, Serialize};

/// Closed set of departments with distinct usage shapes.
///
/// Each variant drives both the daily multiplier model and the hourly
/// weight profile. Warehouses without a mapping entry fall back to
/// [`Department::Unmapped`], which uses neutral shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    DataPlatform,
    BusinessIntelligence,
    Finance,
    DataScience,
    Analytics,
    /// Fallback for warehouses with no mapping entry.
    Unmapped,
}

/// Default demo fleet, in emission order.
pub const DEFAULT_WAREHOUSES: [&str; 6] = [
    "COMPUTE_WH",
    "TRANSFORMING",
    "INTL_WH",
    "ML_WH",
    "BI_WH",
    "BATCH_WH",
];

impl Department {
    /// Resolve the owning department for a warehouse name.
    ///
    /// Total function: unknown names map to [`Department::Unmapped`].
    pub fn of_warehouse(name: &str) -> Self {
        match name {
            "BI_WH" => Self::BusinessIntelligence,
            "COMPUTE_WH" | "TRANSFORMING" => Self::DataPlatform,
            "ML_WH" => Self::DataScience,
            "INTL_WH" => Self::Analytics,
            "BATCH_WH" => Self::Finance,
            _ => Self::Unmapped,
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DataPlatform => "Data Platform",
            Self::BusinessIntelligence => "Business Intelligence",
            Self::Finance => "Finance",
            Self::DataScience => "Data Science",
            Self::Analytics => "Analytics",
            Self::Unmapped => "Unmapped",
        }
    }
}
