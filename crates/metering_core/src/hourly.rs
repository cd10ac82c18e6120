//! Hourly usage profiles per department.
//!
//! Each profile is a 24-entry relative weight table (index 0 = midnight).
//! Weights are relative only; callers normalize before splitting a day
//! total across hours. Profiles vary by department, never by date.

use crate::departments::Department;

/// Early-morning batch windows; quiet through business hours.
pub const FINANCE_WEIGHTS: [f64; 24] = [
    0.9, 1.0, 1.2, 1.2, 1.1, 1.0, 0.7, 0.6, 0.5, 0.5, 0.6, 0.7, //
    0.8, 0.8, 0.7, 0.7, 0.6, 0.6, 0.6, 0.7, 0.8, 0.8, 0.8, 0.9,
];

/// Business-hours peak, heaviest 9 AM - 4 PM.
pub const BUSINESS_INTELLIGENCE_WEIGHTS: [f64; 24] = [
    0.4, 0.4, 0.5, 0.5, 0.6, 0.7, 0.9, 1.1, 1.2, 1.3, 1.3, 1.2, //
    1.1, 1.0, 1.0, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.5, 0.4, 0.4,
];

/// Daytime steady; low overnight.
pub const DATA_PLATFORM_WEIGHTS: [f64; 24] = [
    0.4, 0.4, 0.5, 0.5, 0.6, 0.8, 1.0, 1.1, 1.1, 1.1, 1.1, 1.1, //
    1.1, 1.1, 1.1, 1.1, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.5, 0.4,
];

/// Late-night experimentation peak.
pub const DATA_SCIENCE_WEIGHTS: [f64; 24] = [
    0.6, 0.6, 0.7, 0.8, 0.8, 0.8, 0.7, 0.7, 0.6, 0.6, 0.7, 0.8, //
    0.9, 1.0, 1.0, 1.0, 1.1, 1.2, 1.3, 1.3, 1.2, 1.1, 0.9, 0.7,
];

/// Evening-heavy (timezone drift across regions).
pub const ANALYTICS_WEIGHTS: [f64; 24] = [
    0.5, 0.5, 0.6, 0.6, 0.6, 0.7, 0.8, 0.9, 0.9, 1.0, 1.0, 1.0, //
    1.1, 1.2, 1.2, 1.2, 1.2, 1.1, 1.0, 0.9, 0.9, 0.8, 0.7, 0.6,
];

/// Gentle default: low before 6 AM, full through the workday, easing after 6 PM.
pub const DEFAULT_WEIGHTS: [f64; 24] = [
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8,
];

/// Weight profile for a department.
pub fn weights_for(dept: Department) -> [f64; 24] {
    match dept {
        Department::Finance => FINANCE_WEIGHTS,
        Department::BusinessIntelligence => BUSINESS_INTELLIGENCE_WEIGHTS,
        Department::DataPlatform => DATA_PLATFORM_WEIGHTS,
        Department::DataScience => DATA_SCIENCE_WEIGHTS,
        Department::Analytics => ANALYTICS_WEIGHTS,
        Department::Unmapped => DEFAULT_WEIGHTS,
    }
}

/// Scale a weight table so it sums to 1.0.
///
/// A degenerate all-zero table falls back to a uniform split.
pub fn normalized(weights: &[f64; 24]) -> [f64; 24] {
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return [1.0 / 24.0; 24];
    }
    let mut out = *weights;
    for w in &mut out {
        *w /= sum;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_is_positive() {
        for dept in [
            Department::Finance,
            Department::BusinessIntelligence,
            Department::DataPlatform,
            Department::DataScience,
            Department::Analytics,
            Department::Unmapped,
        ] {
            for (hour, w) in weights_for(dept).iter().enumerate() {
                assert!(*w > 0.0, "{dept:?} hour {hour} weight must be positive");
            }
        }
    }

    #[test]
    fn normalized_sums_to_one() {
        let weights = normalized(&weights_for(Department::Finance));
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_handles_all_zero_table() {
        let weights = normalized(&[0.0; 24]);
        for w in &weights {
            assert!((w - 1.0 / 24.0).abs() < 1e-12);
        }
    }

    #[test]
    fn shapes_peak_where_expected() {
        let bi = weights_for(Department::BusinessIntelligence);
        assert!(bi[9] > bi[0], "BI peaks in business hours");

        let fin = weights_for(Department::Finance);
        assert!(fin[3] > fin[9], "Finance peaks in early-morning batch windows");

        let ds = weights_for(Department::DataScience);
        assert!(ds[19] > ds[9], "Data Science peaks late at night");

        let an = weights_for(Department::Analytics);
        assert!(an[14] > an[2], "Analytics is evening-heavy");
    }
}
