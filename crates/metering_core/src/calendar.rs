//! Calendar helpers: month lengths, end-of-month windows, weekends.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    // Jump to the 28th, step past the month end, then back up one day.
    let pivot = date.with_day(28).expect("every month has a 28th") + Duration::days(4);
    let first_of_next = pivot.with_day(1).expect("day 1 is always valid");
    (first_of_next - Duration::days(1)).day()
}

/// True when `date` falls in the last `window` days of its month.
pub fn in_eom_window(date: NaiveDate, window: u32) -> bool {
    date.day() > days_in_month(date).saturating_sub(window)
}

/// True on Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(date(2025, 1, 15)), 31);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 29)), 29);
        assert_eq!(days_in_month(date(2025, 4, 30)), 30);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
    }

    #[test]
    fn eom_window_covers_last_k_days() {
        // January: 31 days, window 4 -> 28th through 31st.
        assert!(!in_eom_window(date(2025, 1, 27), 4));
        assert!(in_eom_window(date(2025, 1, 28), 4));
        assert!(in_eom_window(date(2025, 1, 31), 4));
        // February non-leap: 25th through 28th.
        assert!(!in_eom_window(date(2025, 2, 24), 4));
        assert!(in_eom_window(date(2025, 2, 25), 4));
    }

    #[test]
    fn oversized_window_covers_whole_month() {
        assert!(in_eom_window(date(2025, 2, 1), 40));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(date(2025, 8, 2))); // Saturday
        assert!(is_weekend(date(2025, 8, 3))); // Sunday
        assert!(!is_weekend(date(2025, 8, 4))); // Monday
        assert!(!is_weekend(date(2025, 8, 1))); // Friday
    }
}
