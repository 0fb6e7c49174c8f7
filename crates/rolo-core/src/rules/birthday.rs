//! Birthday occurrence and countdown rules.
//!
//! All functions take `today` explicitly; only the CLI edge reads the clock.

use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Upper bound accepted by [`validate_window_days`].
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Days until the next birthday occurrence. `Today` is a sentinel, not a
/// zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Today,
    In(u32),
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Today => write!(f, "today"),
            Countdown::In(days) => write!(f, "{days}"),
        }
    }
}

/// The concrete date a birthday falls on in `year`. The stored birth year is
/// ignored. Feb 29 maps to Feb 28 in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).unwrap())
}

/// This year's occurrence, rolled to next year once it has already passed.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

pub fn days_to_birthday(birthday: NaiveDate, today: NaiveDate) -> Countdown {
    let next = next_occurrence(birthday, today);
    if next == today {
        Countdown::Today
    } else {
        Countdown::In((next - today).num_days() as u32)
    }
}

/// The next occurrence and its distance in days, when it falls within
/// `[today, today + window_days]` inclusive.
pub fn upcoming_within(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> Option<(NaiveDate, i64)> {
    let next = next_occurrence(birthday, today);
    let days = (next - today).num_days();
    (days <= window_days).then_some((next, days))
}

/// Whether the birthday's occurrence in `date`'s year is exactly `date`.
/// No rollover applies here.
pub fn falls_on(birthday: NaiveDate, date: NaiveDate) -> bool {
    occurrence_in_year(birthday, date.year()) == date
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if (1..=MAX_WINDOW_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::InvalidWindowDays(days))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        days_to_birthday, falls_on, next_occurrence, occurrence_in_year, upcoming_within,
        validate_window_days, Countdown,
    };
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn occurrence_ignores_birth_year() {
        assert_eq!(
            occurrence_in_year(date(1990, 3, 10), 2024),
            date(2024, 3, 10)
        );
    }

    #[test]
    fn occurrence_leap_day_falls_back_to_feb_28() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2024), date(2024, 2, 29));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2023), date(2023, 2, 28));
    }

    #[test]
    fn next_occurrence_rolls_past_dates_forward() {
        let today = date(2024, 3, 15);
        assert_eq!(
            next_occurrence(date(1990, 3, 10), today),
            date(2025, 3, 10)
        );
        assert_eq!(
            next_occurrence(date(1990, 3, 15), today),
            date(2024, 3, 15)
        );
        assert_eq!(
            next_occurrence(date(1990, 12, 31), today),
            date(2024, 12, 31)
        );
    }

    #[test]
    fn countdown_today_is_a_sentinel() {
        let today = date(2024, 6, 10);
        assert_eq!(
            days_to_birthday(date(1985, 6, 10), today),
            Countdown::Today
        );
        assert_eq!(days_to_birthday(date(1985, 6, 10), today).to_string(), "today");
    }

    #[test]
    fn countdown_counts_against_rolled_occurrence() {
        // Passed five days ago: counts to next year's occurrence.
        let today = date(2024, 3, 15);
        assert_eq!(
            days_to_birthday(date(2020, 3, 10), today),
            Countdown::In(360)
        );
        assert_eq!(
            days_to_birthday(date(2020, 3, 16), today),
            Countdown::In(1)
        );
    }

    #[test]
    fn upcoming_within_is_inclusive() {
        let today = date(2024, 6, 10);
        assert_eq!(
            upcoming_within(date(1985, 6, 17), today, 7),
            Some((date(2024, 6, 17), 7))
        );
        assert_eq!(upcoming_within(date(1985, 6, 18), today, 7), None);
        assert_eq!(
            upcoming_within(date(1985, 6, 10), today, 7),
            Some((date(2024, 6, 10), 0))
        );
    }

    #[test]
    fn falls_on_does_not_roll_over() {
        assert!(falls_on(date(1990, 3, 10), date(2024, 3, 10)));
        assert!(!falls_on(date(1990, 3, 10), date(2024, 3, 11)));
    }

    #[test]
    fn window_bounds() {
        assert!(validate_window_days(1).is_ok());
        assert!(validate_window_days(365).is_ok());
        assert!(validate_window_days(0).is_err());
        assert!(validate_window_days(366).is_err());
        assert!(validate_window_days(-3).is_err());
    }
}
