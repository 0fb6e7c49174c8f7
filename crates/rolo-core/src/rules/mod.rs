pub mod birthday;

pub use birthday::{
    days_to_birthday, falls_on, next_occurrence, occurrence_in_year, upcoming_within,
    validate_window_days, Countdown, MAX_WINDOW_DAYS,
};
