use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name cannot be empty")]
    EmptyName,
    #[error("invalid phone number {0:?}: expected exactly 10 digits")]
    InvalidPhone(String),
    #[error("invalid email format: {0:?}")]
    InvalidEmail(String),
    #[error("invalid birthday {0:?}: expected YYYY.MM.DD")]
    InvalidBirthday(String),
    #[error("invalid day window: {0} (expected 1..=365)")]
    InvalidWindowDays(i64),
}
