//! Validated field wrappers for contact attributes.
//!
//! Each wrapper's constructor is the sole validation gate: an invalid input
//! returns a [`CoreError`] and constructs nothing. Serde round-trips go
//! through the same constructors, so a snapshot edited by hand cannot smuggle
//! an invalid value back into memory.

use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted and rendered by [`Birthday`].
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// Contact name. Rejects values that are empty after trimming; the raw text
/// is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number: exactly 10 ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if !is_valid_email(raw) {
            return Err(CoreError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// local: alnum/dot/underscore; domain: alnum/dot/hyphen; final TLD segment
// at least 2 ASCII letters.
fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if domain.contains('@') || local.is_empty() {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Birthday, parsed from `YYYY.MM.DD` and stored as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let date = NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
            .map_err(|_| CoreError::InvalidBirthday(raw.to_string()))?;
        Ok(Self(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Free-form postal address. No format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field {
    ($name:ident) => {
        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                $name::new(&raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_field!(Name);
string_field!(Phone);
string_field!(Email);

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Birthday::new(&raw)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Birthday, Email, Name, Phone};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn name_rejects_empty() {
        assert_eq!(Name::new("").unwrap_err(), CoreError::EmptyName);
        assert_eq!(Name::new("   ").unwrap_err(), CoreError::EmptyName);
        assert_eq!(Name::new("Ada").unwrap().as_str(), "Ada");
    }

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.to_string(), "1234567890");
    }

    #[test]
    fn phone_rejects_bad_input() {
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("12345678ab").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::new("ada@example.com").is_ok());
        assert!(Email::new("ada.lovelace_1@sub.example-host.org").is_ok());
        assert!(Email::new("a@b.co").is_ok());
    }

    #[test]
    fn email_rejects_bad_input() {
        for raw in [
            "",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@.com",
            "ada@example.c",
            "ada@@example.com",
            "ada lovelace@example.com",
            "ada@example.1a",
        ] {
            assert!(Email::new(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn birthday_parses_dotted_format() {
        let birthday = Birthday::new("1990.03.10").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 3, 10).unwrap()
        );
        assert_eq!(birthday.to_string(), "1990.03.10");
    }

    #[test]
    fn birthday_rejects_other_formats() {
        assert!(Birthday::new("1990-03-10").is_err());
        assert!(Birthday::new("10.03.1990").is_err());
        assert!(Birthday::new("1990.02.30").is_err());
        assert!(Birthday::new("not a date").is_err());
    }

    #[test]
    fn serde_revalidates_on_deserialize() {
        let phone: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"1990-03-10\"").is_err());

        let birthday = Birthday::new("1990.03.10").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1990.03.10\"");
    }
}
