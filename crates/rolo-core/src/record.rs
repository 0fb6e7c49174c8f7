use crate::error::CoreError;
use crate::field::{Address, Birthday, Email, Name, Phone};
use serde::{Deserialize, Serialize};

/// One contact: a required name plus optional attributes.
///
/// The name doubles as the identity key in the owning address book, so it is
/// only reassigned through the book's rename operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Reassigns the name. The owning book re-keys the entry to match.
    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Phones in insertion order. Duplicates are permitted.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Removes the first phone exactly equal to `value`. Returns whether a
    /// removal occurred.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone exactly equal to `old` with a re-validated
    /// `new`. `Ok(false)` means no phone matched and the record is unchanged;
    /// a validation failure also leaves the record unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, CoreError> {
        let Some(index) = self.phones.iter().position(|p| p.as_str() == old) else {
            return Ok(false);
        };
        self.phones[index] = Phone::new(new)?;
        Ok(true)
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> bool {
        self.birthday.take().is_some()
    }

    pub fn set_email(&mut self, raw: &str) -> Result<(), CoreError> {
        self.email = Some(Email::new(raw)?);
        Ok(())
    }

    pub fn clear_email(&mut self) -> bool {
        self.email.take().is_some()
    }

    pub fn set_address(&mut self, raw: &str) {
        self.address = Some(Address::new(raw));
    }

    pub fn clear_address(&mut self) -> bool {
        self.address.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::CoreError;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Ada Lovelace").expect("record");
        for phone in phones {
            record.add_phone(phone).expect("add phone");
        }
        record
    }

    #[test]
    fn new_requires_a_name() {
        assert_eq!(Record::new(" ").unwrap_err(), CoreError::EmptyName);
        let record = Record::new("Ada").unwrap();
        assert_eq!(record.name().as_str(), "Ada");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn phones_keep_insertion_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn add_phone_rejects_invalid_and_keeps_state() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_phone_takes_first_match_only() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        assert!(record.remove_phone("1111111111"));
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["2222222222", "1111111111"]);
        assert!(!record.remove_phone("3333333333"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_replaces_first_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert!(record.edit_phone("2222222222", "3333333333").unwrap());
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "3333333333"]);
    }

    #[test]
    fn edit_phone_missing_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(!record.edit_phone("9999999999", "3333333333").unwrap());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn edit_phone_invalid_replacement_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(record.edit_phone("1111111111", "abc").is_err());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn find_phone_exact_match() {
        let record = record_with_phones(&["1111111111"]);
        assert!(record.find_phone("1111111111").is_some());
        assert!(record.find_phone("111111111").is_none());
    }

    #[test]
    fn optional_fields_set_and_clear() {
        let mut record = Record::new("Ada").unwrap();
        record.set_birthday("1990.03.10").unwrap();
        record.set_email("ada@example.com").unwrap();
        record.set_address("12 Byron St");
        assert!(record.birthday().is_some());
        assert!(record.email().is_some());
        assert_eq!(record.address().unwrap().as_str(), "12 Byron St");

        assert!(record.clear_birthday());
        assert!(!record.clear_birthday());
        assert!(record.clear_email());
        assert!(record.clear_address());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn failed_reassignment_keeps_previous_value() {
        let mut record = Record::new("Ada").unwrap();
        record.set_email("ada@example.com").unwrap();
        assert!(record.set_email("broken").is_err());
        assert_eq!(record.email().unwrap().as_str(), "ada@example.com");
    }
}
