//! The address book: an ordered, name-keyed collection of contact records.
//!
//! Entries keep insertion order, names are unique store-wide, and the key
//! always equals the contained record's current name.

use crate::error::{Result, StoreError};
use rolo_core::{Name, Record};
use serde::{Deserialize, Serialize};
use std::slice::{Chunks, Iter};

/// Shortest query accepted by [`AddressBook::search`].
pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Inserts the record, silently overwriting an existing entry with the
    /// same name in place. No merge is attempted.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Re-keys the entry under `old` to `new`, updating the record's name to
    /// match. The moved entry is re-inserted at the end. Fails when `old` is
    /// absent, when `new` already keys a different contact, or when `new` is
    /// not a valid name.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self
            .position(old)
            .ok_or_else(|| StoreError::NotFound(old.to_string()))?;
        if new != old && self.position(new).is_some() {
            return Err(StoreError::NameTaken(new.to_string()));
        }
        let name = Name::new(new)?;
        let mut record = self.records.remove(index);
        record.set_name(name);
        self.records.push(record);
        Ok(())
    }

    /// Removes the entry if present; returns whether a deletion occurred.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Substring search across names (case-insensitive) and phones
    /// (case-sensitive), in store order. A record is emitted once per name
    /// hit and once per matching phone, so it can appear more than once.
    pub fn search(&self, query: &str) -> Result<Vec<&Record>> {
        if query.chars().count() < MIN_SEARCH_LEN {
            return Err(StoreError::QueryTooShort {
                min: MIN_SEARCH_LEN,
            });
        }
        let lowered = query.to_lowercase();
        let mut hits = Vec::new();
        for record in &self.records {
            if record.name().as_str().to_lowercase().contains(&lowered) {
                hits.push(record);
            }
            for phone in record.phones() {
                if phone.as_str().contains(query) {
                    hits.push(record);
                }
            }
        }
        Ok(hits)
    }

    /// Lazy batches of at most `page_size` records in store order, with a
    /// trailing partial batch. An empty book yields no batches. A page size
    /// below 1 is treated as 1.
    pub fn pages(&self, page_size: usize) -> Chunks<'_, Record> {
        self.records.chunks(page_size.max(1))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
