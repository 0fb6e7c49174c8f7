//! Flat note list with linear tag search.

use rolo_core::Note;
use serde::{Deserialize, Serialize};
use std::slice::Iter;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Notes carrying `tag` exactly, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Tag search with results ordered by their tag lists.
    pub fn find_by_tag_sorted(&self, tag: &str) -> Vec<Note> {
        let mut found: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.has_tag(tag))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.tags.cmp(&b.tags));
        found
    }

    /// Rewrites the content of every note carrying `tag`; returns how many
    /// notes were updated.
    pub fn edit_content(&mut self, tag: &str, new_content: &str) -> usize {
        let mut updated = 0;
        for note in &mut self.notes {
            if note.has_tag(tag) {
                note.content = new_content.to_string();
                updated += 1;
            }
        }
        updated
    }

    /// Removes every note carrying `tag`; returns how many were removed.
    pub fn remove_by_tag(&mut self, tag: &str) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| !n.has_tag(tag));
        before - self.notes.len()
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
