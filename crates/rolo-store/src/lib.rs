pub mod book;
pub mod error;
pub mod notes;
pub mod paths;
pub mod snapshot;

pub use book::{AddressBook, MIN_SEARCH_LEN};
pub use error::{Result, StoreError, StoreErrorKind};
pub use notes::NoteList;

use std::path::{Path, PathBuf};

/// The two persisted collections plus their backing directory.
///
/// One `Store` instance owns the in-memory state for a whole session;
/// callers load once, mutate through `contacts` / `notes`, and flush with
/// [`Store::persist`].
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    pub contacts: AddressBook,
    pub notes: NoteList,
}

impl Store {
    /// Loads both snapshots from `dir`, creating the directory if needed.
    /// Missing snapshot files yield empty collections.
    pub fn open(dir: &Path) -> Result<Self> {
        let dir = paths::resolve_data_dir(Some(dir.to_path_buf()))?;
        let contacts = snapshot::load(&dir.join(paths::CONTACTS_FILENAME))?;
        let notes = snapshot::load(&dir.join(paths::NOTES_FILENAME))?;
        Ok(Self {
            dir,
            contacts,
            notes,
        })
    }

    pub fn open_default() -> Result<Self> {
        let dir = paths::ensure_data_dir()?;
        Self::open(&dir)
    }

    /// Overwrites both snapshot files with the current in-memory state.
    pub fn persist(&self) -> Result<()> {
        snapshot::save(&self.contacts_path(), &self.contacts)?;
        snapshot::save(&self.notes_path(), &self.notes)?;
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.dir.join(paths::CONTACTS_FILENAME)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.dir.join(paths::NOTES_FILENAME)
    }
}
