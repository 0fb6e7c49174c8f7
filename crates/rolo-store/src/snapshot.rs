//! Whole-file JSON snapshots.
//!
//! Persistence is read whole file, mutate in memory, write whole file. A
//! missing file on load means "start empty"; any other failure surfaces.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn load<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(err) => Err(err.into()),
    }
}

pub fn save<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
