use anyhow::Result;
use rolo_config::AppConfig;
use rolo_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod birthdays;
pub mod contacts;
pub mod notes;

pub struct Context<'a> {
    pub store: &'a mut Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
