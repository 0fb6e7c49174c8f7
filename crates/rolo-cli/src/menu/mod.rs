//! Interactive menu session.
//!
//! Each screen is a standalone [`Menu`] over a shared [`Session`]; screens
//! compose by returning an [`Outcome`] that tells the caller whether to stay,
//! go back one level, or end the whole session.

mod birthdays;
mod contacts;
mod notes;

use crate::terminal::Colorize;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use rolo_config::AppConfig;
use rolo_store::Store;

use self::birthdays::BirthdaysMenu;
use self::contacts::ContactsMenu;
use self::notes::NotesMenu;

pub struct Session<'a> {
    pub store: &'a mut Store,
    pub config: &'a AppConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stay on the current screen.
    Continue,
    /// Return to the parent screen.
    Back,
    /// End the session.
    Exit,
}

pub trait Menu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome>;
}

pub fn run(store: &mut Store, config: &AppConfig) -> Result<()> {
    let mut session = Session { store, config };
    println!("{}", "Welcome to the assistant!".info());
    let main = MainMenu;
    loop {
        match main.run(&mut session)? {
            Outcome::Continue => {}
            Outcome::Back | Outcome::Exit => break,
        }
    }
    session.store.persist()?;
    println!("{}", "Good bye!".success());
    Ok(())
}

struct MainMenu;

impl Menu for MainMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Main menu")
            .items(&["Contacts", "Birthdays", "Notes", "Exit"])
            .default(0)
            .interact()?;
        let submenu: &dyn Menu = match choice {
            0 => &ContactsMenu,
            1 => &BirthdaysMenu,
            2 => &NotesMenu,
            _ => return Ok(Outcome::Exit),
        };
        loop {
            match submenu.run(session)? {
                Outcome::Continue => {}
                Outcome::Back => return Ok(Outcome::Continue),
                Outcome::Exit => return Ok(Outcome::Exit),
            }
        }
    }
}

/// Runs one menu action, printing the error and carrying on when it fails.
/// Interactive screens never abort the session over bad input.
fn attempt(result: Result<()>) -> Result<Outcome> {
    if let Err(err) = result {
        println!("{}", err.to_string().warning());
    }
    Ok(Outcome::Continue)
}

fn prompt(label: &str) -> Result<String> {
    let value: String = dialoguer::Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_optional(label: &str) -> Result<Option<String>> {
    let value: String = dialoguer::Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{label} (empty to skip)"))
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn confirm(label: &str) -> Result<bool> {
    let answer = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(false)
        .interact()?;
    Ok(answer)
}
