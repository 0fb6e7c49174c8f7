use super::{attempt, confirm, prompt, prompt_optional, Menu, Outcome, Session};
use crate::terminal::Colorize;
use crate::util::{print_record, record_row, today};
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use rolo_core::Record;

pub struct ContactsMenu;

impl Menu for ContactsMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Contacts")
            .items(&[
                "Add contact",
                "Show contact",
                "List all",
                "Search",
                "Edit contact",
                "Delete contact",
                "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => attempt(add_contact(session)),
            1 => attempt(show_contact(session)),
            2 => attempt(list_contacts(session)),
            3 => attempt(search_contacts(session)),
            4 => {
                let name = prompt("Contact name")?;
                if session.store.contacts.find(&name).is_none() {
                    println!("{}", format!("no contact named {name}").warning());
                    return Ok(Outcome::Continue);
                }
                let edit = EditMenu { name };
                loop {
                    match edit.run(session)? {
                        Outcome::Continue => {}
                        Outcome::Back => return Ok(Outcome::Continue),
                        Outcome::Exit => return Ok(Outcome::Exit),
                    }
                }
            }
            5 => DeleteMenu.run(session),
            _ => Ok(Outcome::Back),
        }
    }
}

fn add_contact(session: &mut Session<'_>) -> Result<()> {
    let name = prompt("Name")?;
    let mut record = Record::new(&name)?;
    while let Some(phone) = prompt_optional("Phone")? {
        record.add_phone(&phone)?;
    }
    if let Some(birthday) = prompt_optional("Birthday YYYY.MM.DD")? {
        record.set_birthday(&birthday)?;
    }
    if let Some(email) = prompt_optional("Email")? {
        record.set_email(&email)?;
    }
    if let Some(address) = prompt_optional("Address")? {
        record.set_address(&address);
    }
    session.store.contacts.add_record(record);
    session.store.persist()?;
    println!("{}", format!("created {name}").success());
    Ok(())
}

fn show_contact(session: &mut Session<'_>) -> Result<()> {
    let name = prompt("Contact name")?;
    match session.store.contacts.find(&name) {
        Some(record) => print_record(record, today()),
        None => println!("{}", format!("no contact named {name}").warning()),
    }
    Ok(())
}

fn list_contacts(session: &mut Session<'_>) -> Result<()> {
    if session.store.contacts.is_empty() {
        println!("{}", "no contacts".dim());
        return Ok(());
    }
    let today = today();
    let page_size = session.config.page_size;
    let pages: Vec<_> = session.store.contacts.pages(page_size).collect();
    let total = pages.len();
    for (index, page) in pages.into_iter().enumerate() {
        for record in page {
            println!("{}", record_row(record, today));
        }
        if index + 1 < total && !confirm("Show next page?")? {
            break;
        }
    }
    Ok(())
}

fn search_contacts(session: &mut Session<'_>) -> Result<()> {
    let query = prompt("Search query")?;
    let hits = session.store.contacts.search(&query)?;
    if hits.is_empty() {
        println!("{}", "no matches found".dim());
        return Ok(());
    }
    let today = today();
    for record in hits {
        println!("{}", record_row(record, today));
    }
    Ok(())
}

/// Field edits for one contact, looked up by name on every action so the
/// session can keep borrowing the store between prompts.
pub struct EditMenu {
    pub name: String,
}

impl Menu for EditMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Edit {}", self.name))
            .items(&[
                "Add phone",
                "Edit phone",
                "Remove phone",
                "Set birthday",
                "Set email",
                "Set address",
                "Clear a field",
                "Rename",
                "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => attempt(self.add_phone(session)),
            1 => attempt(self.edit_phone(session)),
            2 => attempt(self.remove_phone(session)),
            3 => attempt(self.set_birthday(session)),
            4 => attempt(self.set_email(session)),
            5 => attempt(self.set_address(session)),
            6 => attempt(self.clear_field(session)),
            7 => match self.rename(session) {
                // The old name no longer resolves after a rename.
                Ok(()) => Ok(Outcome::Back),
                Err(err) => {
                    println!("{}", err.to_string().warning());
                    Ok(Outcome::Continue)
                }
            },
            _ => Ok(Outcome::Back),
        }
    }
}

impl EditMenu {
    fn with_record<F>(&self, session: &mut Session<'_>, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Record) -> Result<()>,
    {
        match session.store.contacts.find_mut(&self.name) {
            Some(record) => {
                apply(record)?;
                session.store.persist()?;
                Ok(())
            }
            None => {
                println!("{}", format!("no contact named {}", self.name).warning());
                Ok(())
            }
        }
    }

    fn add_phone(&self, session: &mut Session<'_>) -> Result<()> {
        let phone = prompt("Phone")?;
        self.with_record(session, |record| {
            record.add_phone(&phone)?;
            println!("{}", "phone added".success());
            Ok(())
        })
    }

    fn edit_phone(&self, session: &mut Session<'_>) -> Result<()> {
        let old = prompt("Current phone")?;
        let new = prompt("New phone")?;
        self.with_record(session, |record| {
            if record.edit_phone(&old, &new)? {
                println!("{}", "phone updated".success());
            } else {
                println!("{}", format!("no phone {old} on record").warning());
            }
            Ok(())
        })
    }

    fn remove_phone(&self, session: &mut Session<'_>) -> Result<()> {
        let phone = prompt("Phone to remove")?;
        self.with_record(session, |record| {
            if record.remove_phone(&phone) {
                println!("{}", "phone removed".success());
            } else {
                println!("{}", format!("no phone {phone} on record").warning());
            }
            Ok(())
        })
    }

    fn set_birthday(&self, session: &mut Session<'_>) -> Result<()> {
        let birthday = prompt("Birthday YYYY.MM.DD")?;
        self.with_record(session, |record| {
            record.set_birthday(&birthday)?;
            println!("{}", "birthday set".success());
            Ok(())
        })
    }

    fn set_email(&self, session: &mut Session<'_>) -> Result<()> {
        let email = prompt("Email")?;
        self.with_record(session, |record| {
            record.set_email(&email)?;
            println!("{}", "email set".success());
            Ok(())
        })
    }

    fn set_address(&self, session: &mut Session<'_>) -> Result<()> {
        let address = prompt("Address")?;
        self.with_record(session, |record| {
            record.set_address(&address);
            println!("{}", "address set".success());
            Ok(())
        })
    }

    fn clear_field(&self, session: &mut Session<'_>) -> Result<()> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Field to clear")
            .items(&["Birthday", "Email", "Address"])
            .default(0)
            .interact()?;
        self.with_record(session, |record| {
            let cleared = match choice {
                0 => record.clear_birthday(),
                1 => record.clear_email(),
                _ => record.clear_address(),
            };
            if cleared {
                println!("{}", "field cleared".success());
            } else {
                println!("{}", "field was already empty".dim());
            }
            Ok(())
        })
    }

    fn rename(&self, session: &mut Session<'_>) -> Result<()> {
        let new = prompt("New name")?;
        session.store.contacts.rename(&self.name, &new)?;
        session.store.persist()?;
        println!("{}", format!("renamed {} to {new}", self.name).success());
        Ok(())
    }
}

pub struct DeleteMenu;

impl Menu for DeleteMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let name = prompt("Contact to delete")?;
        if session.store.contacts.find(&name).is_none() {
            println!("{}", format!("no contact named {name}").warning());
            return Ok(Outcome::Continue);
        }
        if !confirm(&format!("Delete {name}?"))? {
            println!("{}", "kept".dim());
            return Ok(Outcome::Continue);
        }
        session.store.contacts.delete(&name);
        session.store.persist()?;
        println!("{}", format!("deleted {name}").success());
        Ok(Outcome::Continue)
    }
}
