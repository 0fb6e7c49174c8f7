use super::{attempt, prompt, prompt_optional, Menu, Outcome, Session};
use crate::commands::{self, notes};
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

pub struct NotesMenu;

impl Menu for NotesMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Notes")
            .items(&[
                "Add note",
                "Show all",
                "Search by tag",
                "Edit by tag",
                "Delete by tag",
                "Back",
            ])
            .default(0)
            .interact()?;
        if choice == 5 {
            return Ok(Outcome::Back);
        }

        let mut ctx = commands::Context {
            store: &mut *session.store,
            json: false,
            config: session.config,
        };
        match choice {
            0 => {
                let content = prompt("Note content")?;
                let mut tag = Vec::new();
                while let Some(value) = prompt_optional("Tag")? {
                    tag.push(value);
                }
                attempt(notes::add_note(
                    &mut ctx,
                    notes::AddNoteArgs { content, tag },
                ))
            }
            1 => attempt(notes::list_notes(&ctx, notes::ListNotesArgs {})),
            2 => {
                let tag = prompt("Tag to search")?;
                attempt(notes::search_notes(&ctx, notes::SearchNotesArgs { tag }))
            }
            3 => {
                let tag = prompt("Tag")?;
                let content = prompt("New content")?;
                attempt(notes::edit_note(
                    &mut ctx,
                    notes::EditNoteArgs { tag, content },
                ))
            }
            _ => {
                let tag = prompt("Tag")?;
                attempt(notes::delete_note(&mut ctx, notes::DeleteNoteArgs { tag }))
            }
        }
    }
}
