use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::terminal::Colorize;
use crate::util::note_row;
use anyhow::Result;
use clap::Args;
use rolo_core::Note;

#[derive(Debug, Args)]
pub struct AddNoteArgs {
    pub content: String,
    #[arg(long, value_name = "TAG")]
    pub tag: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EditNoteArgs {
    pub tag: String,
    pub content: String,
}

#[derive(Debug, Args)]
pub struct DeleteNoteArgs {
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct SearchNotesArgs {
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct ListNotesArgs {}

pub fn add_note(ctx: &mut Context<'_>, args: AddNoteArgs) -> Result<()> {
    let note = Note::new(args.content, args.tag);
    ctx.store.notes.add(note.clone());
    ctx.store.persist()?;
    if ctx.json {
        print_json(&note)?;
    } else {
        println!("note added");
    }
    Ok(())
}

pub fn edit_note(ctx: &mut Context<'_>, args: EditNoteArgs) -> Result<()> {
    let updated = ctx.store.notes.edit_content(&args.tag, &args.content);
    if updated == 0 {
        return Err(not_found(format!("notes tagged {}", args.tag)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("updated {updated} note(s)");
    }
    Ok(())
}

pub fn delete_note(ctx: &mut Context<'_>, args: DeleteNoteArgs) -> Result<()> {
    let removed = ctx.store.notes.remove_by_tag(&args.tag);
    if removed == 0 {
        return Err(not_found(format!("notes tagged {}", args.tag)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("deleted {removed} note(s)");
    }
    Ok(())
}

pub fn search_notes(ctx: &Context<'_>, args: SearchNotesArgs) -> Result<()> {
    let hits = ctx.store.notes.find_by_tag_sorted(&args.tag);
    if ctx.json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("{}", "no notes found".dim());
        return Ok(());
    }
    for note in &hits {
        println!("{}", note_row(note));
    }
    Ok(())
}

pub fn list_notes(ctx: &Context<'_>, _args: ListNotesArgs) -> Result<()> {
    if ctx.json {
        return print_json(&ctx.store.notes.notes());
    }
    if ctx.store.notes.is_empty() {
        println!("{}", "no notes".dim());
        return Ok(());
    }
    for note in &ctx.store.notes {
        println!("{}", note_row(note));
    }
    Ok(())
}
