mod commands;
mod error;
mod menu;
mod terminal;
mod util;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{birthdays, contacts, notes, Context};
use crate::error::{exit_code_for, report_error};
use rolo_config as config;
use rolo_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolo", version, about = "contacts and notes assistant")]
struct Cli {
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive session (the default)
    Menu,
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "edit-contact")]
    EditContact(contacts::EditContactArgs),
    #[command(name = "rename-contact")]
    RenameContact(contacts::RenameContactArgs),
    #[command(name = "delete-contact")]
    DeleteContact(contacts::DeleteContactArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Search(contacts::SearchArgs),
    #[command(name = "add-phone")]
    AddPhone(contacts::AddPhoneArgs),
    #[command(name = "remove-phone")]
    RemovePhone(contacts::RemovePhoneArgs),
    #[command(name = "edit-phone")]
    EditPhone(contacts::EditPhoneArgs),
    #[command(name = "clear-field")]
    ClearField(contacts::ClearFieldArgs),
    Birthdays(birthdays::BirthdaysArgs),
    #[command(name = "add-note")]
    AddNote(notes::AddNoteArgs),
    #[command(name = "edit-note")]
    EditNote(notes::EditNoteArgs),
    #[command(name = "delete-note")]
    DeleteNote(notes::DeleteNoteArgs),
    #[command(name = "search-notes")]
    SearchNotes(notes::SearchNotesArgs),
    #[command(name = "list-notes")]
    ListNotes(notes::ListNotesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_dir,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_dir = paths::resolve_data_dir(data_dir.or_else(|| app_config.data_dir.clone()))
        .with_context(|| "resolve data directory")?;
    if verbose {
        debug!(path = %data_dir.display(), "data directory resolved");
    }

    let mut store = Store::open(&data_dir)
        .with_context(|| format!("open data directory {}", data_dir.display()))?;

    match command.unwrap_or(Command::Menu) {
        Command::Menu => {
            if json {
                bail!("--json is not available in the interactive session");
            }
            menu::run(&mut store, &app_config)
        }
        command => {
            let mut ctx = Context {
                store: &mut store,
                json,
                config: &app_config,
            };
            match command {
                Command::Menu => unreachable!("menu handled above"),
                Command::AddContact(args) => contacts::add_contact(&mut ctx, args),
                Command::EditContact(args) => contacts::edit_contact(&mut ctx, args),
                Command::RenameContact(args) => contacts::rename_contact(&mut ctx, args),
                Command::DeleteContact(args) => contacts::delete_contact(&mut ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Search(args) => contacts::search_contacts(&ctx, args),
                Command::AddPhone(args) => contacts::add_phone(&mut ctx, args),
                Command::RemovePhone(args) => contacts::remove_phone(&mut ctx, args),
                Command::EditPhone(args) => contacts::edit_phone(&mut ctx, args),
                Command::ClearField(args) => contacts::clear_field(&mut ctx, args),
                Command::Birthdays(args) => birthdays::birthdays(&ctx, args),
                Command::AddNote(args) => notes::add_note(&mut ctx, args),
                Command::EditNote(args) => notes::edit_note(&mut ctx, args),
                Command::DeleteNote(args) => notes::delete_note(&mut ctx, args),
                Command::SearchNotes(args) => notes::search_notes(&ctx, args),
                Command::ListNotes(args) => notes::list_notes(&ctx, args),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
