use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::terminal::Colorize;
use crate::util::{print_record, record_row, today};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rolo_core::rules::days_to_birthday;
use rolo_core::Record;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_name = "PHONE")]
    pub phone: Vec<String>,
    #[arg(long, value_name = "YYYY.MM.DD")]
    pub birthday: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub name: String,
    #[arg(long, value_name = "YYYY.MM.DD")]
    pub birthday: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct RenameContactArgs {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Args)]
pub struct DeleteContactArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

#[derive(Debug, Args)]
pub struct AddPhoneArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct RemovePhoneArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct EditPhoneArgs {
    pub name: String,
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClearableField {
    Birthday,
    Email,
    Address,
}

impl ClearableField {
    pub fn label(self) -> &'static str {
        match self {
            ClearableField::Birthday => "birthday",
            ClearableField::Email => "email",
            ClearableField::Address => "address",
        }
    }
}

#[derive(Debug, Args)]
pub struct ClearFieldArgs {
    pub name: String,
    #[arg(value_enum)]
    pub field: ClearableField,
}

#[derive(Debug, Serialize)]
pub struct ContactDetail {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub days_to_birthday: Option<String>,
}

impl ContactDetail {
    pub fn from_record(record: &Record, today: NaiveDate) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
            email: record.email().map(ToString::to_string),
            address: record.address().map(ToString::to_string),
            days_to_birthday: record
                .birthday()
                .map(|b| days_to_birthday(b.date(), today).to_string()),
        }
    }
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let mut record = Record::new(&args.name)?;
    for phone in &args.phone {
        record.add_phone(phone)?;
    }
    if let Some(birthday) = &args.birthday {
        record.set_birthday(birthday)?;
    }
    if let Some(email) = &args.email {
        record.set_email(email)?;
    }
    if let Some(address) = &args.address {
        record.set_address(address);
    }

    let detail = ctx
        .json
        .then(|| ContactDetail::from_record(&record, today()));
    ctx.store.contacts.add_record(record);
    ctx.store.persist()?;

    match detail {
        Some(detail) => print_json(&detail)?,
        None => println!("created {}", args.name),
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    if args.birthday.is_none() && args.email.is_none() && args.address.is_none() {
        return Err(invalid_input("no updates provided"));
    }

    let record = ctx
        .store
        .contacts
        .find_mut(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    if let Some(birthday) = &args.birthday {
        record.set_birthday(birthday)?;
    }
    if let Some(email) = &args.email {
        record.set_email(email)?;
    }
    if let Some(address) = &args.address {
        record.set_address(address);
    }
    let detail = ctx
        .json
        .then(|| ContactDetail::from_record(record, today()));
    ctx.store.persist()?;

    match detail {
        Some(detail) => print_json(&detail)?,
        None => println!("updated {}", args.name),
    }
    Ok(())
}

pub fn rename_contact(ctx: &mut Context<'_>, args: RenameContactArgs) -> Result<()> {
    ctx.store.contacts.rename(&args.old, &args.new)?;
    ctx.store.persist()?;
    if !ctx.json {
        println!("renamed {} to {}", args.old, args.new);
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteContactArgs) -> Result<()> {
    if !ctx.store.contacts.delete(&args.name) {
        return Err(not_found(format!("contact {}", args.name)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("deleted {}", args.name);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let record = ctx
        .store
        .contacts
        .find(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    if ctx.json {
        print_json(&ContactDetail::from_record(record, today()))?;
    } else {
        print_record(record, today());
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let today = today();
    if ctx.json {
        let items: Vec<ContactDetail> = ctx
            .store
            .contacts
            .iter()
            .map(|r| ContactDetail::from_record(r, today))
            .collect();
        return print_json(&items);
    }

    if ctx.store.contacts.is_empty() {
        println!("{}", "no contacts".dim());
        return Ok(());
    }

    let page_size = args.page_size.unwrap_or(ctx.config.page_size);
    if page_size < 1 {
        return Err(invalid_input("page size must be at least 1"));
    }
    for (index, page) in ctx.store.contacts.pages(page_size).enumerate() {
        if index > 0 {
            println!("{}", "--".dim());
        }
        for record in page {
            println!("{}", record_row(record, today));
        }
    }
    Ok(())
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let hits = ctx.store.contacts.search(&args.query)?;
    let today = today();
    if ctx.json {
        let items: Vec<ContactDetail> = hits
            .iter()
            .map(|r| ContactDetail::from_record(r, today))
            .collect();
        return print_json(&items);
    }
    if hits.is_empty() {
        println!("{}", "no matches found".dim());
        return Ok(());
    }
    for record in hits {
        println!("{}", record_row(record, today));
    }
    Ok(())
}

pub fn add_phone(ctx: &mut Context<'_>, args: AddPhoneArgs) -> Result<()> {
    let record = ctx
        .store
        .contacts
        .find_mut(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    record.add_phone(&args.phone)?;
    ctx.store.persist()?;
    if !ctx.json {
        println!("added phone {} to {}", args.phone, args.name);
    }
    Ok(())
}

pub fn remove_phone(ctx: &mut Context<'_>, args: RemovePhoneArgs) -> Result<()> {
    let record = ctx
        .store
        .contacts
        .find_mut(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    if !record.remove_phone(&args.phone) {
        return Err(not_found(format!("phone {}", args.phone)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("removed phone {} from {}", args.phone, args.name);
    }
    Ok(())
}

pub fn edit_phone(ctx: &mut Context<'_>, args: EditPhoneArgs) -> Result<()> {
    let record = ctx
        .store
        .contacts
        .find_mut(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    if !record.edit_phone(&args.old, &args.new)? {
        return Err(not_found(format!("phone {}", args.old)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("replaced phone {} with {}", args.old, args.new);
    }
    Ok(())
}

pub fn clear_field(ctx: &mut Context<'_>, args: ClearFieldArgs) -> Result<()> {
    let record = ctx
        .store
        .contacts
        .find_mut(&args.name)
        .ok_or_else(|| not_found(format!("contact {}", args.name)))?;
    let cleared = match args.field {
        ClearableField::Birthday => record.clear_birthday(),
        ClearableField::Email => record.clear_email(),
        ClearableField::Address => record.clear_address(),
    };
    if !cleared {
        return Err(not_found(format!("{} on {}", args.field.label(), args.name)));
    }
    ctx.store.persist()?;
    if !ctx.json {
        println!("cleared {} on {}", args.field.label(), args.name);
    }
    Ok(())
}
