use crate::error::invalid_input;
use crate::terminal::Colorize;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rolo_core::rules::days_to_birthday;
use rolo_core::{Note, Record, BIRTHDAY_FORMAT};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
        .map_err(|_| invalid_input(format!("invalid date {raw:?}: expected YYYY.MM.DD")))
}

pub fn phones_column(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn countdown_column(record: &Record, today: NaiveDate) -> String {
    match record.birthday() {
        Some(birthday) => days_to_birthday(birthday.date(), today).to_string(),
        None => String::from("-"),
    }
}

fn optional_column(value: Option<String>) -> String {
    value.unwrap_or_else(|| String::from("-"))
}

/// One line per record: name, phones, birthday, email, address, countdown.
pub fn record_row(record: &Record, today: NaiveDate) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        record.name().as_str(),
        phones_column(record),
        optional_column(record.birthday().map(ToString::to_string)),
        optional_column(record.email().map(ToString::to_string)),
        optional_column(record.address().map(ToString::to_string)),
        countdown_column(record, today),
    )
}

pub fn print_record(record: &Record, today: NaiveDate) {
    println!("{}", record.name().as_str().info());
    println!("  phones:   {}", phones_column(record));
    println!(
        "  birthday: {}",
        optional_column(record.birthday().map(ToString::to_string))
    );
    println!(
        "  email:    {}",
        optional_column(record.email().map(ToString::to_string))
    );
    println!(
        "  address:  {}",
        optional_column(record.address().map(ToString::to_string))
    );
    if record.birthday().is_some() {
        println!(
            "  days to birthday: {}",
            countdown_column(record, today)
        );
    }
}

pub fn note_row(note: &Note) -> String {
    if note.tags.is_empty() {
        note.content.clone()
    } else {
        format!("{} {}", note.content, format!("[{}]", note.tags.join(", ")).dim())
    }
}
