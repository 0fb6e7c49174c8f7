use crate::commands::{print_json, Context};
use crate::terminal::Colorize;
use crate::util::{parse_date, today};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use rolo_core::rules::{falls_on, upcoming_within, validate_window_days};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Birthdays falling exactly on the given date
    #[arg(long, value_name = "YYYY.MM.DD", conflicts_with_all = ["within", "week"])]
    pub on: Option<String>,
    /// Birthdays in the next N days (1..=365)
    #[arg(long, value_name = "DAYS", conflicts_with = "week")]
    pub within: Option<i64>,
    /// Birthdays in the next 7 days, grouped by weekday
    #[arg(long)]
    pub week: bool,
}

#[derive(Debug, Serialize)]
struct UpcomingBirthday {
    name: String,
    birthday: String,
    occurrence: String,
    days: i64,
}

#[derive(Debug, Serialize)]
struct WeekdayBucket {
    weekday: String,
    names: Vec<String>,
}

pub fn birthdays(ctx: &Context<'_>, args: BirthdaysArgs) -> Result<()> {
    if args.week {
        return this_week(ctx);
    }
    if let Some(days) = args.within {
        return within(ctx, days);
    }
    let date = match &args.on {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };
    on_date(ctx, date)
}

fn on_date(ctx: &Context<'_>, date: NaiveDate) -> Result<()> {
    let names: Vec<String> = ctx
        .store
        .contacts
        .iter()
        .filter(|record| {
            record
                .birthday()
                .is_some_and(|b| falls_on(b.date(), date))
        })
        .map(|record| record.name().as_str().to_string())
        .collect();

    if ctx.json {
        return print_json(&names);
    }
    if names.is_empty() {
        println!("{}", "no birthdays on this day".dim());
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn within(ctx: &Context<'_>, days: i64) -> Result<()> {
    let days = validate_window_days(days)?;
    let today = today();
    let upcoming: Vec<UpcomingBirthday> = collect_upcoming(ctx, today, days)
        .into_iter()
        .map(|(_, item)| item)
        .collect();

    if ctx.json {
        return print_json(&upcoming);
    }
    if upcoming.is_empty() {
        println!("{}", "no birthdays during this period".dim());
        return Ok(());
    }
    for item in upcoming {
        let days_label = if item.days == 0 {
            String::from("today")
        } else {
            format!("in {} days", item.days)
        };
        println!("{} | {} | {}", item.name, item.birthday, days_label);
    }
    Ok(())
}

fn this_week(ctx: &Context<'_>) -> Result<()> {
    let today = today();
    let upcoming = collect_upcoming(ctx, today, 7);

    // Bucket by the occurrence's weekday, in date order.
    let mut buckets: Vec<(NaiveDate, WeekdayBucket)> = Vec::new();
    for (occurrence, item) in upcoming {
        match buckets.iter_mut().find(|(date, _)| *date == occurrence) {
            Some((_, bucket)) => bucket.names.push(item.name),
            None => buckets.push((
                occurrence,
                WeekdayBucket {
                    weekday: occurrence.format("%A").to_string(),
                    names: vec![item.name],
                },
            )),
        }
    }
    buckets.sort_by_key(|(date, _)| *date);
    let buckets: Vec<WeekdayBucket> = buckets.into_iter().map(|(_, bucket)| bucket).collect();

    if ctx.json {
        return print_json(&buckets);
    }
    if buckets.is_empty() {
        println!("{}", "no birthdays this week".dim());
        return Ok(());
    }
    for bucket in buckets {
        println!("{}: {}", bucket.weekday.info(), bucket.names.join(", "));
    }
    Ok(())
}

fn collect_upcoming(
    ctx: &Context<'_>,
    today: NaiveDate,
    days: i64,
) -> Vec<(NaiveDate, UpcomingBirthday)> {
    let mut upcoming = Vec::new();
    for record in ctx.store.contacts.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        if let Some((occurrence, days)) = upcoming_within(birthday.date(), today, days) {
            upcoming.push((
                occurrence,
                UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday: birthday.to_string(),
                    occurrence: occurrence.format("%Y.%m.%d").to_string(),
                    days,
                },
            ));
        }
    }
    upcoming
}
