use super::{attempt, prompt_optional, Menu, Outcome, Session};
use crate::commands::{self, birthdays::BirthdaysArgs};
use crate::terminal::Colorize;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

pub struct BirthdaysMenu;

impl Menu for BirthdaysMenu {
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Birthdays")
            .items(&["Today", "This week", "Next N days", "Back"])
            .default(0)
            .interact()?;
        let args = match choice {
            0 => BirthdaysArgs {
                on: None,
                within: None,
                week: false,
            },
            1 => BirthdaysArgs {
                on: None,
                within: None,
                week: true,
            },
            2 => {
                let days: i64 = match prompt_optional("How many days ahead?")? {
                    Some(raw) => match raw.parse() {
                        Ok(days) => days,
                        Err(_) => {
                            println!("{}", format!("not a number: {raw}").warning());
                            return Ok(Outcome::Continue);
                        }
                    },
                    None => session.config.upcoming_days,
                };
                BirthdaysArgs {
                    on: None,
                    within: Some(days),
                    week: false,
                }
            }
            _ => return Ok(Outcome::Back),
        };
        let ctx = commands::Context {
            store: &mut *session.store,
            json: false,
            config: session.config,
        };
        attempt(commands::birthdays::birthdays(&ctx, args))
    }
}
