//! Main menu loop
//!
//! One menu choice runs one command. Domain rejections are printed by the
//! commands themselves; only I/O failures end the loop early.

use anyhow::Result;
use minibank_business::Registry;
use std::io::{BufRead, Write};

use crate::commands::{account, month_end, teller, transfer};
use crate::console::{Console, EndOfInput};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    OpenAccount,
    Transfer,
    Teller,
    MonthEnd,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(MenuOption::OpenAccount),
            2 => Some(MenuOption::Transfer),
            3 => Some(MenuOption::Teller),
            4 => Some(MenuOption::MonthEnd),
            5 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("")?;
    console.say("=== 🏦 MINIBANK MAIN MENU ===")?;
    console.say("1. Open account")?;
    console.say("2. Transfers")?;
    console.say("3. ATM / teller")?;
    console.say("4. Month-end close (account statements)")?;
    console.say("5. Exit")
}

/// Run the menu until the customer exits or input ends
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    match menu_loop(console, registry) {
        Err(err) if err.downcast_ref::<EndOfInput>().is_some() => {
            tracing::debug!("Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn menu_loop<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    loop {
        print_menu(console)?;
        let choice: u32 = console.number("Select an option: ")?;

        match MenuOption::from_choice(choice) {
            Some(MenuOption::OpenAccount) => account::open(console, registry)?,
            Some(MenuOption::Transfer) => transfer::run(console, registry)?,
            Some(MenuOption::Teller) => teller::run(console, registry)?,
            Some(MenuOption::MonthEnd) => month_end::run(console, registry)?,
            Some(MenuOption::Exit) => {
                console.say("👋 Thank you for banking with us.")?;
                return Ok(());
            }
            None => console.say("❌ Invalid option.")?,
        }
    }
}
