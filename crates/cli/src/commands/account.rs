//! Account opening

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::Customer;
use std::io::{BufRead, Write};

use crate::console::Console;

/// Collect customer data and open an account
pub fn open<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    let given_names = console.text("Given names: ")?;
    let family_names = console.text("Family names: ")?;
    let age: u32 = console.number("Age: ")?;
    let guardian = if age < minibank_core::customer::ADULT_AGE {
        Some(console.text("Guardian's name: ")?)
    } else {
        None
    };

    let customer = match Customer::new(given_names, family_names, age, guardian) {
        Ok(customer) => customer,
        Err(err) => return console.say(format!("❌ {}", err)),
    };

    let kind = console.text("Account type (savings/checking): ")?;
    let opening_amount = console.amount("Opening amount: ")?;

    match registry.open_account_by_label(customer, &kind, opening_amount) {
        Ok(account) => {
            let details = account.to_string();
            console.say("✅ Account opened:")?;
            console.say(details)
        }
        Err(err) => console.say(format!("❌ {}", err)),
    }
}
