//! Month-end close for every account

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::{format_money, AccountKind};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::console::Console;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    if registry.is_empty() {
        return console.say("⚠️ No accounts registered.");
    }

    for entry in registry.run_month_end() {
        let settlement = entry.settlement;
        console.say("")?;
        console.say("=== Account statement ===")?;
        console.say(entry.statement)?;

        match settlement.kind {
            AccountKind::Savings => {
                console.say("🏦 Month-end close (Savings account):")?;
                console.say(format!(
                    "Interest earned: {}",
                    format_money(settlement.adjustment)
                ))?;
            }
            AccountKind::Checking => {
                let percent = (settlement.rate * Decimal::ONE_HUNDRED).normalize();
                console.say("🏦 Month-end close (Checking account):")?;
                console.say(format!("A monthly rate of {}% was deducted.", percent))?;
                console.say(format!(
                    "Amount deducted: {}",
                    format_money(settlement.adjustment)
                ))?;
            }
        }
        console.say(format!("New balance: {}", format_money(settlement.balance)))?;
    }
    Ok(())
}
