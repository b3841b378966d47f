//! Transfers between registered accounts, with confirmation

use anyhow::Result;
use minibank_business::transfer::MIN_ACCOUNTS_FOR_TRANSFER;
use minibank_business::Registry;
use minibank_core::{format_money, Confirmation, TransferOutcome};
use std::io::{BufRead, Write};

use super::print_accounts;
use crate::console::Console;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    if registry.len() < MIN_ACCOUNTS_FOR_TRANSFER {
        return console.say("⚠️ At least two accounts must be registered.");
    }

    console.say("")?;
    console.say("Available accounts:")?;
    print_accounts(console, registry)?;

    let from: usize = console.number("Source account: ")?;
    let to: usize = console.number("Destination account: ")?;
    let amount = console.amount("Amount to transfer: ")?;

    let pending = match registry.propose_transfer(from, to, amount) {
        Ok(pending) => pending,
        Err(err) => return console.say(format!("❌ {}", err)),
    };

    let quote = pending.quote;
    let rate = registry.tariff().transfer_rate * rust_decimal::Decimal::ONE_HUNDRED;
    console.say("")?;
    console.say(format!("📤 Transfer to: {}", pending.recipient))?;
    console.say(format!("Amount to transfer: {}", format_money(quote.amount)))?;
    console.say(format!(
        "💸 Commission ({}%): {}",
        rate.normalize(),
        format_money(quote.commission)
    ))?;
    console.say(format!(
        "Total to be debited from your account: {}",
        format_money(quote.total)
    ))?;
    let answer = console.line("Do you want to continue with the transfer? (y/n): ")?;

    match registry.commit_transfer(&pending, Confirmation::from_answer(&answer)) {
        Ok(TransferOutcome::Completed(receipt)) => {
            console.say(format!(
                "✅ Transfer of {} completed",
                format_money(receipt.quote.amount)
            ))?;
            console.say(format!(
                "💸 Commission charged: {}",
                format_money(receipt.quote.commission)
            ))?;
            console.say(format!(
                "New balance in your account: {}",
                format_money(receipt.source_balance)
            ))
        }
        Ok(TransferOutcome::Declined) => console.say("🚫 Transfer cancelled by the customer."),
        Err(err) => {
            let available = registry
                .account(pending.from)
                .map(|account| account.balance())
                .unwrap_or_default();
            console.say(format!("❌ {}", err))?;
            console.say(format!("Available balance: {}", format_money(available)))
        }
    }
}
