//! ATM and teller operations on one account

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::{format_money, AtmChannel};
use std::io::{BufRead, Write};

use super::print_accounts;
use crate::console::Console;

/// Teller sub-menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TellerOption {
    Withdraw(AtmChannel),
    Deposit,
    IssueCheck,
}

impl TellerOption {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(TellerOption::Withdraw(AtmChannel::OwnAtm)),
            2 => Some(TellerOption::Withdraw(AtmChannel::ExternalAtm)),
            3 => Some(TellerOption::Deposit),
            4 => Some(TellerOption::IssueCheck),
            _ => None,
        }
    }
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, registry: &mut Registry) -> Result<()> {
    if registry.is_empty() {
        return console.say("⚠️ No accounts registered.");
    }

    console.say("")?;
    console.say("Select the account:")?;
    print_accounts(console, registry)?;
    let position: usize = console.number("Account: ")?;

    console.say("")?;
    console.say("=== ATM / Teller ===")?;
    console.say("1. Withdraw at a bank ATM")?;
    console.say("2. Withdraw at an external ATM")?;
    console.say("3. Deposit")?;
    console.say("4. Issue check")?;
    let choice: u32 = console.number("Select an option: ")?;
    let Some(option) = TellerOption::from_choice(choice) else {
        return console.say("❌ Invalid option.");
    };

    let amount = console.amount("Amount: ")?;

    match option {
        TellerOption::Withdraw(channel) => match registry.withdraw(position, amount, channel) {
            Ok(receipt) => {
                if receipt.commission_applied() {
                    console.say(format!(
                        "🏧 External ATM withdrawal. Commission of {} applied.",
                        format_money(receipt.commission)
                    ))?;
                } else {
                    console.say("💸 Withdrawal at a bank ATM. No commission.")?;
                }
                console.say(format!("Amount withdrawn: {}", format_money(receipt.amount)))?;
                console.say(format!("New balance: {}", format_money(receipt.balance)))
            }
            Err(err) => console.say(format!("❌ {}", err)),
        },
        TellerOption::Deposit => match registry.deposit(position, amount) {
            Ok(receipt) => {
                console.say(format!("💰 Deposit commission tier {}.", receipt.tier))?;
                console.say(format!(
                    "💸 Commission charged: {}",
                    format_money(receipt.commission)
                ))?;
                console.say(format!("Net credited: {}", format_money(receipt.net_credit())))?;
                console.say(format!(
                    "✅ Deposit successful. New balance: {}",
                    format_money(receipt.balance)
                ))
            }
            Err(err) => console.say(format!("❌ {}", err)),
        },
        TellerOption::IssueCheck => match registry.issue_check(position, amount) {
            Ok(receipt) => {
                console.say(format!("🧾 Check issued for {}", format_money(receipt.amount)))?;
                console.say(format!("Check fee: {}", format_money(receipt.surcharge)))?;
                console.say(format!("New balance: {}", format_money(receipt.balance)))
            }
            Err(err) => console.say(format!("❌ {}", err)),
        },
    }
}
