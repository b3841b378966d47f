//! Menu commands, one module per main-menu entry

pub mod account;
pub mod month_end;
pub mod teller;
pub mod transfer;

use anyhow::Result;
use minibank_business::Registry;
use std::io::{BufRead, Write};

use crate::console::Console;

/// Print the numbered account picker
pub(crate) fn print_accounts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> Result<()> {
    for summary in registry.list_accounts() {
        console.say(format!("{}. {}", summary.position, summary.holder))?;
    }
    Ok(())
}
