//! Month-end run over every account
//!
//! Each account's statement is captured before its settlement is applied,
//! in registry order.

use crate::registry::Registry;
use minibank_core::SettlementReceipt;

/// Statement and settlement of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthEndEntry {
    /// 1-based position
    pub position: usize,
    /// Account as it stood before settlement
    pub statement: String,
    pub settlement: SettlementReceipt,
}

impl Registry {
    /// Settle every account for the month, in opening order.
    pub fn run_month_end(&mut self) -> Vec<MonthEndEntry> {
        let (accounts, tariff) = self.accounts_mut();

        let entries: Vec<MonthEndEntry> = accounts
            .iter_mut()
            .enumerate()
            .map(|(i, account)| {
                let statement = account.to_string();
                let settlement = account.settle_month(tariff);
                MonthEndEntry {
                    position: i + 1,
                    statement,
                    settlement,
                }
            })
            .collect();

        tracing::info!(accounts = entries.len(), "Month-end run completed");
        entries
    }
}
