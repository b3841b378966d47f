//! Two-phase transfers between registered accounts
//!
//! `propose_transfer` prices the transfer and pins both accounts. The
//! customer then confirms or declines and `commit_transfer` applies the
//! answer. Nothing changes before the commit.

use crate::error::{BusinessError, BusinessResult};
use crate::registry::Registry;
use minibank_core::{Confirmation, TransferOutcome, TransferQuote};

/// Minimum number of accounts for a transfer
pub const MIN_ACCOUNTS_FOR_TRANSFER: usize = 2;

/// A priced transfer waiting for the customer's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransfer {
    /// 1-based source position
    pub from: usize,
    /// 1-based destination position
    pub to: usize,
    /// Holder name of the destination, shown when asking for confirmation
    pub recipient: String,
    pub quote: TransferQuote,
}

impl Registry {
    /// Price a transfer between two registered accounts.
    pub fn propose_transfer(
        &self,
        from: usize,
        to: usize,
        amount: rust_decimal::Decimal,
    ) -> BusinessResult<PendingTransfer> {
        if self.len() < MIN_ACCOUNTS_FOR_TRANSFER {
            return Err(BusinessError::not_enough_accounts(
                MIN_ACCOUNTS_FOR_TRANSFER,
                self.len(),
            ));
        }
        if from == to {
            return Err(BusinessError::SameAccountTransfer);
        }
        self.account(from)?;
        let recipient = self.account(to)?.holder_name();

        let quote = TransferQuote::new(amount, self.tariff())
            .inspect_err(|e| tracing::warn!(from, to, error = %e, "Transfer rejected"))?;

        Ok(PendingTransfer {
            from,
            to,
            recipient,
            quote,
        })
    }

    /// Apply the customer's answer to a pending transfer.
    pub fn commit_transfer(
        &mut self,
        pending: &PendingTransfer,
        confirmation: Confirmation,
    ) -> BusinessResult<TransferOutcome> {
        let (source, destination, _) = self.pair_mut(pending.from, pending.to)?;
        let outcome = pending
            .quote
            .execute(source, destination, confirmation)
            .inspect_err(|e| {
                tracing::warn!(from = pending.from, to = pending.to, error = %e, "Transfer rejected")
            })?;

        if outcome.is_completed() {
            tracing::info!(
                from = pending.from,
                to = pending.to,
                amount = %pending.quote.amount,
                "Transfer committed"
            );
        }
        Ok(outcome)
    }
}
