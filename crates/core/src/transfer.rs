//! Transfers between accounts
//!
//! A transfer is quoted first so the customer sees the commission, then
//! executed with the customer's answer. Declining is a normal outcome, not
//! an error. The commission is charged to the source on top of the amount
//! and is not credited anywhere.

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use crate::tariff::Tariff;
use rust_decimal::Decimal;

/// Price of a transfer, shown to the customer before confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferQuote {
    pub amount: Decimal,
    pub commission: Decimal,
    /// Amount plus commission, debited from the source
    pub total: Decimal,
}

/// Customer's answer to a transfer quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Interpret a typed answer. Only an explicit yes confirms.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "s" | "si" | "sí" => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        }
    }
}

/// Balances after a completed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub quote: TransferQuote,
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}

/// How a confirmed-or-declined transfer ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed(TransferReceipt),
    Declined,
}

impl TransferOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransferOutcome::Completed(_))
    }
}

impl TransferQuote {
    /// Price a transfer. Rejects non-positive amounts and totals past the
    /// representable range.
    pub fn new(amount: Decimal, tariff: &Tariff) -> CoreResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        let commission = tariff
            .transfer_commission(amount)
            .ok_or(CoreError::AmountOverflow(amount))?;
        let total = amount
            .checked_add(commission)
            .ok_or(CoreError::AmountOverflow(amount))?;
        Ok(Self {
            amount,
            commission,
            total,
        })
    }

    /// Apply the quote between two accounts.
    ///
    /// Both balances change or neither does. Funds are checked only after the
    /// customer confirms, against the source balance at that moment.
    pub fn execute(
        &self,
        source: &mut Account,
        destination: &mut Account,
        confirmation: Confirmation,
    ) -> CoreResult<TransferOutcome> {
        if confirmation == Confirmation::Declined {
            tracing::debug!(amount = %self.amount, "Transfer declined by customer");
            return Ok(TransferOutcome::Declined);
        }

        let destination_balance = destination.credited(self.amount)?;
        source.debit(self.total)?;
        destination.set_balance(destination_balance);

        tracing::debug!(
            amount = %self.amount,
            commission = %self.commission,
            source_balance = %source.balance(),
            destination_balance = %destination.balance(),
            "Transfer completed"
        );

        Ok(TransferOutcome::Completed(TransferReceipt {
            quote: *self,
            source_balance: source.balance(),
            destination_balance: destination.balance(),
        }))
    }
}
