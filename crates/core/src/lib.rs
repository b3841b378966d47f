//! # Minibank Core
//!
//! Domain types for the Minibank console:
//! - `Customer`: account holder identity (name, age, guardian for minors)
//! - `Account`: balance, kind and the deposit/withdraw/check/settlement rules
//! - `Tariff`: every fee threshold and rate, loadable from JSON
//! - `TransferQuote`: two-phase transfer (quote, then commit or decline)

pub mod account;
pub mod customer;
pub mod error;
pub mod money;
pub mod tariff;
pub mod transfer;

pub use account::{
    Account, AccountKind, AtmChannel, CheckReceipt, DepositReceipt, SettlementReceipt,
    WithdrawalReceipt,
};
pub use customer::Customer;
pub use error::{CoreError, CoreResult};
pub use money::{format_amount, format_money};
pub use tariff::{DepositTierRule, Tariff};
pub use transfer::{Confirmation, TransferOutcome, TransferQuote, TransferReceipt};
