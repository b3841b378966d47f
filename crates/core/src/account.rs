//! # Account Module
//!
//! An account owns one customer and one balance. Every balance change goes
//! through the operations below, and each one either applies completely or
//! returns an error with the balance untouched.
//!
//! Savings and checking accounts share deposit, withdrawal and transfer rules
//! and differ only in month-end settlement and check issuance.

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::format_money;
use crate::tariff::Tariff;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of account, selects the month-end rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Earns monthly interest
    Savings,
    /// Pays monthly maintenance, can issue checks
    Checking,
}

impl AccountKind {
    /// Code string
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
        }
    }

    /// Label shown on statements
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        }
    }

    /// Minimum amount needed to open an account of this kind
    pub fn minimum_opening(&self, tariff: &Tariff) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::ZERO,
            AccountKind::Checking => tariff.checking_minimum_opening,
        }
    }

    /// Whether checks can be drawn on this kind
    pub fn issues_checks(&self) -> bool {
        matches!(self, AccountKind::Checking)
    }
}

impl FromStr for AccountKind {
    type Err = CoreError;

    /// Parse a typed account kind. Accepts the legacy branch labels too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" | "ahorros" => Ok(AccountKind::Savings),
            "checking" | "corriente" => Ok(AccountKind::Checking),
            other => Err(CoreError::UnknownAccountKind(other.to_string())),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a cash withdrawal happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmChannel {
    /// The bank's own machine, free of charge
    OwnAtm,
    /// Another bank's machine, flat fee
    ExternalAtm,
}

impl AtmChannel {
    /// Fee charged for a withdrawal through this channel
    pub fn fee(&self, tariff: &Tariff) -> Decimal {
        match self {
            AtmChannel::OwnAtm => Decimal::ZERO,
            AtmChannel::ExternalAtm => tariff.external_atm_fee,
        }
    }
}

/// Result of a successful deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: Decimal,
    /// 1-based commission tier
    pub tier: usize,
    pub commission: Decimal,
    pub balance: Decimal,
}

impl DepositReceipt {
    /// Amount actually added to the balance (may be negative)
    pub fn net_credit(&self) -> Decimal {
        self.amount - self.commission
    }
}

/// Result of a successful withdrawal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    pub amount: Decimal,
    pub channel: AtmChannel,
    pub commission: Decimal,
    pub balance: Decimal,
}

impl WithdrawalReceipt {
    pub fn commission_applied(&self) -> bool {
        !self.commission.is_zero()
    }
}

/// Result of a successful check issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReceipt {
    pub amount: Decimal,
    pub surcharge: Decimal,
    pub balance: Decimal,
}

/// Result of a month-end settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub kind: AccountKind,
    /// Rate applied for the month
    pub rate: Decimal,
    /// Interest credited (savings) or maintenance deducted (checking)
    pub adjustment: Decimal,
    pub balance: Decimal,
}

/// A customer's account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    owner: Customer,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    /// Open an account funded with `opening_amount`.
    ///
    /// The opening amount is credited without commission. Checking accounts
    /// require the tariff's minimum opening amount.
    pub fn open(
        owner: Customer,
        kind: AccountKind,
        opening_amount: Decimal,
        tariff: &Tariff,
    ) -> CoreResult<Self> {
        if opening_amount < Decimal::ZERO {
            return Err(CoreError::InvalidAmount(opening_amount));
        }

        let minimum = kind.minimum_opening(tariff);
        if opening_amount < minimum {
            return Err(CoreError::BelowMinimumOpening {
                minimum,
                offered: opening_amount,
            });
        }

        tracing::debug!(
            owner = %owner.full_name(),
            kind = %kind,
            opening = %opening_amount,
            "Account opened"
        );

        Ok(Self {
            owner,
            kind,
            balance: opening_amount,
        })
    }

    pub fn owner(&self) -> &Customer {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Label used in account pickers
    pub fn holder_name(&self) -> String {
        self.owner.full_name()
    }

    /// Deposit with tiered commission.
    ///
    /// The commission is taken from the deposit, so the flat first-tier fee
    /// can exceed a very small deposit. Such a deposit is accepted only when
    /// the balance covers the difference.
    pub fn deposit(&mut self, amount: Decimal, tariff: &Tariff) -> CoreResult<DepositReceipt> {
        ensure_positive(amount)?;

        let (tier, rule) = tariff.deposit_tier(amount).ok_or_else(|| {
            CoreError::InvalidTariff(format!("no deposit tier covers {}", amount))
        })?;
        let mut commission = rule
            .commission(amount)
            .ok_or(CoreError::AmountOverflow(amount))?;
        if tariff.cap_deposit_commission {
            commission = commission.min(amount);
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .and_then(|b| b.checked_sub(commission))
            .ok_or(CoreError::AmountOverflow(amount))?;
        if new_balance < Decimal::ZERO {
            return Err(CoreError::insufficient_funds(
                commission - amount,
                self.balance,
            ));
        }
        self.balance = new_balance;

        tracing::debug!(
            amount = %amount,
            tier,
            commission = %commission,
            balance = %self.balance,
            "Deposit applied"
        );

        Ok(DepositReceipt {
            amount,
            tier,
            commission,
            balance: self.balance,
        })
    }

    /// Cash withdrawal through an ATM.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        channel: AtmChannel,
        tariff: &Tariff,
    ) -> CoreResult<WithdrawalReceipt> {
        ensure_positive(amount)?;

        let commission = channel.fee(tariff);
        self.debit(total_with_fee(amount, commission)?)?;

        tracing::debug!(
            amount = %amount,
            channel = ?channel,
            commission = %commission,
            balance = %self.balance,
            "Withdrawal applied"
        );

        Ok(WithdrawalReceipt {
            amount,
            channel,
            commission,
            balance: self.balance,
        })
    }

    /// Draw a check. Only checking accounts issue checks.
    pub fn issue_check(&mut self, amount: Decimal, tariff: &Tariff) -> CoreResult<CheckReceipt> {
        if !self.kind.issues_checks() {
            return Err(CoreError::ChecksNotSupported(self.kind));
        }
        ensure_positive(amount)?;

        let surcharge = tariff.check_fee;
        self.debit(total_with_fee(amount, surcharge)?)?;

        tracing::debug!(
            amount = %amount,
            surcharge = %surcharge,
            balance = %self.balance,
            "Check issued"
        );

        Ok(CheckReceipt {
            amount,
            surcharge,
            balance: self.balance,
        })
    }

    /// Month-end settlement: savings earn a twelfth of the annual rate,
    /// checking pays the monthly maintenance rate.
    ///
    /// Interest that would push the balance past the largest representable
    /// amount is not credited.
    pub fn settle_month(&mut self, tariff: &Tariff) -> SettlementReceipt {
        let (rate, adjustment) = match self.kind {
            AccountKind::Savings => {
                let rate = tariff.savings_monthly_rate();
                let settled = self.balance.checked_mul(rate).and_then(|interest| {
                    Some((interest, self.balance.checked_add(interest)?))
                });
                match settled {
                    Some((interest, balance)) => {
                        self.balance = balance;
                        (rate, interest)
                    }
                    None => {
                        tracing::warn!(balance = %self.balance, "Interest skipped, balance out of range");
                        (rate, Decimal::ZERO)
                    }
                }
            }
            AccountKind::Checking => {
                let rate = tariff.checking_monthly_rate;
                let deduction = self
                    .balance
                    .checked_mul(rate)
                    .unwrap_or(self.balance)
                    .min(self.balance);
                self.balance -= deduction;
                (rate, deduction)
            }
        };

        tracing::debug!(
            kind = %self.kind,
            adjustment = %adjustment,
            balance = %self.balance,
            "Month-end settled"
        );

        SettlementReceipt {
            kind: self.kind,
            rate,
            adjustment,
            balance: self.balance,
        }
    }

    /// Remove funds, refusing to go below zero
    pub(crate) fn debit(&mut self, total: Decimal) -> CoreResult<()> {
        if total > self.balance {
            return Err(CoreError::insufficient_funds(total, self.balance));
        }
        self.balance -= total;
        Ok(())
    }

    /// Balance after adding `amount`, without applying it
    pub(crate) fn credited(&self, amount: Decimal) -> CoreResult<Decimal> {
        self.balance
            .checked_add(amount)
            .ok_or(CoreError::AmountOverflow(amount))
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.owner)?;
        writeln!(f, "Account type: {}", self.kind.label())?;
        write!(f, "Current balance: {}", format_money(self.balance))
    }
}

fn total_with_fee(amount: Decimal, fee: Decimal) -> CoreResult<Decimal> {
    amount
        .checked_add(fee)
        .ok_or(CoreError::AmountOverflow(amount))
}

fn ensure_positive(amount: Decimal) -> CoreResult<()> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(amount));
    }
    Ok(())
}
