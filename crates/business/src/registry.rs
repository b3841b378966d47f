//! Account registry
//!
//! Holds open accounts in opening order. Positions shown to the customer are
//! 1-based; accounts are never removed, so a position stays valid for the
//! whole session.

use crate::error::{BusinessError, BusinessResult};
use minibank_core::{
    Account, AccountKind, AtmChannel, CheckReceipt, Customer, DepositReceipt, Tariff,
    WithdrawalReceipt,
};
use rust_decimal::Decimal;

/// One line of the account picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    /// 1-based position
    pub position: usize,
    pub holder: String,
}

/// Every account opened during the session, plus the tariff they run on.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    accounts: Vec<Account>,
    tariff: Tariff,
}

impl Registry {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            accounts: Vec::new(),
            tariff,
        }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Open an account and append it to the registry
    pub fn open_account(
        &mut self,
        customer: Customer,
        kind: AccountKind,
        opening_amount: Decimal,
    ) -> BusinessResult<&Account> {
        let account = Account::open(customer, kind, opening_amount, &self.tariff)
            .inspect_err(|e| tracing::warn!(kind = %kind, error = %e, "Account opening rejected"))?;

        self.accounts.push(account);
        tracing::info!(
            position = self.accounts.len(),
            kind = %kind,
            "Account registered"
        );
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Open an account from a typed account-kind label
    pub fn open_account_by_label(
        &mut self,
        customer: Customer,
        kind_label: &str,
        opening_amount: Decimal,
    ) -> BusinessResult<&Account> {
        let kind: AccountKind = kind_label.parse()?;
        self.open_account(customer, kind, opening_amount)
    }

    /// Positions and holder names, in opening order
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .enumerate()
            .map(|(i, account)| AccountSummary {
                position: i + 1,
                holder: account.holder_name(),
            })
            .collect()
    }

    /// Look up an account by 1-based position
    pub fn account(&self, position: usize) -> BusinessResult<&Account> {
        position
            .checked_sub(1)
            .and_then(|i| self.accounts.get(i))
            .ok_or(BusinessError::AccountNotFound(position))
    }

    pub fn deposit(&mut self, position: usize, amount: Decimal) -> BusinessResult<DepositReceipt> {
        let (account, tariff) = self.account_mut(position)?;
        let receipt = account
            .deposit(amount, tariff)
            .inspect_err(|e| tracing::warn!(position, error = %e, "Deposit rejected"))?;
        Ok(receipt)
    }

    pub fn withdraw(
        &mut self,
        position: usize,
        amount: Decimal,
        channel: AtmChannel,
    ) -> BusinessResult<WithdrawalReceipt> {
        let (account, tariff) = self.account_mut(position)?;
        let receipt = account
            .withdraw(amount, channel, tariff)
            .inspect_err(|e| tracing::warn!(position, error = %e, "Withdrawal rejected"))?;
        Ok(receipt)
    }

    pub fn issue_check(&mut self, position: usize, amount: Decimal) -> BusinessResult<CheckReceipt> {
        let (account, tariff) = self.account_mut(position)?;
        let receipt = account
            .issue_check(amount, tariff)
            .inspect_err(|e| tracing::warn!(position, error = %e, "Check rejected"))?;
        Ok(receipt)
    }

    /// Mutable account plus the tariff, borrowed together
    pub(crate) fn account_mut(&mut self, position: usize) -> BusinessResult<(&mut Account, &Tariff)> {
        let account = position
            .checked_sub(1)
            .and_then(|i| self.accounts.get_mut(i))
            .ok_or(BusinessError::AccountNotFound(position))?;
        Ok((account, &self.tariff))
    }

    /// Two distinct accounts borrowed mutably at once.
    pub(crate) fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> BusinessResult<(&mut Account, &mut Account, &Tariff)> {
        if first == second {
            return Err(BusinessError::SameAccountTransfer);
        }
        for position in [first, second] {
            if position == 0 || position > self.accounts.len() {
                return Err(BusinessError::AccountNotFound(position));
            }
        }

        let (a, b) = (first - 1, second - 1);
        let (left, right) = self.accounts.split_at_mut(a.max(b));
        let (low, high) = (&mut left[a.min(b)], &mut right[0]);
        let (first_account, second_account) = if a < b { (low, high) } else { (high, low) };
        Ok((first_account, second_account, &self.tariff))
    }

    pub(crate) fn accounts_mut(&mut self) -> (&mut [Account], &Tariff) {
        (&mut self.accounts, &self.tariff)
    }
}
