//! End-to-end scenarios through the registry
//!
//! Each test drives the registry the way the console does: open accounts,
//! pick them by position, and check balances afterwards.

use minibank_business::{BusinessError, Registry};
use minibank_core::{
    AccountKind, AtmChannel, Confirmation, CoreError, Customer, Tariff, TransferOutcome,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn adult(given: &str, family: &str) -> Customer {
    Customer::adult(given, family, 35).unwrap()
}

fn balance(registry: &Registry, position: usize) -> Decimal {
    registry.account(position).unwrap().balance()
}

/// Savings opened with 1,000,000 then a second deposit of 1,000,000
#[test]
fn test_savings_second_deposit() {
    let mut registry = Registry::new(Tariff::default());
    registry
        .open_account(adult("Camila", "Rojas"), AccountKind::Savings, dec!(1000000))
        .unwrap();

    let receipt = registry.deposit(1, dec!(1000000)).unwrap();

    assert_eq!(receipt.commission, dec!(25000));
    assert_eq!(balance(&registry, 1), dec!(1975000));
}

/// Checking with 250,000: one check clears, the next bounces
#[test]
fn test_checks_against_current_balance() {
    let mut registry = Registry::default();
    registry
        .open_account_by_label(adult("Diego", "Vargas"), "checking", dec!(250000))
        .unwrap();

    let receipt = registry.issue_check(1, dec!(100000)).unwrap();
    assert_eq!(receipt.surcharge, dec!(3000));
    assert_eq!(balance(&registry, 1), dec!(147000));

    let err = registry.issue_check(1, dec!(200000)).unwrap_err();
    assert_eq!(
        err,
        BusinessError::Core(CoreError::insufficient_funds(dec!(203000), dec!(147000)))
    );
    assert_eq!(balance(&registry, 1), dec!(147000));
}

#[test]
fn test_atm_channels() {
    let mut registry = Registry::default();
    registry
        .open_account(adult("Elena", "Castro"), AccountKind::Savings, dec!(100000))
        .unwrap();
    registry
        .open_account(adult("Elena", "Castro"), AccountKind::Savings, dec!(100000))
        .unwrap();

    let external = registry
        .withdraw(1, dec!(50000), AtmChannel::ExternalAtm)
        .unwrap();
    let own = registry.withdraw(2, dec!(50000), AtmChannel::OwnAtm).unwrap();

    assert_eq!(external.commission, dec!(4500));
    assert_eq!(balance(&registry, 1), dec!(45500));
    assert_eq!(own.commission, dec!(0));
    assert_eq!(balance(&registry, 2), dec!(50000));
}

#[test]
fn test_checking_minimum_opening() {
    let mut registry = Registry::default();

    assert!(registry
        .open_account(adult("Fabio", "Luna"), AccountKind::Checking, dec!(199999.99))
        .is_err());
    assert!(registry
        .open_account(adult("Fabio", "Luna"), AccountKind::Checking, dec!(200000))
        .is_ok());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_transfer_leaks_only_commission() {
    let mut registry = Registry::default();
    registry
        .open_account(adult("Gala", "Prieto"), AccountKind::Checking, dec!(800000))
        .unwrap();
    registry
        .open_account(adult("Hugo", "Prieto"), AccountKind::Savings, dec!(10000))
        .unwrap();
    let before = balance(&registry, 1) + balance(&registry, 2);

    let pending = registry.propose_transfer(1, 2, dec!(333333.33)).unwrap();
    let outcome = registry
        .commit_transfer(&pending, Confirmation::from_answer("s"))
        .unwrap();

    let TransferOutcome::Completed(receipt) = outcome else {
        panic!("transfer should complete");
    };
    let after = balance(&registry, 1) + balance(&registry, 2);
    assert_eq!(before, after + receipt.quote.commission);
    assert_eq!(receipt.source_balance, balance(&registry, 1));
    assert_eq!(receipt.destination_balance, dec!(343333.33));
}

#[test]
fn test_declined_transfer_is_bit_identical() {
    let mut registry = Registry::default();
    registry
        .open_account(adult("Iris", "Soto"), AccountKind::Savings, dec!(1234.5678))
        .unwrap();
    registry
        .open_account(adult("Jon", "Soto"), AccountKind::Savings, dec!(0.01))
        .unwrap();

    let pending = registry.propose_transfer(1, 2, dec!(1000)).unwrap();
    let outcome = registry
        .commit_transfer(&pending, Confirmation::from_answer("n"))
        .unwrap();

    assert_eq!(outcome, TransferOutcome::Declined);
    assert_eq!(balance(&registry, 1).serialize(), dec!(1234.5678).serialize());
    assert_eq!(balance(&registry, 2).serialize(), dec!(0.01).serialize());
}

#[test]
fn test_month_end_over_mixed_registry() {
    let mut registry = Registry::default();
    registry
        .open_account(adult("Karla", "Núñez"), AccountKind::Savings, dec!(600000))
        .unwrap();
    registry
        .open_account(adult("Leo", "Núñez"), AccountKind::Checking, dec!(400000))
        .unwrap();

    let entries = registry.run_month_end();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].statement.contains("Savings"));
    assert!(entries[1].statement.contains("Checking"));
    assert_eq!(
        balance(&registry, 1),
        dec!(600000) + dec!(600000) * (dec!(0.022) / dec!(12))
    );
    assert_eq!(balance(&registry, 2), dec!(400000) * (dec!(1) - dec!(0.015)));
}

/// Deposits that would push a balance past the representable range fail
/// cleanly and leave the balance alone
#[test]
fn test_deposit_past_range_is_rejected() {
    let mut registry = Registry::default();
    registry
        .open_account(adult("Nora", "Vidal"), AccountKind::Savings, Decimal::MAX)
        .unwrap();

    let err = registry.deposit(1, dec!(10000000000)).unwrap_err();

    assert_eq!(
        err,
        BusinessError::Core(CoreError::AmountOverflow(dec!(10000000000)))
    );
    assert_eq!(balance(&registry, 1), Decimal::MAX);
}

#[test]
fn test_minor_customer_needs_guardian() {
    assert_eq!(
        Customer::new("Mía", "Ortega", 16, None),
        Err(CoreError::GuardianRequired)
    );

    let minor = Customer::new("Mía", "Ortega", 16, Some("Raúl Ortega".to_string())).unwrap();
    let mut registry = Registry::default();
    let account = registry
        .open_account(minor, AccountKind::Savings, dec!(5000))
        .unwrap();

    assert!(account.to_string().contains("Guardian: Raúl Ortega"));
}
