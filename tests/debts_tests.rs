// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use hisab::db::Store;
use hisab::error::LedgerError;
use hisab::ledger::MAX_AMOUNT;
use hisab::models::{DebtKind, DebtStatus};
use hisab::{cli, commands::debts};
use rust_decimal::Decimal;

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, n).unwrap()
}

#[test]
fn new_debt_starts_pending() {
    let store = Store::open_in_memory().unwrap();
    let id = store
        .debts()
        .add(DebtKind::Lend, "Alice", Decimal::new(1000, 0), day(1), Some("bike repair"))
        .unwrap();
    let debt = store.debts().get(id).unwrap().unwrap();
    assert_eq!(debt.status, DebtStatus::Pending);
    assert_eq!(debt.kind, DebtKind::Lend);
    assert_eq!(debt.person, "Alice");
    assert_eq!(debt.amount, Decimal::new(1000, 0));
    assert_eq!(debt.note.as_deref(), Some("bike repair"));
}

#[test]
fn list_keeps_insertion_order() {
    let store = Store::open_in_memory().unwrap();
    let debts = store.debts();
    debts.add(DebtKind::Borrow, "Zed", Decimal::ONE, day(9), None).unwrap();
    debts.add(DebtKind::Lend, "Amy", Decimal::ONE, day(1), None).unwrap();
    debts.add(DebtKind::Lend, "Moe", Decimal::ONE, day(5), None).unwrap();
    let names: Vec<String> = debts.list().unwrap().into_iter().map(|d| d.person).collect();
    assert_eq!(names, vec!["Zed", "Amy", "Moe"]);
}

#[test]
fn zero_amount_is_accepted_negative_is_not() {
    let store = Store::open_in_memory().unwrap();
    let debts = store.debts();
    assert!(debts.add(DebtKind::Lend, "Bob", Decimal::ZERO, day(1), None).is_ok());
    let neg = debts.add(DebtKind::Lend, "Bob", Decimal::new(-1, 0), day(1), None);
    assert!(matches!(neg, Err(LedgerError::Validation(_))));
    let blank = debts.add(DebtKind::Borrow, "", Decimal::ONE, day(1), None);
    assert!(matches!(blank, Err(LedgerError::Validation(_))));
    let huge = debts.add(DebtKind::Borrow, "Bob", MAX_AMOUNT + Decimal::ONE, day(1), None);
    assert!(matches!(huge, Err(LedgerError::Validation(_))));
    assert_eq!(debts.list().unwrap().len(), 1);
}

#[test]
fn settle_is_one_way_and_idempotent() {
    let store = Store::open_in_memory().unwrap();
    let debts = store.debts();
    let id = debts.add(DebtKind::Borrow, "Bob", Decimal::new(300, 0), day(2), None).unwrap();

    assert!(debts.settle(id).unwrap());
    assert_eq!(debts.get(id).unwrap().unwrap().status, DebtStatus::Settled);
    assert!(!debts.settle(id).unwrap());
    assert_eq!(debts.get(id).unwrap().unwrap().status, DebtStatus::Settled);
}

#[test]
fn settle_unknown_id_is_a_no_op() {
    let store = Store::open_in_memory().unwrap();
    assert!(!store.debts().settle(99).unwrap());
}

#[test]
fn list_by_status_splits_sections() {
    let store = Store::open_in_memory().unwrap();
    let debts = store.debts();
    let a = debts.add(DebtKind::Lend, "Alice", Decimal::TEN, day(1), None).unwrap();
    debts.add(DebtKind::Borrow, "Bob", Decimal::TEN, day(2), None).unwrap();
    debts.settle(a).unwrap();
    let pending = debts.list_by_status(DebtStatus::Pending).unwrap();
    let settled = debts.list_by_status(DebtStatus::Settled).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].person, "Bob");
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].id, a);
}

#[test]
fn storage_remove_ignores_status() {
    let store = Store::open_in_memory().unwrap();
    let debts = store.debts();
    let id = debts.add(DebtKind::Lend, "Alice", Decimal::TEN, day(1), None).unwrap();
    assert!(debts.remove(id).unwrap());
    assert!(!debts.remove(id).unwrap());
    assert!(debts.list().unwrap().is_empty());
}

#[test]
fn cli_rm_refuses_pending_without_force() {
    let store = Store::open_in_memory().unwrap();
    let id = store
        .debts()
        .add(DebtKind::Lend, "Alice", Decimal::TEN, day(1), None)
        .unwrap();
    let id_s = id.to_string();

    let matches = cli::build_cli().get_matches_from(["hisab", "debt", "rm", "--id", &id_s]);
    let (_, debt_m) = matches.subcommand().unwrap();
    assert!(debts::handle(&store, debt_m).is_err());
    assert!(store.debts().get(id).unwrap().is_some());

    let matches =
        cli::build_cli().get_matches_from(["hisab", "debt", "rm", "--id", &id_s, "--force"]);
    let (_, debt_m) = matches.subcommand().unwrap();
    debts::handle(&store, debt_m).unwrap();
    assert!(store.debts().get(id).unwrap().is_none());
}

#[test]
fn cli_settle_then_rm() {
    let store = Store::open_in_memory().unwrap();
    let id = store
        .debts()
        .add(DebtKind::Borrow, "Bob", Decimal::TEN, day(1), None)
        .unwrap();
    let id_s = id.to_string();

    let matches = cli::build_cli().get_matches_from(["hisab", "debt", "settle", "--id", &id_s]);
    let (_, debt_m) = matches.subcommand().unwrap();
    debts::handle(&store, debt_m).unwrap();

    let matches = cli::build_cli().get_matches_from(["hisab", "debt", "rm", "--id", &id_s]);
    let (_, debt_m) = matches.subcommand().unwrap();
    debts::handle(&store, debt_m).unwrap();
    assert!(store.debts().list().unwrap().is_empty());
}
