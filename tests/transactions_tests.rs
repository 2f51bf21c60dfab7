// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use hisab::db::Store;
use hisab::error::LedgerError;
use hisab::ledger::{MAX_AMOUNT, SortBy, TransactionQuery};
use hisab::models::TransactionKind;
use hisab::{cli, commands::transactions};
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn setup() -> Store {
    let store = Store::open_in_memory().unwrap();
    let txs = store.transactions();
    txs.add(
        TransactionKind::Income,
        "Salary",
        Decimal::new(5000, 0),
        d(2025, 1, 1),
        Some("January pay"),
    )
    .unwrap();
    txs.add(TransactionKind::Expense, "Food", Decimal::new(200, 0), d(2025, 1, 2), None)
        .unwrap();
    txs.add(TransactionKind::Expense, "Rent", Decimal::new(1500, 0), d(2025, 1, 3), Some("Flat"))
        .unwrap();
    txs.add(
        TransactionKind::Expense,
        "Food",
        Decimal::new(50, 0),
        d(2025, 2, 1),
        Some("বাজার"),
    )
    .unwrap();
    store
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["hisab", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let q = transactions::query_from_args(list_m).unwrap();
            let rows = store.transactions().query(&q).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, d(2025, 2, 1));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_then_list_keeps_every_field() {
    let store = Store::open_in_memory().unwrap();
    let amount: Decimal = "12.5".parse().unwrap();
    let id = store
        .transactions()
        .add(TransactionKind::Expense, "Books", amount, d(2024, 3, 9), Some("Rust book"))
        .unwrap();

    let rows = store.transactions().list(None).unwrap();
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.id, id);
    assert_eq!(r.kind, TransactionKind::Expense);
    assert_eq!(r.category, "Books");
    assert_eq!(r.amount, amount);
    assert_eq!(r.date, d(2024, 3, 9));
    assert_eq!(r.note.as_deref(), Some("Rust book"));
}

#[test]
fn ids_are_increasing() {
    let store = Store::open_in_memory().unwrap();
    let txs = store.transactions();
    let a = txs
        .add(TransactionKind::Income, "A", Decimal::ONE, d(2024, 1, 1), None)
        .unwrap();
    let b = txs
        .add(TransactionKind::Income, "B", Decimal::ONE, d(2024, 1, 1), None)
        .unwrap();
    assert!(b > a);
}

#[test]
fn add_rejects_non_positive_amount_and_blank_category() {
    let store = Store::open_in_memory().unwrap();
    let txs = store.transactions();
    let zero = txs.add(TransactionKind::Income, "Salary", Decimal::ZERO, d(2024, 1, 1), None);
    assert!(matches!(zero, Err(LedgerError::Validation(_))));
    let neg = txs.add(TransactionKind::Expense, "Food", Decimal::new(-5, 0), d(2024, 1, 1), None);
    assert!(matches!(neg, Err(LedgerError::Validation(_))));
    let blank = txs.add(TransactionKind::Expense, "   ", Decimal::TEN, d(2024, 1, 1), None);
    assert!(matches!(blank, Err(LedgerError::Validation(_))));
    assert!(txs.list(None).unwrap().is_empty());
}

#[test]
fn list_is_newest_first() {
    let store = setup();
    let rows = store.transactions().list(None).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d(2025, 2, 1), d(2025, 1, 3), d(2025, 1, 2), d(2025, 1, 1)]);
}

#[test]
fn search_is_case_insensitive_over_category_and_note() {
    let store = setup();
    let txs = store.transactions();
    assert_eq!(txs.list(Some("FOOD")).unwrap().len(), 2);
    let by_note = txs.list(Some("flat")).unwrap();
    assert_eq!(by_note.len(), 1);
    assert_eq!(by_note[0].category, "Rent");
    assert_eq!(txs.list(Some("বাজার")).unwrap().len(), 1);
}

#[test]
fn search_without_match_is_empty() {
    let store = setup();
    assert!(store.transactions().list(Some("foo")).unwrap().is_empty());
}

#[test]
fn query_filters_kind_month_and_sorts_by_amount() {
    let store = setup();
    let q = TransactionQuery {
        kind: Some(TransactionKind::Expense),
        month: Some("2025-01".into()),
        sort: SortBy::Amount,
        ..TransactionQuery::default()
    };
    let rows = store.transactions().query(&q).unwrap();
    let cats: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, vec!["Rent", "Food"]);
}

#[test]
fn cli_type_all_means_no_kind_filter() {
    let matches = cli::build_cli().get_matches_from([
        "hisab", "tx", "list", "--type", "all", "--sort", "amount",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    let q = transactions::query_from_args(list_m).unwrap();
    assert_eq!(q.kind, None);
    assert_eq!(q.sort, SortBy::Amount);
}

#[test]
fn remove_is_idempotent() {
    let store = setup();
    let txs = store.transactions();
    let id = txs.list(Some("rent")).unwrap()[0].id;
    assert!(txs.remove(id).unwrap());
    assert!(!txs.remove(id).unwrap());
    assert!(txs.list(None).unwrap().iter().all(|r| r.id != id));
    assert!(txs.get(id).unwrap().is_none());
}

#[test]
fn remove_unknown_id_is_not_an_error() {
    let store = Store::open_in_memory().unwrap();
    assert!(!store.transactions().remove(4242).unwrap());
}

#[test]
fn corrupt_type_column_is_reported() {
    let store = Store::open_in_memory().unwrap();
    store
        .conn()
        .execute(
            "INSERT INTO transactions(type, category, amount, date, note) \
             VALUES ('GIFT','X',1.0,'2024-01-01',NULL)",
            [],
        )
        .unwrap();
    let err = store.transactions().list(None).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRecord { table: "transactions", .. }));
}

#[test]
fn amounts_above_the_cap_are_refused() {
    let store = Store::open_in_memory().unwrap();
    let txs = store.transactions();
    let at_cap = txs
        .add(TransactionKind::Income, "Windfall", MAX_AMOUNT, d(2024, 1, 1), None)
        .unwrap();
    for amount in [MAX_AMOUNT + Decimal::ONE, Decimal::MAX] {
        assert!(matches!(
            txs.add(TransactionKind::Income, "Windfall", amount, d(2024, 1, 2), None),
            Err(LedgerError::Validation(_))
        ));
    }

    let rows = txs.list(None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, at_cap);
    assert_eq!(rows[0].amount, MAX_AMOUNT);
}

#[test]
fn cli_add_records_entry() {
    let store = Store::open_in_memory().unwrap();
    let matches = cli::build_cli().get_matches_from([
        "hisab", "tx", "add", "--type", "Expense", "--category", " Bus ", "--amount", "35.50",
        "--date", "2024-07-04", "--note", "office",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&store, tx_m).unwrap();

    let rows = store.transactions().list(None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, TransactionKind::Expense);
    assert_eq!(rows[0].category, "Bus");
    assert_eq!(rows[0].amount, Decimal::new(355, 1));
    assert_eq!(rows[0].date, d(2024, 7, 4));
    assert_eq!(rows[0].note.as_deref(), Some("office"));
}

#[test]
fn cli_add_rejects_zero_and_oversized_amounts() {
    let store = Store::open_in_memory().unwrap();
    for amount in ["0", "1000000000001"] {
        let matches = cli::build_cli().get_matches_from([
            "hisab", "tx", "add", "--type", "income", "--category", "Gift", "--amount", amount,
        ]);
        let (_, tx_m) = matches.subcommand().unwrap();
        let err = transactions::handle(&store, tx_m).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LedgerError>(),
            Some(LedgerError::Validation(_))
        ));
    }
    assert!(store.transactions().list(None).unwrap().is_empty());
}

#[test]
fn cli_list_and_rm_run_against_store() {
    let store = setup();
    let matches = cli::build_cli().get_matches_from([
        "hisab", "tx", "list", "--month", "2025-01", "--json",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&store, tx_m).unwrap();

    let id = store.transactions().list(Some("flat")).unwrap()[0].id;
    let id_arg = id.to_string();
    let matches = cli::build_cli().get_matches_from(["hisab", "tx", "rm", "--id", &id_arg]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&store, tx_m).unwrap();
    assert!(store.transactions().get(id).unwrap().is_none());
    assert_eq!(store.transactions().list(None).unwrap().len(), 3);
}
