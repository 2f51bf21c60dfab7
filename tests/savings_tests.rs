// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use hisab::aggregate::total_capital;
use hisab::db::Store;
use hisab::error::LedgerError;
use rust_decimal::Decimal;

#[test]
fn savings_add_list_remove() {
    let store = Store::open_in_memory().unwrap();
    let savings = store.savings();
    let first = savings
        .add("Salary", Decimal::new(1000, 0), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .unwrap();
    savings
        .add("Bonus", Decimal::new(500, 0), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        .unwrap();

    let rows = savings.list().unwrap();
    assert_eq!(rows[0].source, "Bonus");
    assert_eq!(total_capital(&rows).unwrap(), Decimal::new(1500, 0));

    assert!(savings.remove(first).unwrap());
    assert!(!savings.remove(first).unwrap());
    assert_eq!(total_capital(&savings.list().unwrap()).unwrap(), Decimal::new(500, 0));
}

#[test]
fn savings_validation() {
    let store = Store::open_in_memory().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert!(matches!(
        store.savings().add("FD", Decimal::ZERO, today),
        Err(LedgerError::Validation(_))
    ));
    assert!(matches!(
        store.savings().add(" ", Decimal::ONE, today),
        Err(LedgerError::Validation(_))
    ));
    assert!(matches!(
        store.savings().add("FD", Decimal::MAX, today),
        Err(LedgerError::Validation(_))
    ));
    assert!(store.savings().list().unwrap().is_empty());
}
