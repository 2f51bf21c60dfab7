// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record stores backed by the SQLite tables. Each store borrows the
//! connection owned by [`crate::db::Store`].

mod debts;
mod savings;
mod transactions;

pub use debts::Debts;
pub use savings::Savings;
pub use transactions::{SortBy, TransactionQuery, Transactions};

use crate::error::{LedgerError, LedgerResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Largest amount a new record may carry. Keeps every ledger sum far inside
/// `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Rejects amounts above [`MAX_AMOUNT`] at creation time.
pub(crate) fn check_new_amount(amount: Decimal) -> LedgerResult<()> {
    if amount > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(())
}

// Amount columns are REAL. Refuse anything that would not read back.
pub(crate) fn amount_to_sql(amount: Decimal) -> LedgerResult<f64> {
    let v = amount
        .to_f64()
        .ok_or_else(|| LedgerError::Validation(format!("amount {} is out of range", amount)))?;
    if Decimal::try_from(v).is_err() {
        return Err(LedgerError::Validation(format!(
            "amount {} cannot be stored",
            amount
        )));
    }
    Ok(v)
}

pub(crate) fn amount_from_sql(table: &'static str, id: i64, v: f64) -> LedgerResult<Decimal> {
    Decimal::try_from(v)
        .map(|d| d.normalize())
        .map_err(|e| LedgerError::InvalidRecord {
            table,
            id,
            reason: format!("amount {}: {}", v, e),
        })
}

pub(crate) fn date_from_sql(table: &'static str, id: i64, s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| LedgerError::InvalidRecord {
        table,
        id,
        reason: format!("date '{}': {}", s, e),
    })
}

pub(crate) fn parse_column<T>(table: &'static str, id: i64, raw: &str) -> LedgerResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|reason| LedgerError::InvalidRecord { table, id, reason })
}

/// Trims and rejects blank required text.
pub(crate) fn required_text(field: &str, value: &str) -> LedgerResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(LedgerError::Validation(format!("{} must not be empty", field)));
    }
    Ok(v.to_string())
}

pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
