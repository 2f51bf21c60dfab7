// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{amount_from_sql, amount_to_sql, check_new_amount, date_from_sql, required_text};
use crate::error::{LedgerError, LedgerResult};
use crate::models::SavingsEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

const TABLE: &str = "savings";

pub struct Savings<'c> {
    conn: &'c Connection,
}

impl<'c> Savings<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Savings { conn }
    }

    pub fn add(&self, source: &str, amount: Decimal, date: NaiveDate) -> LedgerResult<i64> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }
        check_new_amount(amount)?;
        let source = required_text("source", source)?;
        self.conn.execute(
            "INSERT INTO savings(source, amount, date) VALUES (?1, ?2, ?3)",
            params![source, amount_to_sql(amount)?, date.to_string()],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, %amount, "savings added");
        Ok(id)
    }

    pub(crate) fn restore_row(&self, s: &SavingsEntry) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT INTO savings(id, source, amount, date) VALUES (?1, ?2, ?3, ?4)",
            params![s.id, s.source, amount_to_sql(s.amount)?, s.date.to_string()],
        )?;
        Ok(())
    }

    pub fn list(&self) -> LedgerResult<Vec<SavingsEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, source, amount, date FROM savings ORDER BY date DESC, id DESC")?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let source: Option<String> = r.get(1)?;
            let amount: f64 = r.get(2)?;
            let date: String = r.get(3)?;
            data.push(SavingsEntry {
                id,
                source: source.unwrap_or_default(),
                amount: amount_from_sql(TABLE, id, amount)?,
                date: date_from_sql(TABLE, id, &date)?,
            });
        }
        Ok(data)
    }

    pub fn remove(&self, id: i64) -> LedgerResult<bool> {
        let n = self
            .conn
            .execute("DELETE FROM savings WHERE id=?1", params![id])?;
        tracing::debug!(id, removed = n > 0, "savings remove");
        Ok(n > 0)
    }
}
