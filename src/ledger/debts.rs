// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{
    amount_from_sql, amount_to_sql, check_new_amount, date_from_sql, optional_text, parse_column,
    required_text,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Debt, DebtKind, DebtStatus};
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

const TABLE: &str = "debts";
const COLUMNS: &str = "id, type, person, amount, date, note, status";

pub struct Debts<'c> {
    conn: &'c Connection,
}

impl<'c> Debts<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Debts { conn }
    }

    /// New debts always start PENDING. Zero amounts are accepted; only
    /// negative ones are refused.
    pub fn add(
        &self,
        kind: DebtKind,
        person: &str,
        amount: Decimal,
        date: NaiveDate,
        note: Option<&str>,
    ) -> LedgerResult<i64> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        check_new_amount(amount)?;
        let person = required_text("person", person)?;
        self.conn.execute(
            "INSERT INTO debts(type, person, amount, date, note, status) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                kind.as_str(),
                person,
                amount_to_sql(amount)?,
                date.to_string(),
                optional_text(note),
                DebtStatus::Pending.as_str()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, %kind, %amount, "debt added");
        Ok(id)
    }

    /// Writes a backed-up record as is, keeping its id and status.
    pub(crate) fn restore_row(&self, d: &Debt) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT INTO debts(id, type, person, amount, date, note, status) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                d.id,
                d.kind.as_str(),
                d.person,
                amount_to_sql(d.amount)?,
                d.date.to_string(),
                d.note,
                d.status.as_str()
            ],
        )?;
        Ok(())
    }

    /// Storage order.
    pub fn list(&self) -> LedgerResult<Vec<Debt>> {
        let sql = format!("SELECT {} FROM debts ORDER BY id", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(decode(r)?);
        }
        Ok(data)
    }

    pub fn list_by_status(&self, status: DebtStatus) -> LedgerResult<Vec<Debt>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|d| d.status == status)
            .collect())
    }

    pub fn get(&self, id: i64) -> LedgerResult<Option<Debt>> {
        let sql = format!("SELECT {} FROM debts WHERE id=?1", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(decode(r)?)),
            None => Ok(None),
        }
    }

    /// Marks a debt as settled. Returns `false` when the id is unknown or
    /// the debt was already settled.
    pub fn settle(&self, id: i64) -> LedgerResult<bool> {
        let n = self.conn.execute(
            "UPDATE debts SET status=?1 WHERE id=?2 AND status IS NOT ?1",
            params![DebtStatus::Settled.as_str(), id],
        )?;
        tracing::debug!(id, changed = n > 0, "debt settle");
        Ok(n > 0)
    }

    pub fn remove(&self, id: i64) -> LedgerResult<bool> {
        let n = self
            .conn
            .execute("DELETE FROM debts WHERE id=?1", params![id])?;
        tracing::debug!(id, removed = n > 0, "debt remove");
        Ok(n > 0)
    }
}

// A NULL status reads as PENDING.
fn decode_status(id: i64, raw: Option<String>) -> LedgerResult<DebtStatus> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_column(TABLE, id, &s),
        _ => Ok(DebtStatus::Pending),
    }
}

fn decode(r: &Row<'_>) -> LedgerResult<Debt> {
    let id: i64 = r.get(0)?;
    let kind: String = r.get(1)?;
    let person: Option<String> = r.get(2)?;
    let amount: f64 = r.get(3)?;
    let date: String = r.get(4)?;
    let note: Option<String> = r.get(5)?;
    let status: Option<String> = r.get(6)?;
    Ok(Debt {
        id,
        kind: parse_column(TABLE, id, &kind)?,
        person: person.unwrap_or_default(),
        amount: amount_from_sql(TABLE, id, amount)?,
        date: date_from_sql(TABLE, id, &date)?,
        note: note.filter(|n| !n.is_empty()),
        status: decode_status(id, status)?,
    })
}
