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
use crate::models::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

const TABLE: &str = "transactions";
const COLUMNS: &str = "id, type, category, amount, date, note";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Amount,
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortBy::Date),
            "amount" => Ok(SortBy::Amount),
            other => Err(format!("unknown sort key '{}' (use date|amount)", other)),
        }
    }
}

/// History view filter. The default matches everything, newest first.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Case-insensitive substring over category or note.
    pub search: Option<String>,
    pub kind: Option<TransactionKind>,
    /// `YYYY-MM`
    pub month: Option<String>,
    pub sort: SortBy,
    pub limit: Option<usize>,
}

pub struct Transactions<'c> {
    conn: &'c Connection,
}

impl<'c> Transactions<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Transactions { conn }
    }

    /// Records a new entry and returns its id. Amount must be positive and at
    /// most [`super::MAX_AMOUNT`], category non-blank; nothing is written otherwise.
    pub fn add(
        &self,
        kind: TransactionKind,
        category: &str,
        amount: Decimal,
        date: NaiveDate,
        note: Option<&str>,
    ) -> LedgerResult<i64> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }
        check_new_amount(amount)?;
        let category = required_text("category", category)?;
        let note = optional_text(note);
        self.conn.execute(
            "INSERT INTO transactions(type, category, amount, date, note) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                kind.as_str(),
                category,
                amount_to_sql(amount)?,
                date.to_string(),
                note
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, %kind, %amount, %date, "transaction added");
        Ok(id)
    }

    /// Writes a backed-up record as is, keeping its id.
    pub(crate) fn restore_row(&self, tx: &Transaction) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT INTO transactions(id, type, category, amount, date, note) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                tx.id,
                tx.kind.as_str(),
                tx.category,
                amount_to_sql(tx.amount)?,
                tx.date.to_string(),
                tx.note
            ],
        )?;
        Ok(())
    }

    /// Every record, newest first, optionally narrowed by a search term.
    pub fn list(&self, filter: Option<&str>) -> LedgerResult<Vec<Transaction>> {
        self.query(&TransactionQuery {
            search: filter.map(str::to_string),
            ..TransactionQuery::default()
        })
    }

    pub fn query(&self, q: &TransactionQuery) -> LedgerResult<Vec<Transaction>> {
        if q.limit == Some(0) {
            return Ok(Vec::new());
        }
        let mut sql = format!("SELECT {} FROM transactions WHERE 1=1", COLUMNS);
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(kind) = q.kind {
            sql.push_str(" AND type=?");
            params_vec.push(kind.as_str().into());
        }
        if let Some(month) = &q.month {
            sql.push_str(" AND substr(date,1,7)=?");
            params_vec.push(month.clone());
        }
        match q.sort {
            SortBy::Date => sql.push_str(" ORDER BY date DESC, id DESC"),
            SortBy::Amount => sql.push_str(" ORDER BY amount DESC, id DESC"),
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params_vec.iter()))?;

        // SQLite's LIKE only folds ASCII, so the search runs here.
        let needle = q
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let tx = decode(r)?;
            if let Some(n) = &needle {
                if !matches_search(&tx, n) {
                    continue;
                }
            }
            data.push(tx);
            if q.limit.is_some_and(|l| data.len() >= l) {
                break;
            }
        }
        Ok(data)
    }

    pub fn get(&self, id: i64) -> LedgerResult<Option<Transaction>> {
        let sql = format!("SELECT {} FROM transactions WHERE id=?1", COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(decode(r)?)),
            None => Ok(None),
        }
    }

    /// Deletes by id. Absent ids are a no-op; the result says whether a row went away.
    pub fn remove(&self, id: i64) -> LedgerResult<bool> {
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        tracing::debug!(id, removed = n > 0, "transaction remove");
        Ok(n > 0)
    }
}

fn matches_search(tx: &Transaction, needle: &str) -> bool {
    tx.category.to_lowercase().contains(needle)
        || tx
            .note
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(needle))
}

fn decode(r: &Row<'_>) -> LedgerResult<Transaction> {
    let id: i64 = r.get(0)?;
    let kind: String = r.get(1)?;
    let category: Option<String> = r.get(2)?;
    let amount: f64 = r.get(3)?;
    let date: String = r.get(4)?;
    let note: Option<String> = r.get(5)?;
    Ok(Transaction {
        id,
        kind: parse_column(TABLE, id, &kind)?,
        category: category.unwrap_or_default(),
        amount: amount_from_sql(TABLE, id, amount)?,
        date: date_from_sql(TABLE, id, &date)?,
        note: note.filter(|n| !n.is_empty()),
    })
}
